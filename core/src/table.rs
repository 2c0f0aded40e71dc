//! Turning physician records into table rows with edit/delete actions.
//!
//! Rendering is append-only: rows go to the [`TableBody`] in input order,
//! one per record, with no diffing. Callers render once per page load into
//! an empty body.

use std::fmt::Write as _;

use crate::navigation::{edit_href, NavigationError};
use crate::types::{Medico, MedicoId};

pub const EDIT_ICON: &str = "./assets/images/pencil-square.svg";
pub const EDIT_ALT: &str = "Editar";
pub const DELETE_ICON: &str = "./assets/images/trash-fill.svg";
pub const DELETE_ALT: &str = "Deletar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Name,
    Specialty,
    Phone,
    Crm,
    Email,
}

impl Column {
    fn cell(&self, medico: &Medico) -> String {
        match self {
            Column::Id => medico.id.to_string(),
            Column::Name => medico.name.clone(),
            Column::Specialty => medico.specialty.clone(),
            Column::Phone => medico.phone.clone(),
            Column::Crm => medico.crm.clone(),
            Column::Email => medico.email.clone(),
        }
    }
}

/// Which columns the list page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    /// id, name, specialty, phone, crm, email
    #[default]
    Full,
    /// Full without the phone column.
    Compact,
}

impl TableLayout {
    pub fn columns(&self) -> &'static [Column] {
        match self {
            TableLayout::Full => &[
                Column::Id,
                Column::Name,
                Column::Specialty,
                Column::Phone,
                Column::Crm,
                Column::Email,
            ],
            TableLayout::Compact => &[
                Column::Id,
                Column::Name,
                Column::Specialty,
                Column::Crm,
                Column::Email,
            ],
        }
    }
}

/// Control in the actions cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// Navigate to the update page carrying the whole record.
    Edit { href: String },
    /// Remove by id after confirmation.
    Delete { id: MedicoId },
}

impl RowAction {
    pub fn icon(&self) -> &'static str {
        match self {
            RowAction::Edit { .. } => EDIT_ICON,
            RowAction::Delete { .. } => DELETE_ICON,
        }
    }

    pub fn alt(&self) -> &'static str {
        match self {
            RowAction::Edit { .. } => EDIT_ALT,
            RowAction::Delete { .. } => DELETE_ALT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: MedicoId,
    pub cells: Vec<String>,
    pub edit: RowAction,
    pub delete: RowAction,
}

/// Where rendered rows go, usually the page's `tbody`.
pub trait TableBody {
    fn append_row(&mut self, row: TableRow);
}

impl TableBody for Vec<TableRow> {
    fn append_row(&mut self, row: TableRow) {
        self.push(row);
    }
}

#[derive(Debug, Clone)]
pub struct TableRenderer {
    layout: TableLayout,
    update_page: String,
}

impl TableRenderer {
    pub fn new(layout: TableLayout, update_page: impl Into<String>) -> Self {
        Self {
            layout,
            update_page: update_page.into(),
        }
    }

    pub fn layout(&self) -> TableLayout {
        self.layout
    }

    pub fn render_row(&self, medico: &Medico) -> Result<TableRow, NavigationError> {
        Ok(TableRow {
            id: medico.id,
            cells: self.layout.columns().iter().map(|c| c.cell(medico)).collect(),
            edit: RowAction::Edit {
                href: edit_href(&self.update_page, medico)?,
            },
            delete: RowAction::Delete { id: medico.id },
        })
    }

    /// Append one row per record and return how many were appended.
    ///
    /// Rows are built before any is appended, so a failure leaves `body`
    /// untouched.
    pub fn render_into<B: TableBody + ?Sized>(
        &self,
        medicos: &[Medico],
        body: &mut B,
    ) -> Result<usize, NavigationError> {
        let rows = medicos
            .iter()
            .map(|m| self.render_row(m))
            .collect::<Result<Vec<_>, _>>()?;
        let count = rows.len();
        for row in rows {
            body.append_row(row);
        }
        Ok(count)
    }
}

/// `tbody` markup for hosts that inject HTML.
#[derive(Debug, Clone, Default)]
pub struct HtmlTableBody {
    html: String,
}

impl HtmlTableBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }
}

impl TableBody for HtmlTableBody {
    fn append_row(&mut self, row: TableRow) {
        self.html.push_str("<tr>");
        for cell in &row.cells {
            let _ = write!(self.html, "<td>{}</td>", escape_html(cell));
        }
        self.html.push_str("<td>");
        for action in [&row.edit, &row.delete] {
            let target = match action {
                RowAction::Edit { href } => format!(r#"data-action="edit" data-href="{}""#, escape_html(href)),
                RowAction::Delete { id } => format!(r#"data-action="delete" data-id="{id}""#),
            };
            let _ = write!(
                self.html,
                r#"<img src="{}" alt="{}" {target}>"#,
                action.icon(),
                action.alt()
            );
        }
        self.html.push_str("</td></tr>");
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::parse_edit_href;

    fn medico(id: i64, name: &str) -> Medico {
        Medico {
            id: MedicoId(id),
            name: name.to_string(),
            specialty: "Pediatria".to_string(),
            phone: format!("1100{id}"),
            crm: format!("CRM-{id}"),
            email: format!("{}@x.com", name.to_lowercase()),
        }
    }

    fn renderer(layout: TableLayout) -> TableRenderer {
        TableRenderer::new(layout, "atualizar-medico.html")
    }

    #[test]
    fn one_row_per_record_in_input_order() {
        let medicos = vec![medico(3, "Lia"), medico(1, "Max"), medico(2, "Noa")];
        let mut body: Vec<TableRow> = Vec::new();
        let count = renderer(TableLayout::Full).render_into(&medicos, &mut body).unwrap();
        assert_eq!(count, 3);
        assert_eq!(body.len(), 3);
        for (row, m) in body.iter().zip(&medicos) {
            assert_eq!(
                row.cells,
                vec![
                    m.id.to_string(),
                    m.name.clone(),
                    m.specialty.clone(),
                    m.phone.clone(),
                    m.crm.clone(),
                    m.email.clone(),
                ]
            );
            assert_eq!(row.delete, RowAction::Delete { id: m.id });
        }
    }

    #[test]
    fn empty_list_renders_nothing() {
        let mut body: Vec<TableRow> = Vec::new();
        let count = renderer(TableLayout::Full).render_into(&[], &mut body).unwrap();
        assert_eq!(count, 0);
        assert!(body.is_empty());
    }

    #[test]
    fn compact_layout_drops_phone() {
        let row = renderer(TableLayout::Compact).render_row(&medico(5, "Olga")).unwrap();
        assert_eq!(row.cells, vec!["5", "Olga", "Pediatria", "CRM-5", "olga@x.com"]);
    }

    #[test]
    fn edit_action_carries_the_record() {
        let m = medico(6, "Paulo");
        let row = renderer(TableLayout::Full).render_row(&m).unwrap();
        let RowAction::Edit { href } = &row.edit else {
            panic!("expected edit action");
        };
        assert!(href.starts_with("atualizar-medico.html?"));
        assert_eq!(parse_edit_href(href).unwrap(), m);
    }

    #[test]
    fn action_icons() {
        let row = renderer(TableLayout::Full).render_row(&medico(1, "Rui")).unwrap();
        assert_eq!(row.edit.icon(), EDIT_ICON);
        assert_eq!(row.edit.alt(), "Editar");
        assert_eq!(row.delete.icon(), DELETE_ICON);
        assert_eq!(row.delete.alt(), "Deletar");
    }

    #[test]
    fn html_body_escapes_cells() {
        let mut m = medico(7, "Sara");
        m.name = "<b>Sara & Co</b>".to_string();
        let mut body = HtmlTableBody::new();
        renderer(TableLayout::Full).render_into(&[m], &mut body).unwrap();
        let html = body.into_string();
        assert!(html.starts_with("<tr><td>7</td><td>&lt;b&gt;Sara &amp; Co&lt;/b&gt;</td>"));
        assert!(html.contains(r#"data-action="delete" data-id="7""#));
        assert!(html.contains(r#"alt="Editar" data-action="edit""#));
        assert!(html.ends_with("</td></tr>"));
        assert_eq!(html.matches("<tr>").count(), 1);
    }
}
