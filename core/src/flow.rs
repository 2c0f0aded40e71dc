//! Page-level orchestration: registration, list, delete and update.
//!
//! # Design
//! `PageFlow` is the only place that performs I/O, and it does so through
//! two host-provided seams: a `Transport` for the HTTP round-trip and a `Ui`
//! for confirmations, alerts and navigation. Each operation issues at most
//! one request and blocks on the transport until it returns.
//!
//! Failures fall into two classes. A validation failure is alerted before
//! any request is built. A communication failure (transport error, non-2xx,
//! undecodable body) is alerted and logged after the call. The page stays
//! usable either way and the user can retry.

use tracing::{debug, error, info, warn};

use crate::client::MedicoClient;
use crate::config::{ClientConfig, Pages};
use crate::error::ApiError;
use crate::form::{collect, FormSource, MedicoForm};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::navigation::{edit_href, parse_edit_href, NavigationError};
use crate::table::{TableBody, TableLayout, TableRenderer};
use crate::types::{Medico, MedicoId};
use crate::validation::{validate, validate_for_update, ValidationError};

pub const REGISTERED_MESSAGE: &str = "Médico cadastrado com sucesso!";
pub const UPDATED_MESSAGE: &str = "Médico atualizado com sucesso!";
pub const REMOVED_MESSAGE: &str = "Médico removido com sucesso!";
pub const CONFIRM_UPDATE: &str = "Deseja realmente atualizar o médico?";
pub const CONFIRM_REMOVE: &str = "Deseja realmente remover o médico?";

/// Alert text for a communication failure.
pub fn communication_message(err: &ApiError) -> String {
    format!("Erro ao se comunicar com o servidor. {err}")
}

/// Where the page goes next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Redirect(String),
    Reload,
}

/// User-facing side of a page.
pub trait Ui {
    /// Ask the user; `false` cancels the action.
    fn confirm(&mut self, message: &str) -> bool;
    fn alert(&mut self, message: &str);
    fn navigate(&mut self, to: Navigation);
}

impl<U: Ui + ?Sized> Ui for &mut U {
    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }

    fn navigate(&mut self, to: Navigation) {
        (**self).navigate(to)
    }
}

#[derive(Debug)]
pub enum FlowOutcome {
    Completed,
    /// Validation failed; nothing was sent.
    Rejected(ValidationError),
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    Failed(ApiError),
}

impl FlowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FlowOutcome::Completed)
    }
}

pub struct PageFlow<T, U> {
    client: MedicoClient,
    transport: T,
    ui: U,
    pages: Pages,
    renderer: TableRenderer,
}

impl<T: Transport, U: Ui> PageFlow<T, U> {
    pub fn new(config: &ClientConfig, transport: T, ui: U) -> Self {
        Self {
            client: MedicoClient::from_config(config),
            transport,
            ui,
            pages: config.pages.clone(),
            renderer: TableRenderer::new(TableLayout::Full, config.pages.update.clone()),
        }
    }

    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.renderer = TableRenderer::new(layout, self.pages.update.clone());
        self
    }

    pub fn client(&self) -> &MedicoClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn into_parts(self) -> (T, U) {
        (self.transport, self.ui)
    }

    /// Registration page submit.
    pub fn register(&mut self, source: &impl FormSource) -> FlowOutcome {
        let form = collect(source);
        if let Err(err) = validate(&form) {
            return self.reject(err);
        }
        let result = self
            .client
            .build_create_medico(&form.to_novo_medico())
            .and_then(|req| self.send(req))
            .and_then(|resp| self.client.parse_create_medico(resp));
        match result {
            Ok(()) => {
                info!(name = %form.name, "physician registered");
                self.ui.alert(REGISTERED_MESSAGE);
                self.ui.navigate(Navigation::Redirect(self.pages.list.clone()));
                FlowOutcome::Completed
            }
            Err(err) => self.fail(err),
        }
    }

    /// List page load: fetch every record and append one row each.
    pub fn load_list<B: TableBody + ?Sized>(&mut self, body: &mut B) -> FlowOutcome {
        let request = self.client.build_list_medicos();
        let medicos = match self
            .send(request)
            .and_then(|resp| self.client.parse_list_medicos(resp))
        {
            Ok(medicos) => medicos,
            Err(err) => return self.fail(err),
        };
        match self.renderer.render_into(&medicos, body) {
            Ok(count) => {
                debug!(rows = count, "physician table rendered");
                FlowOutcome::Completed
            }
            Err(err) => self.fail(ApiError::SerializationError(err.to_string())),
        }
    }

    /// Delete action: confirm, remove, reload.
    pub fn remove(&mut self, id: MedicoId) -> FlowOutcome {
        if !self.ui.confirm(CONFIRM_REMOVE) {
            debug!(%id, "removal cancelled");
            return FlowOutcome::Cancelled;
        }
        let request = self.client.build_remove_medico(id);
        match self
            .send(request)
            .and_then(|resp| self.client.parse_remove_medico(resp))
        {
            Ok(()) => {
                info!(%id, "physician removed");
                self.ui.alert(REMOVED_MESSAGE);
                self.ui.navigate(Navigation::Reload);
                FlowOutcome::Completed
            }
            Err(err) => self.fail(err),
        }
    }

    /// Edit action: go to the update page with the record in the URL.
    pub fn open_editor(&mut self, medico: &Medico) -> Result<(), NavigationError> {
        let href = edit_href(&self.pages.update, medico)?;
        self.ui.navigate(Navigation::Redirect(href));
        Ok(())
    }

    /// Update page load: decode the record from the URL into form values.
    pub fn load_update_form(&self, url: &str) -> Result<MedicoForm, NavigationError> {
        parse_edit_href(url)
            .map(|medico| MedicoForm::populate(&medico))
            .inspect_err(|err| error!(error = %err, "could not load physician from URL"))
    }

    /// Update page submit: validate, confirm, send the full record.
    pub fn update(&mut self, source: &impl FormSource) -> FlowOutcome {
        let form = collect(source);
        if let Err(err) = validate_for_update(&form) {
            return self.reject(err);
        }
        let medico = match form.to_medico() {
            Ok(medico) => medico,
            Err(err) => return self.reject(err),
        };
        if !self.ui.confirm(CONFIRM_UPDATE) {
            debug!(id = %medico.id, "update cancelled");
            return FlowOutcome::Cancelled;
        }
        let result = self
            .client
            .build_update_medico(&medico)
            .and_then(|req| self.send(req))
            .and_then(|resp| self.client.parse_update_medico(resp));
        match result {
            Ok(()) => {
                info!(id = %medico.id, "physician updated");
                self.ui.alert(UPDATED_MESSAGE);
                self.ui.navigate(Navigation::Redirect(self.pages.list.clone()));
                FlowOutcome::Completed
            }
            Err(err) => self.fail(err),
        }
    }

    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        Ok(self.transport.execute(request)?)
    }

    fn reject(&mut self, err: ValidationError) -> FlowOutcome {
        warn!(reason = %err, "submission rejected");
        self.ui.alert(err.user_message());
        FlowOutcome::Rejected(err)
    }

    fn fail(&mut self, err: ApiError) -> FlowOutcome {
        error!(error = %err, "communication failure");
        self.ui.alert(&communication_message(&err));
        FlowOutcome::Failed(err)
    }
}
