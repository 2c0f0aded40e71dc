//! In-memory physician backend speaking the same contract as the real one.
//!
//! Canonical routes:
//! - `POST /cadastro/medico`
//! - `GET  /listar/medico`
//! - `PUT  /atualizar/medico/{id}`
//! - `PUT  /remover/medico/{id}` (removal is a PUT, not DELETE)
//!
//! `POST /novo/medico` and `GET /lista/medicos` are kept as aliases for older
//! pages.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medico {
    #[serde(rename = "idMedico")]
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "especialidade")]
    pub specialty: String,
    #[serde(rename = "telefone", deserialize_with = "phone")]
    pub phone: String,
    pub crm: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct NovoMedico {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "especialidade")]
    pub specialty: String,
    #[serde(rename = "telefone", deserialize_with = "phone")]
    pub phone: String,
    pub crm: String,
    pub email: String,
}

/// Full-record update body. The id is optional; when present it must match
/// the path.
#[derive(Deserialize)]
pub struct UpdateMedico {
    #[serde(rename = "idMedico", default)]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub fields: NovoMedico,
}

impl NovoMedico {
    fn has_empty_field(&self) -> bool {
        [&self.name, &self.specialty, &self.phone, &self.crm, &self.email]
            .iter()
            .any(|value| value.trim().is_empty())
    }

    fn into_medico(self, id: i64) -> Medico {
        Medico {
            id,
            name: self.name,
            specialty: self.specialty,
            phone: self.phone,
            crm: self.crm,
            email: self.email,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PhoneRepr {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn phone<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match PhoneRepr::deserialize(deserializer)? {
        PhoneRepr::Text(text) => text,
        PhoneRepr::Integer(n) => n.to_string(),
        PhoneRepr::Float(n) => n.to_string(),
    })
}

#[derive(Debug, Default)]
pub struct Store {
    last_id: i64,
    medicos: BTreeMap<i64, Medico>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/cadastro/medico", post(create_medico))
        .route("/novo/medico", post(create_medico))
        .route("/listar/medico", get(list_medicos))
        .route("/lista/medicos", get(list_medicos))
        .route("/atualizar/medico/{id}", put(update_medico))
        .route("/remover/medico/{id}", put(remove_medico))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_medicos(State(db): State<Db>) -> Json<Vec<Medico>> {
    let store = db.read().await;
    Json(store.medicos.values().cloned().collect())
}

async fn create_medico(
    State(db): State<Db>,
    Json(input): Json<NovoMedico>,
) -> Result<(StatusCode, Json<Medico>), StatusCode> {
    if input.has_empty_field() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    store.last_id += 1;
    let medico = input.into_medico(store.last_id);
    store.medicos.insert(medico.id, medico.clone());
    tracing::info!(id = medico.id, "physician registered");
    Ok((StatusCode::CREATED, Json(medico)))
}

async fn update_medico(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateMedico>,
) -> Result<Json<Medico>, StatusCode> {
    if input.id.is_some_and(|body_id| body_id != id) || input.fields.has_empty_field() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    let medico = store.medicos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *medico = input.fields.into_medico(id);
    tracing::info!(id, "physician updated");
    Ok(Json(medico.clone()))
}

async fn remove_medico(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    match store.medicos.remove(&id) {
        Some(_) => {
            tracing::info!(id, "physician removed");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}
