//! Stateless HTTP request builder and response parser for the physician API.
//!
//! # Design
//! `MedicoClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The host executes the round-trip in between.
//!
//! Route names follow one canonical contract. Removal is a PUT because the
//! backend expects it.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Medico, MedicoId, NovoMedico};

pub const CREATE_PATH: &str = "/cadastro/medico";
pub const LIST_PATH: &str = "/listar/medico";
pub const UPDATE_PATH: &str = "/atualizar/medico";
pub const REMOVE_PATH: &str = "/remover/medico";

/// Synchronous, stateless client for the physician API.
#[derive(Debug, Clone)]
pub struct MedicoClient {
    base_url: String,
}

impl MedicoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_create_medico(&self, input: &NovoMedico) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(json_request(HttpMethod::Post, format!("{}{CREATE_PATH}", self.base_url), body))
    }

    pub fn build_list_medicos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{LIST_PATH}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Full-record update; the id in the path comes from the record itself.
    pub fn build_update_medico(&self, medico: &Medico) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(medico).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(json_request(
            HttpMethod::Put,
            format!("{}{UPDATE_PATH}/{}", self.base_url, medico.id),
            body,
        ))
    }

    pub fn build_remove_medico(&self, id: MedicoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}{REMOVE_PATH}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Success is any 2xx; the body is not inspected.
    pub fn parse_create_medico(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// Records come back in server order.
    pub fn parse_list_medicos(&self, response: HttpResponse) -> Result<Vec<Medico>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_update_medico(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_remove_medico(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_request(method: HttpMethod, path: String, body: String) -> HttpRequest {
    HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_ok() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MedicoClient {
        MedicoClient::new("http://localhost:3333")
    }

    fn sample() -> Medico {
        Medico {
            id: MedicoId(12),
            name: "Carla Souza".to_string(),
            specialty: "Dermatologia".to_string(),
            phone: "11912345678".to_string(),
            crm: "CRM-RJ 5521".to_string(),
            email: "carla@clinica.com".to_string(),
        }
    }

    #[test]
    fn build_create_medico_produces_correct_request() {
        let input = NovoMedico {
            name: "Carla Souza".to_string(),
            specialty: "Dermatologia".to_string(),
            phone: "11912345678".to_string(),
            crm: "CRM-RJ 5521".to_string(),
            email: "carla@clinica.com".to_string(),
        };
        let req = client().build_create_medico(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3333/cadastro/medico");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["nome"], "Carla Souza");
        assert_eq!(body["telefone"], "11912345678");
        assert!(body.get("idMedico").is_none());
    }

    #[test]
    fn build_list_medicos_produces_correct_request() {
        let req = client().build_list_medicos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3333/listar/medico");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_update_medico_sends_all_six_fields() {
        let req = client().build_update_medico(&sample()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3333/atualizar/medico/12");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        let fields = body.as_object().unwrap();
        assert_eq!(fields.len(), 6);
        assert_eq!(body["idMedico"], 12);
        assert_eq!(body["especialidade"], "Dermatologia");
    }

    #[test]
    fn build_remove_medico_is_a_put_without_body() {
        let req = client().build_remove_medico(MedicoId(12));
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3333/remover/medico/12");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_medicos_keeps_server_order() {
        let response = HttpResponse::new(
            200,
            r#"[
                {"idMedico":9,"nome":"Z","especialidade":"A","telefone":"1","crm":"c","email":"e"},
                {"idMedico":2,"nome":"Y","especialidade":"B","telefone":"2","crm":"d","email":"f"}
            ]"#,
        );
        let medicos = client().parse_list_medicos(response).unwrap();
        assert_eq!(medicos.len(), 2);
        assert_eq!(medicos[0].id, MedicoId(9));
        assert_eq!(medicos[1].id, MedicoId(2));
    }

    #[test]
    fn parse_list_medicos_empty() {
        let medicos = client().parse_list_medicos(HttpResponse::new(200, "[]")).unwrap();
        assert!(medicos.is_empty());
    }

    #[test]
    fn parse_list_medicos_bad_json() {
        let err = client()
            .parse_list_medicos(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_create_accepts_any_2xx_body() {
        assert!(client().parse_create_medico(HttpResponse::new(201, "")).is_ok());
        assert!(client()
            .parse_create_medico(HttpResponse::new(200, "Médico cadastrado"))
            .is_ok());
    }

    #[test]
    fn parse_create_wrong_status() {
        let err = client()
            .parse_create_medico(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_not_found() {
        let err = client()
            .parse_update_medico(HttpResponse::new(404, ""))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_remove_success() {
        assert!(client().parse_remove_medico(HttpResponse::new(204, "")).is_ok());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = MedicoClient::new("http://localhost:3333/");
        let req = client.build_list_medicos();
        assert_eq!(req.path, "http://localhost:3333/listar/medico");
    }

    #[test]
    fn from_config_uses_configured_base_url() {
        let config = ClientConfig {
            base_url: "http://backend:9000/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(MedicoClient::from_config(&config).base_url(), "http://backend:9000");
    }
}
