//! Stateless HTTP request builder and response parser for the registro API.
//!
//! # Design
//! `RegistroClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; a [`Transport`](crate::transport::Transport) executes the
//! actual round-trip in between, keeping this module deterministic and free
//! of I/O dependencies.
//!
//! Collection endpoints keep the service's trailing slash (`/registros/`);
//! item endpoints do not. Any 2xx status counts as success, since the hosted
//! service is not strict about 200 vs 201/204. 404 maps to
//! `ApiError::NotFound`, every other non-2xx to `ApiError::Http`.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateRegistroMarca, RegistroMarca, UpdateRegistroMarca};

/// Synchronous, stateless client for the registro de marcas API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct RegistroClient {
    base_url: String,
}

impl RegistroClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_registros(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/registros/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_registro(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/registros/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_registro(
        &self,
        input: &CreateRegistroMarca,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/registros/", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_registro(
        &self,
        id: i64,
        input: &UpdateRegistroMarca,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/registros/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_registro(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/registros/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_registros(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<RegistroMarca>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get_registro(&self, response: HttpResponse) -> Result<RegistroMarca, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create_registro(&self, response: HttpResponse) -> Result<RegistroMarca, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update_registro(&self, response: HttpResponse) -> Result<RegistroMarca, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_delete_registro(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EstadoRegistro;

    fn client() -> RegistroClient {
        RegistroClient::new("http://localhost:8000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    const REGISTRO_JSON: &str = r#"{
        "id": 1,
        "nombre_marca": "Aurora",
        "categoria": "Bebidas",
        "solicitante": "Jane Doe",
        "email_solicitante": "jane@acme.com",
        "estado": 1
    }"#;

    #[test]
    fn build_list_keeps_trailing_slash_on_collection() {
        let req = client().build_list_registros();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/registros/");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_targets_item_path() {
        let req = client().build_get_registro(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/registros/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_posts_json_to_collection() {
        let input = CreateRegistroMarca {
            nombre_marca: "Aurora".to_string(),
            descripcion: None,
            categoria: "Bebidas".to_string(),
            clase_niza: Some("32".to_string()),
            solicitante: "Jane Doe".to_string(),
            email_solicitante: "jane@acme.com".to_string(),
        };
        let req = client().build_create_registro(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/registros/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["nombre_marca"], "Aurora");
        assert_eq!(body["clase_niza"], "32");
        assert!(body.get("descripcion").is_none());
        assert!(body.get("estado").is_none());
    }

    #[test]
    fn build_update_puts_partial_json() {
        let input = UpdateRegistroMarca {
            descripcion: Some("Nueva descripción".to_string()),
            estado: Some(EstadoRegistro::Aprobado),
            ..Default::default()
        };
        let req = client().build_update_registro(7, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8000/registros/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["descripcion"], "Nueva descripción");
        assert_eq!(body["estado"], 3);
        assert!(body.get("nombre_marca").is_none());
    }

    #[test]
    fn build_delete_targets_item_path() {
        let req = client().build_delete_registro(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8000/registros/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_registros_success() {
        let body = format!("[{REGISTRO_JSON}]");
        let registros = client().parse_list_registros(response(200, &body)).unwrap();
        assert_eq!(registros.len(), 1);
        assert_eq!(registros[0].nombre_marca, "Aurora");
        assert_eq!(registros[0].estado, EstadoRegistro::Pendiente);
    }

    #[test]
    fn parse_get_registro_not_found() {
        let err = client().parse_get_registro(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_accepts_any_2xx() {
        let created = client()
            .parse_create_registro(response(201, REGISTRO_JSON))
            .unwrap();
        assert_eq!(created.id, Some(1));
        let created = client()
            .parse_create_registro(response(200, REGISTRO_JSON))
            .unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[test]
    fn parse_create_server_error() {
        let err = client()
            .parse_create_registro(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_update_registro_success() {
        let updated = client()
            .parse_update_registro(response(200, REGISTRO_JSON))
            .unwrap();
        assert_eq!(updated.nombre_marca, "Aurora");
    }

    #[test]
    fn parse_delete_accepts_200_and_204() {
        assert!(client().parse_delete_registro(response(204, "")).is_ok());
        assert!(client().parse_delete_registro(response(200, "")).is_ok());
    }

    #[test]
    fn parse_delete_registro_not_found() {
        let err = client().parse_delete_registro(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_on_base_url_is_stripped() {
        let client = RegistroClient::new("http://localhost:8000/");
        let req = client.build_list_registros();
        assert_eq!(req.path, "http://localhost:8000/registros/");
    }

    #[test]
    fn parse_list_registros_bad_json() {
        let err = client()
            .parse_list_registros(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
