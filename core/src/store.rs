//! Stateful registro collection backed by the remote service.
//!
//! # Design
//! `RegistroStore` pairs a [`RegistroClient`] with a [`Transport`] and keeps
//! the last fetched collection, a loading flag, and a single user-facing
//! error slot. Mutating operations update the local collection from the
//! server's response instead of refetching: create appends, update replaces
//! in place preserving order, delete removes. A failed refresh keeps the
//! last known good collection so the caller still has data to show.
//!
//! Error messages stored here are the short Spanish strings a front-end
//! displays; the underlying cause goes to the log.

use tracing::error;

use crate::client::RegistroClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{CreateRegistroMarca, RegistroMarca, UpdateRegistroMarca};

pub const ERROR_CARGAR: &str = "Error al cargar los registros";
pub const ERROR_CREAR: &str = "Error al crear el registro";
pub const ERROR_ACTUALIZAR: &str = "Error al actualizar el registro";
pub const ERROR_ELIMINAR: &str = "Error al eliminar el registro";

/// Collection of registros plus the loading/error state a front-end renders.
#[derive(Debug)]
pub struct RegistroStore<T: Transport> {
    client: RegistroClient,
    transport: T,
    registros: Vec<RegistroMarca>,
    loading: bool,
    error: Option<String>,
}

impl<T: Transport> RegistroStore<T> {
    /// A new store reports `loading` until the first [`refresh`](Self::refresh)
    /// completes.
    pub fn new(client: RegistroClient, transport: T) -> Self {
        Self {
            client,
            transport,
            registros: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Reload the collection from the server. On failure the previous
    /// collection is kept and the error slot is set.
    pub fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        match self.fetch_all() {
            Ok(registros) => self.registros = registros,
            Err(err) => {
                error!(error = %err, "failed to load registros");
                self.error = Some(ERROR_CARGAR.to_string());
            }
        }
        self.loading = false;
    }

    /// Create a registro and append the server's version to the collection.
    /// Returns `None` and sets the error slot on failure.
    pub fn create(&mut self, input: &CreateRegistroMarca) -> Option<RegistroMarca> {
        self.error = None;
        let result = self
            .client
            .build_create_registro(input)
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_create_registro(response));
        match result {
            Ok(created) => {
                self.registros.push(created.clone());
                Some(created)
            }
            Err(err) => {
                error!(error = %err, "failed to create registro");
                self.error = Some(ERROR_CREAR.to_string());
                None
            }
        }
    }

    /// Update a registro and replace the matching entry in place, keeping
    /// collection order. An id not present locally leaves the collection
    /// untouched but still returns the server's version.
    pub fn update(&mut self, id: i64, input: &UpdateRegistroMarca) -> Option<RegistroMarca> {
        self.error = None;
        let result = self
            .client
            .build_update_registro(id, input)
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_update_registro(response));
        match result {
            Ok(updated) => {
                for registro in &mut self.registros {
                    if registro.id == Some(id) {
                        *registro = updated.clone();
                    }
                }
                Some(updated)
            }
            Err(err) => {
                error!(error = %err, "failed to update registro");
                self.error = Some(ERROR_ACTUALIZAR.to_string());
                None
            }
        }
    }

    /// Delete a registro and drop it from the collection. Returns whether
    /// the server confirmed the deletion.
    pub fn delete(&mut self, id: i64) -> bool {
        self.error = None;
        let request = self.client.build_delete_registro(id);
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_delete_registro(response));
        match result {
            Ok(()) => {
                self.registros.retain(|registro| registro.id != Some(id));
                true
            }
            Err(err) => {
                error!(error = %err, "failed to delete registro");
                self.error = Some(ERROR_ELIMINAR.to_string());
                false
            }
        }
    }

    /// Look up a registro in the loaded collection by id.
    pub fn find(&self, id: i64) -> Option<&RegistroMarca> {
        self.registros.iter().find(|registro| registro.id == Some(id))
    }

    pub fn registros(&self) -> &[RegistroMarca] {
        &self.registros
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn fetch_all(&self) -> Result<Vec<RegistroMarca>, ApiError> {
        let request = self.client.build_list_registros();
        let response = self.transport.execute(request)?;
        self.client.parse_list_registros(response)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use serde_json::json;

    use super::*;
    use crate::http::{HttpRequest, HttpResponse};
    use crate::types::EstadoRegistro;

    /// Scripted transport: hands out queued responses in order. Cloning
    /// shares the queue, so tests can keep pushing after the store takes
    /// ownership of its copy.
    #[derive(Clone, Default)]
    struct FakeTransport {
        responses: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
    }

    impl FakeTransport {
        fn respond(&self, status: u16, body: &str) {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }));
        }

        fn fail(&self) {
            self.responses
                .borrow_mut()
                .push_back(Err(ApiError::Network("connection refused".to_string())));
        }
    }

    impl Transport for FakeTransport {
        fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("no scripted response left")
        }
    }

    fn registro_json(id: i64, nombre: &str) -> serde_json::Value {
        json!({
            "id": id,
            "nombre_marca": nombre,
            "categoria": "Bebidas",
            "solicitante": "Jane Doe",
            "email_solicitante": "jane@acme.com",
            "estado": 1
        })
    }

    fn store_with(transport: &FakeTransport) -> RegistroStore<FakeTransport> {
        RegistroStore::new(RegistroClient::new("http://localhost:8000"), transport.clone())
    }

    #[test]
    fn new_store_is_loading_and_empty() {
        let transport = FakeTransport::default();
        let store = store_with(&transport);
        assert!(store.is_loading());
        assert!(store.registros().is_empty());
        assert!(store.error().is_none());
    }

    #[test]
    fn refresh_replaces_the_collection() {
        let transport = FakeTransport::default();
        let mut store = store_with(&transport);

        let body = json!([registro_json(1, "Aurora"), registro_json(2, "Nimbus")]);
        transport.respond(200, &body.to_string());
        store.refresh();
        assert!(!store.is_loading());
        assert!(store.error().is_none());
        assert_eq!(store.registros().len(), 2);

        let body = json!([registro_json(2, "Nimbus")]);
        transport.respond(200, &body.to_string());
        store.refresh();
        assert_eq!(store.registros().len(), 1);
        assert_eq!(store.registros()[0].id, Some(2));
    }

    #[test]
    fn refresh_failure_keeps_last_known_good() {
        let transport = FakeTransport::default();
        let mut store = store_with(&transport);

        transport.respond(200, &json!([registro_json(1, "Aurora")]).to_string());
        store.refresh();
        assert_eq!(store.registros().len(), 1);

        transport.fail();
        store.refresh();
        assert!(!store.is_loading());
        assert_eq!(store.error(), Some(ERROR_CARGAR));
        assert_eq!(store.registros().len(), 1);
    }

    #[test]
    fn refresh_clears_a_previous_error() {
        let transport = FakeTransport::default();
        let mut store = store_with(&transport);

        transport.fail();
        store.refresh();
        assert_eq!(store.error(), Some(ERROR_CARGAR));

        transport.respond(200, "[]");
        store.refresh();
        assert!(store.error().is_none());
    }

    #[test]
    fn create_appends_the_server_version() {
        let transport = FakeTransport::default();
        let mut store = store_with(&transport);
        transport.respond(200, &json!([registro_json(1, "Aurora")]).to_string());
        store.refresh();

        transport.respond(201, &registro_json(2, "Nimbus").to_string());
        let input = CreateRegistroMarca {
            nombre_marca: "Nimbus".to_string(),
            descripcion: None,
            categoria: "Bebidas".to_string(),
            clase_niza: None,
            solicitante: "Jane Doe".to_string(),
            email_solicitante: "jane@acme.com".to_string(),
        };
        let created = store.create(&input).expect("create failed");
        assert_eq!(created.id, Some(2));
        assert_eq!(store.registros().len(), 2);
        assert_eq!(store.registros()[1].nombre_marca, "Nimbus");
    }

    #[test]
    fn create_failure_leaves_collection_untouched() {
        let transport = FakeTransport::default();
        let mut store = store_with(&transport);
        transport.respond(200, &json!([registro_json(1, "Aurora")]).to_string());
        store.refresh();

        transport.fail();
        let input = CreateRegistroMarca {
            nombre_marca: "Nimbus".to_string(),
            descripcion: None,
            categoria: "Bebidas".to_string(),
            clase_niza: None,
            solicitante: "Jane Doe".to_string(),
            email_solicitante: "jane@acme.com".to_string(),
        };
        assert!(store.create(&input).is_none());
        assert_eq!(store.error(), Some(ERROR_CREAR));
        assert_eq!(store.registros().len(), 1);
    }

    #[test]
    fn update_replaces_in_place_preserving_order() {
        let transport = FakeTransport::default();
        let mut store = store_with(&transport);
        let body = json!([
            registro_json(1, "Aurora"),
            registro_json(2, "Nimbus"),
            registro_json(3, "Vesta"),
        ]);
        transport.respond(200, &body.to_string());
        store.refresh();

        let mut updated = registro_json(2, "Nimbus Pro");
        updated["estado"] = json!(3);
        transport.respond(200, &updated.to_string());
        let input = UpdateRegistroMarca {
            nombre_marca: Some("Nimbus Pro".to_string()),
            estado: Some(EstadoRegistro::Aprobado),
            ..Default::default()
        };
        let result = store.update(2, &input).expect("update failed");
        assert_eq!(result.estado, EstadoRegistro::Aprobado);

        let ids: Vec<Option<i64>> = store.registros().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(store.registros()[1].nombre_marca, "Nimbus Pro");
    }

    #[test]
    fn update_of_unknown_id_does_not_grow_the_collection() {
        let transport = FakeTransport::default();
        let mut store = store_with(&transport);
        transport.respond(200, &json!([registro_json(1, "Aurora")]).to_string());
        store.refresh();

        transport.respond(200, &registro_json(9, "Fantasma").to_string());
        let result = store.update(9, &UpdateRegistroMarca::default());
        assert!(result.is_some());
        assert_eq!(store.registros().len(), 1);
        assert_eq!(store.registros()[0].id, Some(1));
    }

    #[test]
    fn update_failure_sets_error() {
        let transport = FakeTransport::default();
        let mut store = store_with(&transport);
        transport.fail();
        assert!(store.update(1, &UpdateRegistroMarca::default()).is_none());
        assert_eq!(store.error(), Some(ERROR_ACTUALIZAR));
    }

    #[test]
    fn delete_removes_the_registro() {
        let transport = FakeTransport::default();
        let mut store = store_with(&transport);
        let body = json!([registro_json(1, "Aurora"), registro_json(2, "Nimbus")]);
        transport.respond(200, &body.to_string());
        store.refresh();

        transport.respond(204, "");
        assert!(store.delete(1));
        assert_eq!(store.registros().len(), 1);
        assert_eq!(store.registros()[0].id, Some(2));
    }

    #[test]
    fn delete_translates_not_found_to_the_error_slot() {
        let transport = FakeTransport::default();
        let mut store = store_with(&transport);
        transport.respond(200, &json!([registro_json(1, "Aurora")]).to_string());
        store.refresh();

        transport.respond(404, "");
        assert!(!store.delete(1));
        assert_eq!(store.error(), Some(ERROR_ELIMINAR));
        assert_eq!(store.registros().len(), 1);
    }

    #[test]
    fn the_error_slot_holds_only_the_latest_failure() {
        let transport = FakeTransport::default();
        let mut store = store_with(&transport);

        transport.fail();
        let input = CreateRegistroMarca {
            nombre_marca: "Nimbus".to_string(),
            descripcion: None,
            categoria: "Bebidas".to_string(),
            clase_niza: None,
            solicitante: "Jane Doe".to_string(),
            email_solicitante: "jane@acme.com".to_string(),
        };
        store.create(&input);
        assert_eq!(store.error(), Some(ERROR_CREAR));

        transport.fail();
        store.delete(1);
        assert_eq!(store.error(), Some(ERROR_ELIMINAR));
    }

    #[test]
    fn find_looks_up_by_id() {
        let transport = FakeTransport::default();
        let mut store = store_with(&transport);
        let body = json!([registro_json(1, "Aurora"), registro_json(2, "Nimbus")]);
        transport.respond(200, &body.to_string());
        store.refresh();

        assert_eq!(store.find(2).map(|r| r.nombre_marca.as_str()), Some("Nimbus"));
        assert!(store.find(99).is_none());
    }
}
