use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const ESTADO_PENDIENTE: i64 = 1;
pub const ESTADO_APROBADO: i64 = 3;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Registro {
    pub id: i64,
    pub nombre_marca: String,
    pub descripcion: Option<String>,
    pub categoria: String,
    pub clase_niza: Option<String>,
    pub solicitante: String,
    pub email_solicitante: String,
    pub estado: i64,
    pub numero_solicitud: Option<String>,
    pub fecha_solicitud: String,
    pub fecha_aprobacion: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize)]
pub struct CreateRegistro {
    pub nombre_marca: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub categoria: String,
    #[serde(default)]
    pub clase_niza: Option<String>,
    pub solicitante: String,
    pub email_solicitante: String,
}

#[derive(Deserialize)]
pub struct UpdateRegistro {
    pub nombre_marca: Option<String>,
    pub descripcion: Option<String>,
    pub categoria: Option<String>,
    pub clase_niza: Option<String>,
    pub solicitante: Option<String>,
    pub email_solicitante: Option<String>,
    pub estado: Option<i64>,
    pub numero_solicitud: Option<String>,
    pub fecha_aprobacion: Option<String>,
}

#[derive(Default)]
pub struct Registros {
    items: HashMap<i64, Registro>,
    next_id: i64,
}

pub type Db = Arc<RwLock<Registros>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Registros::default()));
    Router::new()
        .route("/registros/", get(list_registros).post(create_registro))
        .route(
            "/registros/{id}",
            get(get_registro).put(update_registro).delete(delete_registro),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_registros(State(db): State<Db>) -> Json<Vec<Registro>> {
    let state = db.read().await;
    let mut registros: Vec<Registro> = state.items.values().cloned().collect();
    registros.sort_by_key(|registro| registro.id);
    Json(registros)
}

async fn create_registro(
    State(db): State<Db>,
    Json(input): Json<CreateRegistro>,
) -> (StatusCode, Json<Registro>) {
    let mut state = db.write().await;
    state.next_id += 1;
    let now = Utc::now().to_rfc3339();
    let registro = Registro {
        id: state.next_id,
        nombre_marca: input.nombre_marca,
        descripcion: input.descripcion,
        categoria: input.categoria,
        clase_niza: input.clase_niza,
        solicitante: input.solicitante,
        email_solicitante: input.email_solicitante,
        estado: ESTADO_PENDIENTE,
        numero_solicitud: None,
        fecha_solicitud: now.clone(),
        fecha_aprobacion: None,
        created_at: now.clone(),
        updated_at: now,
    };
    state.items.insert(registro.id, registro.clone());
    (StatusCode::CREATED, Json(registro))
}

async fn get_registro(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Registro>, StatusCode> {
    let state = db.read().await;
    state.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_registro(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateRegistro>,
) -> Result<Json<Registro>, StatusCode> {
    let mut state = db.write().await;
    let registro = state.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(nombre_marca) = input.nombre_marca {
        registro.nombre_marca = nombre_marca;
    }
    if let Some(descripcion) = input.descripcion {
        registro.descripcion = Some(descripcion);
    }
    if let Some(categoria) = input.categoria {
        registro.categoria = categoria;
    }
    if let Some(clase_niza) = input.clase_niza {
        registro.clase_niza = Some(clase_niza);
    }
    if let Some(solicitante) = input.solicitante {
        registro.solicitante = solicitante;
    }
    if let Some(email_solicitante) = input.email_solicitante {
        registro.email_solicitante = email_solicitante;
    }
    if let Some(estado) = input.estado {
        registro.estado = estado;
        // Approval stamps the date once; later transitions keep it.
        if estado == ESTADO_APROBADO && registro.fecha_aprobacion.is_none() {
            registro.fecha_aprobacion = Some(Utc::now().to_rfc3339());
        }
    }
    if let Some(numero_solicitud) = input.numero_solicitud {
        registro.numero_solicitud = Some(numero_solicitud);
    }
    if let Some(fecha_aprobacion) = input.fecha_aprobacion {
        registro.fecha_aprobacion = Some(fecha_aprobacion);
    }
    registro.updated_at = Utc::now().to_rfc3339();
    Ok(Json(registro.clone()))
}

async fn delete_registro(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut state = db.write().await;
    state.items.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}
