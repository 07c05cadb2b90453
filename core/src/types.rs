//! Domain DTOs for the registro de marcas API.
//!
//! # Design
//! These types mirror the remote service's JSON schema but are defined
//! independently of the mock-server crate; integration tests catch any
//! schema drift between the two. Creation and update payloads are separate
//! shapes on purpose: `estado` and `numero_solicitud` do not exist on the
//! creation payload and only become settable on update.
//!
//! Dates travel as plain strings. Parsing happens at render time
//! ([`crate::fecha`]) so one malformed date degrades one cell instead of
//! failing deserialization of the whole response.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Review-lifecycle status of a registration.
///
/// The wire format is the service's integer code. Deserialization is total:
/// codes outside the known set land in `Desconocido`, which keeps the
/// original value so re-serialization round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum EstadoRegistro {
    Pendiente,
    EnRevision,
    Aprobado,
    Rechazado,
    Vigente,
    Vencido,
    /// Any code outside `1..=6`.
    Desconocido(i64),
}

impl EstadoRegistro {
    /// Spanish display label. Total over every possible wire value.
    pub fn label(self) -> &'static str {
        match self {
            EstadoRegistro::Pendiente => "Pendiente",
            EstadoRegistro::EnRevision => "En revisión",
            EstadoRegistro::Aprobado => "Aprobado",
            EstadoRegistro::Rechazado => "Rechazado",
            EstadoRegistro::Vigente => "Vigente",
            EstadoRegistro::Vencido => "Vencido",
            EstadoRegistro::Desconocido(_) => "Desconocido",
        }
    }

    /// Integer code sent over the wire.
    pub fn code(self) -> i64 {
        i64::from(self)
    }
}

impl Default for EstadoRegistro {
    fn default() -> Self {
        EstadoRegistro::Pendiente
    }
}

impl From<i64> for EstadoRegistro {
    fn from(code: i64) -> Self {
        match code {
            1 => EstadoRegistro::Pendiente,
            2 => EstadoRegistro::EnRevision,
            3 => EstadoRegistro::Aprobado,
            4 => EstadoRegistro::Rechazado,
            5 => EstadoRegistro::Vigente,
            6 => EstadoRegistro::Vencido,
            other => EstadoRegistro::Desconocido(other),
        }
    }
}

impl From<EstadoRegistro> for i64 {
    fn from(estado: EstadoRegistro) -> Self {
        match estado {
            EstadoRegistro::Pendiente => 1,
            EstadoRegistro::EnRevision => 2,
            EstadoRegistro::Aprobado => 3,
            EstadoRegistro::Rechazado => 4,
            EstadoRegistro::Vigente => 5,
            EstadoRegistro::Vencido => 6,
            EstadoRegistro::Desconocido(code) => code,
        }
    }
}

/// Parses CLI input: the integer code or the lowercase Spanish name.
/// Unknown values are rejected here; an unknown estado can be rendered,
/// never requested.
impl FromStr for EstadoRegistro {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<i64>() {
            return match EstadoRegistro::from(code) {
                EstadoRegistro::Desconocido(_) => Err(format!("estado desconocido: {s}")),
                estado => Ok(estado),
            };
        }
        match s.to_lowercase().as_str() {
            "pendiente" => Ok(EstadoRegistro::Pendiente),
            "en_revision" | "en-revision" | "en revisión" | "en revision" => {
                Ok(EstadoRegistro::EnRevision)
            }
            "aprobado" => Ok(EstadoRegistro::Aprobado),
            "rechazado" => Ok(EstadoRegistro::Rechazado),
            "vigente" => Ok(EstadoRegistro::Vigente),
            "vencido" => Ok(EstadoRegistro::Vencido),
            _ => Err(format!("estado desconocido: {s}")),
        }
    }
}

/// A trademark registration record as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistroMarca {
    /// Assigned by the server on creation; immutable afterwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre_marca: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub categoria: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clase_niza: Option<String>,
    pub solicitante: String,
    pub email_solicitante: String,
    pub estado: EstadoRegistro,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_solicitud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_solicitud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_aprobacion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request payload for creating a registration. Carries no `estado` and no
/// `numero_solicitud`; the server assigns the default status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateRegistroMarca {
    pub nombre_marca: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub categoria: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clase_niza: Option<String>,
    pub solicitante: String,
    pub email_solicitante: String,
}

/// Request payload for a partial update. Only the fields present in the
/// JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateRegistroMarca {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_marca: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clase_niza: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solicitante: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_solicitante: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoRegistro>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_solicitud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_aprobacion: Option<String>,
}

/// Business categories offered by the registration form. Informational
/// only; the service accepts any non-empty string.
pub const CATEGORIAS: [&str; 15] = [
    "Productos alimenticios",
    "Bebidas",
    "Textiles y confecciones",
    "Productos farmacéuticos",
    "Productos químicos",
    "Maquinaria e instrumentos",
    "Materiales de construcción",
    "Vehículos",
    "Servicios de comunicación",
    "Servicios educativos",
    "Servicios financieros",
    "Servicios de entretenimiento",
    "Servicios médicos",
    "Servicios de restauración",
    "Otros",
];
