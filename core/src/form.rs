//! Form state for creating and editing a registro.
//!
//! # Design
//! `RegistroForm` keeps every field as a raw `String` buffer plus a map of
//! per-field validation errors, so a front-end can echo input back verbatim
//! and attach messages to the offending field. `validate` rebuilds the error
//! map wholesale; individual setters clear only their own field's stale
//! error. Payloads are derived on demand: `create_payload` omits fields the
//! service assigns itself, `update_payload` sends the full editable set.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{CreateRegistroMarca, EstadoRegistro, RegistroMarca, UpdateRegistroMarca};

pub const ERROR_NOMBRE_REQUERIDO: &str = "El nombre de la marca es requerido";
pub const ERROR_CATEGORIA_REQUERIDA: &str = "La categoría es requerida";
pub const ERROR_SOLICITANTE_REQUERIDO: &str = "El nombre del solicitante es requerido";
pub const ERROR_EMAIL_REQUERIDO: &str = "El email es requerido";
pub const ERROR_EMAIL_INVALIDO: &str = "El email no tiene un formato válido";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Form field identifier, used as the key for validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Campo {
    NombreMarca,
    Descripcion,
    Categoria,
    ClaseNiza,
    Solicitante,
    EmailSolicitante,
    NumeroSolicitud,
    Estado,
}

impl Campo {
    /// Wire-format field name, used when reporting errors.
    pub fn name(self) -> &'static str {
        match self {
            Campo::NombreMarca => "nombre_marca",
            Campo::Descripcion => "descripcion",
            Campo::Categoria => "categoria",
            Campo::ClaseNiza => "clase_niza",
            Campo::Solicitante => "solicitante",
            Campo::EmailSolicitante => "email_solicitante",
            Campo::NumeroSolicitud => "numero_solicitud",
            Campo::Estado => "estado",
        }
    }
}

/// Editable state for one registro, either blank or prefilled from an
/// existing record.
#[derive(Debug, Clone)]
pub struct RegistroForm {
    nombre_marca: String,
    descripcion: String,
    categoria: String,
    clase_niza: String,
    solicitante: String,
    email_solicitante: String,
    numero_solicitud: String,
    estado: EstadoRegistro,
    editing: bool,
    errors: BTreeMap<Campo, String>,
}

impl RegistroForm {
    /// Blank form for creating a new registro.
    pub fn new() -> Self {
        Self {
            nombre_marca: String::new(),
            descripcion: String::new(),
            categoria: String::new(),
            clase_niza: String::new(),
            solicitante: String::new(),
            email_solicitante: String::new(),
            numero_solicitud: String::new(),
            estado: EstadoRegistro::default(),
            editing: false,
            errors: BTreeMap::new(),
        }
    }

    /// Form prefilled from an existing record, for editing.
    pub fn from_registro(registro: &RegistroMarca) -> Self {
        Self {
            nombre_marca: registro.nombre_marca.clone(),
            descripcion: registro.descripcion.clone().unwrap_or_default(),
            categoria: registro.categoria.clone(),
            clase_niza: registro.clase_niza.clone().unwrap_or_default(),
            solicitante: registro.solicitante.clone(),
            email_solicitante: registro.email_solicitante.clone(),
            numero_solicitud: registro.numero_solicitud.clone().unwrap_or_default(),
            estado: registro.estado,
            editing: true,
            errors: BTreeMap::new(),
        }
    }

    pub fn set_nombre_marca(&mut self, valor: impl Into<String>) {
        self.nombre_marca = valor.into();
        self.errors.remove(&Campo::NombreMarca);
    }

    pub fn set_descripcion(&mut self, valor: impl Into<String>) {
        self.descripcion = valor.into();
        self.errors.remove(&Campo::Descripcion);
    }

    pub fn set_categoria(&mut self, valor: impl Into<String>) {
        self.categoria = valor.into();
        self.errors.remove(&Campo::Categoria);
    }

    pub fn set_clase_niza(&mut self, valor: impl Into<String>) {
        self.clase_niza = valor.into();
        self.errors.remove(&Campo::ClaseNiza);
    }

    pub fn set_solicitante(&mut self, valor: impl Into<String>) {
        self.solicitante = valor.into();
        self.errors.remove(&Campo::Solicitante);
    }

    pub fn set_email_solicitante(&mut self, valor: impl Into<String>) {
        self.email_solicitante = valor.into();
        self.errors.remove(&Campo::EmailSolicitante);
    }

    pub fn set_numero_solicitud(&mut self, valor: impl Into<String>) {
        self.numero_solicitud = valor.into();
        self.errors.remove(&Campo::NumeroSolicitud);
    }

    pub fn set_estado(&mut self, estado: EstadoRegistro) {
        self.estado = estado;
        self.errors.remove(&Campo::Estado);
    }

    /// Run all validation rules, replacing the error map. Returns whether
    /// the form is submittable.
    ///
    /// Required checks apply to the trimmed value; the email format check
    /// runs on the raw value, so surrounding whitespace fails it.
    pub fn validate(&mut self) -> bool {
        let mut errors = BTreeMap::new();
        if self.nombre_marca.trim().is_empty() {
            errors.insert(Campo::NombreMarca, ERROR_NOMBRE_REQUERIDO.to_string());
        }
        if self.categoria.trim().is_empty() {
            errors.insert(Campo::Categoria, ERROR_CATEGORIA_REQUERIDA.to_string());
        }
        if self.solicitante.trim().is_empty() {
            errors.insert(Campo::Solicitante, ERROR_SOLICITANTE_REQUERIDO.to_string());
        }
        if self.email_solicitante.trim().is_empty() {
            errors.insert(Campo::EmailSolicitante, ERROR_EMAIL_REQUERIDO.to_string());
        } else if !EMAIL_RE.is_match(&self.email_solicitante) {
            errors.insert(Campo::EmailSolicitante, ERROR_EMAIL_INVALIDO.to_string());
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Creation payload. `estado` and `numero_solicitud` are server-assigned
    /// and never sent here.
    pub fn create_payload(&self) -> CreateRegistroMarca {
        CreateRegistroMarca {
            nombre_marca: self.nombre_marca.trim().to_string(),
            descripcion: trimmed_opt(&self.descripcion),
            categoria: self.categoria.trim().to_string(),
            clase_niza: trimmed_opt(&self.clase_niza),
            solicitante: self.solicitante.trim().to_string(),
            email_solicitante: self.email_solicitante.trim().to_string(),
        }
    }

    /// Update payload. Sends every editable field, including `estado`;
    /// `fecha_aprobacion` is derived by the server and never sent.
    pub fn update_payload(&self) -> UpdateRegistroMarca {
        UpdateRegistroMarca {
            nombre_marca: Some(self.nombre_marca.trim().to_string()),
            descripcion: trimmed_opt(&self.descripcion),
            categoria: Some(self.categoria.trim().to_string()),
            clase_niza: trimmed_opt(&self.clase_niza),
            solicitante: Some(self.solicitante.trim().to_string()),
            email_solicitante: Some(self.email_solicitante.trim().to_string()),
            estado: Some(self.estado),
            numero_solicitud: trimmed_opt(&self.numero_solicitud),
            fecha_aprobacion: None,
        }
    }

    pub fn errors(&self) -> &BTreeMap<Campo, String> {
        &self.errors
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }
}

impl Default for RegistroForm {
    fn default() -> Self {
        Self::new()
    }
}

fn trimmed_opt(valor: &str) -> Option<String> {
    let trimmed = valor.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
