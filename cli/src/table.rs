//! Terminal rendering for registros.
//!
//! The list view folds the secondary fields (descripción, email, clase)
//! into sub-lines of their column so a row stays one table entry; the
//! detail view prints every field on its own aligned line.

use comfy_table::{Cell, Color, Table};
use registro_core::fecha::format_fecha;
use registro_core::{EstadoRegistro, RegistroMarca};

const DESCRIPCION_MAX: usize = 48;

pub const LISTA_VACIA: &str =
    "No hay registros de marcas\nComienza creando tu primer registro de marca usando el formulario";

/// Render the collection as a table plus a count line, or the empty-state
/// message.
pub fn render(registros: &[RegistroMarca]) -> String {
    if registros.is_empty() {
        return LISTA_VACIA.to_string();
    }

    let mut table = Table::new();
    table.set_header(vec![
        "ID",
        "Marca",
        "Categoría",
        "Solicitante",
        "Estado",
        "F. solicitud",
        "F. aprobación",
    ]);
    for registro in registros {
        let id = registro.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
        let mut estado = Cell::new(registro.estado.label());
        if let Some(color) = estado_color(registro.estado) {
            estado = estado.fg(color);
        }
        table.add_row(vec![
            Cell::new(id),
            Cell::new(marca_cell(registro)),
            Cell::new(categoria_cell(registro)),
            Cell::new(solicitante_cell(registro)),
            estado,
            Cell::new(format_fecha(registro.fecha_solicitud.as_deref())),
            Cell::new(format_fecha(registro.fecha_aprobacion.as_deref())),
        ]);
    }

    let total = registros.len();
    let sufijo = if total == 1 { "registro" } else { "registros" };
    format!("{table}\nTotal: {total} {sufijo}")
}

/// Render one registro field-by-field.
pub fn render_detail(registro: &RegistroMarca) -> String {
    let mut output = String::new();
    let id = registro.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
    output.push_str(&format!("ID:                {id}\n"));
    output.push_str(&format!("Marca:             {}\n", registro.nombre_marca));
    output.push_str(&format!(
        "Descripción:       {}\n",
        registro.descripcion.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!("Categoría:         {}\n", registro.categoria));
    output.push_str(&format!(
        "Clase Niza:        {}\n",
        registro.clase_niza.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!("Solicitante:       {}\n", registro.solicitante));
    output.push_str(&format!("Email:             {}\n", registro.email_solicitante));
    output.push_str(&format!("Estado:            {}\n", registro.estado.label()));
    output.push_str(&format!(
        "N° solicitud:      {}\n",
        registro.numero_solicitud.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Fecha solicitud:   {}\n",
        format_fecha(registro.fecha_solicitud.as_deref())
    ));
    output.push_str(&format!(
        "Fecha aprobación:  {}\n",
        format_fecha(registro.fecha_aprobacion.as_deref())
    ));
    output
}

fn marca_cell(registro: &RegistroMarca) -> String {
    let mut texto = registro.nombre_marca.clone();
    if let Some(descripcion) = registro.descripcion.as_deref().filter(|d| !d.is_empty()) {
        texto.push('\n');
        texto.push_str(&truncate(descripcion, DESCRIPCION_MAX));
    }
    if let Some(numero) = registro.numero_solicitud.as_deref().filter(|n| !n.is_empty()) {
        texto.push('\n');
        texto.push_str(&format!("N° {numero}"));
    }
    texto
}

fn categoria_cell(registro: &RegistroMarca) -> String {
    let mut texto = registro.categoria.clone();
    if let Some(clase) = registro.clase_niza.as_deref().filter(|c| !c.is_empty()) {
        texto.push('\n');
        texto.push_str(&format!("Clase {clase}"));
    }
    texto
}

fn solicitante_cell(registro: &RegistroMarca) -> String {
    format!("{}\n{}", registro.solicitante, registro.email_solicitante)
}

fn estado_color(estado: EstadoRegistro) -> Option<Color> {
    match estado {
        EstadoRegistro::Pendiente => Some(Color::Yellow),
        EstadoRegistro::EnRevision => Some(Color::Blue),
        EstadoRegistro::Aprobado => Some(Color::Green),
        EstadoRegistro::Rechazado => Some(Color::Red),
        EstadoRegistro::Vigente => Some(Color::DarkGreen),
        EstadoRegistro::Vencido => Some(Color::DarkGrey),
        EstadoRegistro::Desconocido(_) => None,
    }
}

/// Cut at a char boundary and mark the cut with an ellipsis.
fn truncate(texto: &str, max: usize) -> String {
    if texto.chars().count() <= max {
        texto.to_string()
    } else {
        let cortado: String = texto.chars().take(max).collect();
        format!("{cortado}…")
    }
}
