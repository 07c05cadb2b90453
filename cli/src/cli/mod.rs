pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

use std::collections::BTreeMap;

use clap::{Args, Parser, Subcommand};
use registro_core::{Campo, EstadoRegistro};

#[derive(Parser)]
#[command(
    name = "registro",
    version,
    about = "Gestión de registros de marcas comerciales desde la terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Aumenta el detalle del log (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lista todos los registros de marca
    List,
    /// Muestra un registro completo
    Show {
        /// ID del registro
        id: i64,
    },
    /// Crea un nuevo registro de marca
    Create(CreateArgs),
    /// Actualiza un registro existente
    Update {
        /// ID del registro
        id: i64,
        #[command(flatten)]
        args: UpdateArgs,
    },
    /// Elimina un registro
    Delete {
        /// ID del registro
        id: i64,
        /// No pide confirmación
        #[arg(long)]
        yes: bool,
    },
    /// Lista las categorías disponibles
    Categorias,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Nombre de la marca
    #[arg(long)]
    pub nombre_marca: Option<String>,
    /// Descripción de la marca
    #[arg(long)]
    pub descripcion: Option<String>,
    /// Categoría (ver `registro categorias`)
    #[arg(long)]
    pub categoria: Option<String>,
    /// Clase de Niza (1-45)
    #[arg(long)]
    pub clase_niza: Option<String>,
    /// Nombre del solicitante
    #[arg(long)]
    pub solicitante: Option<String>,
    /// Email del solicitante
    #[arg(long)]
    pub email_solicitante: Option<String>,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Nuevo nombre de la marca
    #[arg(long)]
    pub nombre_marca: Option<String>,
    /// Nueva descripción
    #[arg(long)]
    pub descripcion: Option<String>,
    /// Nueva categoría
    #[arg(long)]
    pub categoria: Option<String>,
    /// Nueva clase de Niza
    #[arg(long)]
    pub clase_niza: Option<String>,
    /// Nuevo solicitante
    #[arg(long)]
    pub solicitante: Option<String>,
    /// Nuevo email del solicitante
    #[arg(long)]
    pub email_solicitante: Option<String>,
    /// Nuevo estado (código 1-6 o nombre, p. ej. "aprobado")
    #[arg(long)]
    pub estado: Option<EstadoRegistro>,
    /// Número de solicitud asignado
    #[arg(long)]
    pub numero_solicitud: Option<String>,
}

/// Print the form's validation errors, one line per field.
pub fn print_field_errors(errors: &BTreeMap<Campo, String>) {
    for (campo, mensaje) in errors {
        eprintln!("  {}: {mensaje}", campo.name());
    }
}
