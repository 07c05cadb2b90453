use registro_core::store::ERROR_CREAR;
use registro_core::{RegistroForm, RegistroStore, Transport};

use crate::cli::{print_field_errors, CreateArgs};
use crate::table;

pub fn create<T: Transport>(store: &mut RegistroStore<T>, args: CreateArgs) -> anyhow::Result<()> {
    // Load the current collection first; creating still works if this
    // fails, the count line is just not shown.
    store.refresh();
    let collection_loaded = store.error().is_none();
    if let Some(error) = store.error() {
        tracing::warn!("{error}");
    }

    let mut form = RegistroForm::new();
    if let Some(valor) = args.nombre_marca {
        form.set_nombre_marca(valor);
    }
    if let Some(valor) = args.descripcion {
        form.set_descripcion(valor);
    }
    if let Some(valor) = args.categoria {
        form.set_categoria(valor);
    }
    if let Some(valor) = args.clase_niza {
        form.set_clase_niza(valor);
    }
    if let Some(valor) = args.solicitante {
        form.set_solicitante(valor);
    }
    if let Some(valor) = args.email_solicitante {
        form.set_email_solicitante(valor);
    }

    if !form.validate() {
        eprintln!("No se pudo crear el registro:");
        print_field_errors(form.errors());
        anyhow::bail!("el formulario tiene errores de validación");
    }

    let payload = form.create_payload();
    match store.create(&payload) {
        Some(created) => {
            println!("Registro creado:");
            print!("{}", table::render_detail(&created));
            if collection_loaded {
                let total = store.registros().len();
                println!(
                    "\nTotal: {total} {}",
                    if total == 1 { "registro" } else { "registros" }
                );
            }
            Ok(())
        }
        None => anyhow::bail!("{}", store.error().unwrap_or(ERROR_CREAR)),
    }
}
