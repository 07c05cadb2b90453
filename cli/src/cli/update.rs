use registro_core::store::ERROR_ACTUALIZAR;
use registro_core::{RegistroForm, RegistroStore, Transport};

use crate::cli::{print_field_errors, UpdateArgs};
use crate::table;

pub fn update<T: Transport>(
    store: &mut RegistroStore<T>,
    id: i64,
    args: UpdateArgs,
) -> anyhow::Result<()> {
    store.refresh();
    if let Some(error) = store.error() {
        anyhow::bail!("{error}");
    }
    let registro = store
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("Registro {id} no encontrado"))?;

    // Edit starts from the current record; flags override field by field.
    let mut form = RegistroForm::from_registro(registro);
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
    if let Some(estado) = args.estado {
        form.set_estado(estado);
    }
    if let Some(valor) = args.numero_solicitud {
        form.set_numero_solicitud(valor);
    }

    if !form.validate() {
        eprintln!("No se pudo actualizar el registro:");
        print_field_errors(form.errors());
        anyhow::bail!("el formulario tiene errores de validación");
    }

    let payload = form.update_payload();
    match store.update(id, &payload) {
        Some(updated) => {
            println!("Registro actualizado:");
            print!("{}", table::render_detail(&updated));
            Ok(())
        }
        None => anyhow::bail!("{}", store.error().unwrap_or(ERROR_ACTUALIZAR)),
    }
}
