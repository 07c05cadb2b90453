use std::io::{self, BufRead, Write};

use registro_core::store::ERROR_ELIMINAR;
use registro_core::{RegistroStore, Transport};

pub fn delete<T: Transport>(store: &mut RegistroStore<T>, id: i64, yes: bool) -> anyhow::Result<()> {
    store.refresh();
    if let Some(error) = store.error() {
        anyhow::bail!("{error}");
    }
    let registro = store
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("Registro {id} no encontrado"))?;
    let nombre = registro.nombre_marca.clone();

    if !yes && !confirm()? {
        println!("Operación cancelada");
        return Ok(());
    }

    if store.delete(id) {
        println!("Registro \"{nombre}\" eliminado");
        Ok(())
    } else {
        anyhow::bail!("{}", store.error().unwrap_or(ERROR_ELIMINAR))
    }
}

fn confirm() -> anyhow::Result<bool> {
    print!("¿Estás seguro de que quieres eliminar este registro? [s/N] ");
    io::stdout().flush()?;
    let mut respuesta = String::new();
    io::stdin().lock().read_line(&mut respuesta)?;
    Ok(matches!(respuesta.trim().to_lowercase().as_str(), "s" | "si" | "sí"))
}
