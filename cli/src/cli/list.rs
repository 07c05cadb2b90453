use registro_core::{RegistroStore, Transport};

use crate::table;

pub fn list<T: Transport>(store: &mut RegistroStore<T>) -> anyhow::Result<()> {
    // The progress line goes to stderr so piped output stays clean.
    if store.is_loading() {
        eprintln!("Cargando...");
    }
    store.refresh();
    if let Some(error) = store.error() {
        anyhow::bail!("{error}");
    }
    println!("{}", table::render(store.registros()));
    Ok(())
}
