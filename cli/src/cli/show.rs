use registro_core::{ApiError, RegistroClient, Transport};

use crate::table;

pub fn show<T: Transport>(client: &RegistroClient, transport: &T, id: i64) -> anyhow::Result<()> {
    let request = client.build_get_registro(id);
    let response = transport.execute(request)?;
    let registro = match client.parse_get_registro(response) {
        Ok(registro) => registro,
        Err(ApiError::NotFound) => anyhow::bail!("Registro {id} no encontrado"),
        Err(err) => return Err(err.into()),
    };
    print!("{}", table::render_detail(&registro));
    Ok(())
}
