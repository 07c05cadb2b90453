mod cli;
mod config;
mod table;
mod transport;

use clap::Parser;
use cli::{Cli, Command};
use registro_core::{RegistroClient, RegistroStore, CATEGORIAS};

use crate::transport::UreqTransport;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let base_url = config::api_base_url();
    let client = RegistroClient::new(&base_url);
    let transport = UreqTransport::new();
    let mut store = RegistroStore::new(client.clone(), &transport);

    match cli.command {
        Command::List => cli::list::list(&mut store)?,
        Command::Show { id } => cli::show::show(&client, &transport, id)?,
        Command::Create(args) => cli::create::create(&mut store, args)?,
        Command::Update { id, args } => cli::update::update(&mut store, id, args)?,
        Command::Delete { id, yes } => cli::delete::delete(&mut store, id, yes)?,
        Command::Categorias => {
            for categoria in CATEGORIAS {
                println!("{categoria}");
            }
        }
    }

    Ok(())
}
