use clap::Parser;
use log::{error, info};

use crate::store::{AddressStore, FileStore};

mod catalog;
mod cep;
mod confirm;
mod geo;
mod http;
mod store;
mod ui;

/// Ordering front-end for cooking-gas cylinder delivery.
#[derive(Debug, Parser)]
#[command(name = "gasola", version, about = "Delivery de botijão de gás")]
struct Args {
    /// Forget the saved delivery address and run onboarding again.
    #[arg(long)]
    reset: bool,
    /// Override the profile directory holding the session address.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        error!("Error: {:?}", e);
        std::process::exit(1);
    }
}

async fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let dir = args.data_dir.unwrap_or_else(FileStore::default_dir);
    let mut store = FileStore::open(dir)?;
    if args.reset {
        if let Some(record) = store.record()? {
            info!("forgetting saved address: {}", record.full_address);
        }
        store.clear()?;
    }
    ui::run(store).await
}
