mod config;
mod data;
mod server;

use std::sync::Arc;

use anyhow::Context;

use config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let corpus = data::loader::load(&config.csv_path)
        .with_context(|| format!("chargement du corpus {}", config.csv_path.display()))?;
    log::info!(
        "Corpus chargé : {} lignes, colonnes {:?}",
        corpus.len(),
        corpus.columns
    );

    log::info!("Écoute sur http://{}:{}", config.host, config.port);
    server::start_server(Some(Arc::new(corpus)), &config)?
        .await
        .context("serveur HTTP")
}
