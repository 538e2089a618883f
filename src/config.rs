use std::env;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Environment configuration
// ---------------------------------------------------------------------------

/// Runtime settings, resolved from the environment with defaults suited to
/// local use.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the corpus CSV file.
    pub csv_path: PathBuf,
    /// Interface the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server binds to.
    pub port: u16,
}

impl Config {
    /// Read `CORPUS_CSV`, `CORPUS_HOST` and `CORPUS_PORT`, falling back to
    /// `data/corpus.csv`, `127.0.0.1` and `8000`. An unparseable port falls
    /// back to the default as well.
    pub fn from_env() -> Self {
        let csv_path = env::var("CORPUS_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/corpus.csv"));
        let host = env::var("CORPUS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("CORPUS_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(8000);

        Config {
            csv_path,
            host,
            port,
        }
    }
}
