use clap::Parser;

/// Server settings. Every flag falls back to an environment variable,
/// then to the defaults in `odk_core`.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Serve the deck repository over HTTP", long_about = None)]
pub struct Config {
    #[arg(long, env = "BIND_ADDR", default_value = odk_core::BIND_ADDR)]
    pub bind: String,
    #[arg(long, env = "WORKERS", default_value_t = odk_core::WORKERS)]
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: odk_core::BIND_ADDR.to_string(),
            workers: odk_core::WORKERS,
        }
    }
}
