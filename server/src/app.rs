//! Core application

use std::sync::Arc;

use anyhow::Result;

use crate::api::ApiServer;
use crate::core::cli::{self, Commands};
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME, APP_NAME_LOWER, ENV_LOG};
use crate::data::MemoryStore;

pub struct CoreApp {
    pub config: AppConfig,
    pub store: Arc<MemoryStore>,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        match command {
            Some(Commands::Start) | None => {}
        }

        let config = AppConfig::load(&cli_config)?;
        let store = Arc::new(MemoryStore::new());

        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            host = %config.server.host,
            port = config.server.port,
            "{} starting",
            APP_NAME
        );

        let app = Self { config, store };
        ApiServer::new(app).start().await
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }
}
