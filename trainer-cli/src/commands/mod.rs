pub mod completion;
pub mod config;
pub mod progress;
pub mod session;
pub mod videos;

use anyhow::{Context, Result};
use shared::{ApiClient, ClientConfig, ClientError};
use std::path::PathBuf;

use crate::store::{FileSessionStore, session_path};

/// Client used by every command.
pub type CliClient = ApiClient<FileSessionStore>;

/// Global options shared by all subcommands.
#[derive(Debug, Default)]
pub struct Settings {
    pub server: Option<String>,
    pub config: Option<PathBuf>,
}

impl Settings {
    pub fn client_config(&self) -> Result<ClientConfig> {
        ClientConfig::load_config(self.config.as_deref(), self.server.as_deref())
            .context("failed to load configuration")
    }

    pub fn client(&self) -> Result<CliClient> {
        let config = self.client_config()?;
        tracing::debug!(base_url = config.api_base_url(), "using API");
        Ok(ApiClient::new(&config, FileSessionStore::new(session_path())))
    }
}

/// Lead with the message a user of the web client would see; keep the
/// technical cause in the chain.
pub fn describe(err: ClientError) -> anyhow::Error {
    let message = err.user_message();
    anyhow::Error::new(err).context(message)
}
