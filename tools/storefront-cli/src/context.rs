//! CLI execution context.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context as _, Result};
use storefront_app::{Storefront, StorefrontConfig};
use storefront_client::HttpStorefrontApi;
use storefront_core::CartStore;

use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration.
    pub config: StorefrontConfig,
    /// Where the configuration came from, if a file was used.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context: config file, then environment, then flags.
    pub fn load(config_path: Option<&str>, api_url: Option<&str>, output: Output) -> Result<Self> {
        let (config_path, mut config) = match config_path {
            Some(path) => (Some(PathBuf::from(path)), StorefrontConfig::load(path)?),
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                let discovery = StorefrontConfig::discover(&cwd);
                for skipped in &discovery.skipped {
                    output.warn(&format!("Ignoring config file: {}", skipped));
                }
                match discovery.found {
                    Some((path, config)) => (Some(path), config),
                    None => (None, StorefrontConfig::default()),
                }
            }
        };

        config.apply_env();
        if let Some(url) = api_url {
            config.api.base_url = url.to_string();
        }
        if output.is_verbose() {
            config.logging.level = "debug".to_string();
        }

        Ok(Self {
            config,
            config_path,
            output,
        })
    }

    /// Build a storefront against the configured backend.
    pub fn storefront(&self) -> Storefront {
        let api = Rc::new(HttpStorefrontApi::from_base_url(&self.config.api.base_url));
        Storefront::new(api, CartStore::new(), &self.config)
    }

    /// Build and mount a storefront, failing if the initial load fails.
    pub async fn mounted(&self) -> Result<Storefront> {
        let mut app = self.storefront();
        let spinner = self
            .output
            .spinner(&format!("Loading from {}", self.config.api.base_url));
        let result = app.mount().await;
        spinner.finish_and_clear();

        if let Err(e) = result {
            let banner = app.error_message().unwrap_or_default();
            return Err(e).with_context(|| banner);
        }
        Ok(app)
    }
}
