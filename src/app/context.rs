use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::app::error::{Result, SpaceTravelingError};
use crate::cms::CmsClient;
use crate::config::Config;
use crate::fetcher::{Fetcher, HttpFetcher};

pub struct AppContext {
    pub config: Config,
    pub cms: CmsClient,
}

impl AppContext {
    /// Context from the config file at `config_path`, or the default
    /// location when `None`.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .map_err(|e| SpaceTravelingError::Config(e.to_string()))?;

        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::with_options(
            config.api.access_token.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )?);

        Self::with_fetcher(config, fetcher)
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Result<Self> {
        let cms = CmsClient::new(fetcher, &config.api.endpoint)?
            .with_page_size(config.api.page_size)
            .with_words_per_minute(config.reading.words_per_minute);

        Ok(Self { config, cms })
    }
}
