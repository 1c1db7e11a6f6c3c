use std::future::Future;

use anyhow::{Context, Result};
use folio_runtime::{
    Config, ContentLocation, Site, Source, resolve_config_path, resolve_content_location,
};
use once_cell::sync::OnceCell;
use serde::Serialize;
use tokio::runtime::Runtime;

use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer, ViewMode};

/// Everything a handler needs: resolved config, the content site, output
/// settings and a lazily built async runtime.
pub struct ExecutionContext {
    config: Config,
    location: ContentLocation,
    site: Site<Source>,
    runtime: OnceCell<Runtime>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(
        content: Option<&str>,
        config: Option<&str>,
        format: impl Into<OutputFormat>,
    ) -> Result<Self> {
        let config_path = resolve_config_path(config)?;
        let config = Config::load_from(&config_path)
            .with_context(|| format!("failed to load config {}", config_path.display()))?;
        let location = resolve_content_location(content, &config);
        let site = Site::new(Source::from_location(&location)?);

        tracing::debug!(
            config = %config_path.display(),
            content = %location,
            "execution context ready"
        );

        Ok(Self {
            config,
            location,
            site,
            runtime: OnceCell::new(),
            format: format.into(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn location(&self) -> &ContentLocation {
        &self.location
    }

    pub fn site(&self) -> &Site<Source> {
        &self.site
    }

    /// An explicit endpoint wins over `[contact] endpoint`.
    pub fn contact_endpoint<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a str> {
        if let Some(endpoint) = explicit.filter(|e| !e.trim().is_empty()) {
            return Ok(endpoint);
        }
        Ok(self.config.contact_endpoint()?)
    }

    pub fn runtime(&self) -> Result<&Runtime> {
        self.runtime.get_or_try_init(|| {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("failed to start async runtime")
        })
    }

    pub fn block_on<F: Future>(&self, future: F) -> Result<F::Output> {
        Ok(self.runtime()?.block_on(future))
    }

    /// Render a view model with the configured format at `mode` density
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>, mode: ViewMode) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        ConsoleRenderer::new(self.format, mode).render(view_model)
    }
}
