//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::convert::MarkdownConverter;
use crate::scratch::ScratchStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    converter: Arc<dyn MarkdownConverter>,
    scratch: ScratchStore,
}

impl AppState {
    /// Create the application state.
    ///
    /// The converter is selected once at startup and injected here; it stays
    /// read-only for the process lifetime.
    pub fn new(config: Config, converter: Arc<dyn MarkdownConverter>) -> Self {
        let scratch = ScratchStore::new(config.conversion.scratch_dir.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                converter,
                scratch,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the selected conversion backend
    pub fn converter(&self) -> Arc<dyn MarkdownConverter> {
        Arc::clone(&self.inner.converter)
    }

    /// Get the scratch store
    pub fn scratch(&self) -> &ScratchStore {
        &self.inner.scratch
    }
}
