use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::records::{FetchError, HttpRecordSource, RecordSource};
use crate::core::session::{open_store, SessionGate, SessionStore};

/// Centralized handle to the backends the screens talk to.
///
/// Created once at startup and passed by reference to the screens.
pub struct Services {
    pub gate: SessionGate<Box<dyn SessionStore>>,
    pub source: Arc<dyn RecordSource>,
}

impl Services {
    pub fn new(store: Box<dyn SessionStore>, source: Arc<dyn RecordSource>) -> Self {
        Self {
            gate: SessionGate::new(store),
            source,
        }
    }

    /// Build services from config: the configured session store and an HTTP
    /// record source.
    pub fn init(config: &AppConfig) -> Result<Self, FetchError> {
        let store = open_store(config);
        let source = HttpRecordSource::from_config(&config.source)?;
        log::info!("Record source: {}", source.url());
        Ok(Self::new(store, Arc::new(source)))
    }
}
