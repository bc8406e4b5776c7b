use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::Version;
use crate::infra::app_config::AppConfig;
use crate::infra::convert::{self, ConversionService};
use crate::infra::display::DisplayAdapter;
use crate::infra::source::{self, DefinitionSource};

use super::CompareApp;
use super::binding::DisplayBinding;
use super::state::AppState;

const ACTION_CHANNEL_CAPACITY: usize = 64;

impl<D: DisplayAdapter> CompareApp<D> {
    pub fn new(config: &AppConfig, display: D) -> Self {
        Self::with_services(
            AppState::new(
                Version::from(config.default_original.as_str()),
                Version::from(config.default_modified.as_str()),
            ),
            source::from_config(config),
            convert::from_config(&config.converter),
            config.edition.clone(),
            display,
        )
    }

    pub fn with_services(
        state: AppState,
        source: Arc<dyn DefinitionSource>,
        converter: Arc<dyn ConversionService>,
        edition: impl Into<String>,
        display: D,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);
        log::debug!(
            "comparison app using source={} converter={}",
            source.id(),
            converter.id()
        );
        Self {
            state,
            source,
            converter,
            edition: edition.into(),
            binding: DisplayBinding::mount(display),
            action_tx,
            action_rx,
        }
    }
}
