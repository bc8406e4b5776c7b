pub mod http;
pub mod local;
pub mod traits;

use std::sync::Arc;

pub use http::HttpDefinitionSource;
pub use local::LocalDefinitionSource;
pub use traits::DefinitionSource;

use crate::infra::app_config::AppConfig;

/// Picks the local data directory when one is configured, the remote index otherwise.
pub fn from_config(config: &AppConfig) -> Arc<dyn DefinitionSource> {
    match &config.data_dir {
        Some(dir) => Arc::new(LocalDefinitionSource::new(dir, &config.edition)),
        None => Arc::new(HttpDefinitionSource::new(
            &config.index_url,
            &config.definition_url,
            &config.edition,
        )),
    }
}
