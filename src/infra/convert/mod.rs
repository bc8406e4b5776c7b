pub mod builtin;
pub mod external;
pub mod traits;

use std::sync::Arc;

pub use builtin::BuiltinConverter;
pub use external::ExternalConverter;
pub use traits::ConversionService;

use crate::infra::app_config::ConverterConfig;

pub fn from_config(config: &ConverterConfig) -> Arc<dyn ConversionService> {
    match config {
        ConverterConfig::Builtin => Arc::new(BuiltinConverter),
        ConverterConfig::Command { program, args } => {
            Arc::new(ExternalConverter::new(program.clone(), args.clone()))
        }
    }
}
