//! Root application struct.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::infra::convert::ConversionService;
use crate::infra::display::DisplayAdapter;
use crate::infra::source::DefinitionSource;

use super::binding::DisplayBinding;
use super::state::AppState;
use super::store::Action;

/// Side-by-side comparison of two protocol versions.
pub struct CompareApp<D: DisplayAdapter> {
    pub state: AppState,

    pub source: Arc<dyn DefinitionSource>,
    pub converter: Arc<dyn ConversionService>,
    pub edition: String,

    pub binding: DisplayBinding<D>,

    pub action_tx: mpsc::Sender<Action>,
    pub action_rx: mpsc::Receiver<Action>,
}

impl<D: DisplayAdapter> CompareApp<D> {
    pub fn display(&self) -> &D {
        self.binding.display()
    }

    pub fn display_mut(&mut self) -> &mut D {
        self.binding.display_mut()
    }

    /// Symbol keys of the modified version, in location index order.
    pub fn symbols(&self) -> Vec<String> {
        self.state.symbols()
    }
}
