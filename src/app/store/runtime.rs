use super::action::{Action, AsyncAction};
use super::command::Command;
use crate::app::CompareApp;
use crate::application::catalog::list_versions;
use crate::application::pipeline::generate_artifact;
use crate::domain::Version;
use crate::infra::display::DisplayAdapter;

pub fn run<D: DisplayAdapter>(app: &mut CompareApp<D>, command: Command) {
    match command {
        Command::LoadCatalog => load_catalog(app),
        Command::GenerateArtifact { version } => generate(app, version),
    }
}

fn load_catalog<D: DisplayAdapter>(app: &mut CompareApp<D>) {
    let source = app.source.clone();
    let edition = app.edition.clone();
    let action_tx = app.action_tx.clone();

    tokio::spawn(async move {
        let result = list_versions(source.as_ref(), &edition).await;
        if action_tx
            .send(Action::Async(AsyncAction::VersionsLoaded(result)))
            .await
            .is_err()
        {
            log::debug!("version catalog resolved after the app closed");
        }
    });
}

fn generate<D: DisplayAdapter>(app: &mut CompareApp<D>, version: Version) {
    let source = app.source.clone();
    let converter = app.converter.clone();
    let action_tx = app.action_tx.clone();

    log::debug!("scheduling generation for {version}");
    tokio::spawn(async move {
        let result = generate_artifact(source.as_ref(), converter.as_ref(), &version).await;
        if action_tx
            .send(Action::Async(AsyncAction::ArtifactGenerated { version, result }))
            .await
            .is_err()
        {
            log::debug!("artifact generated after the app closed");
        }
    });
}
