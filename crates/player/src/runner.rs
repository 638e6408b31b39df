use std::sync::Arc;

use crate::application::services::SearchService;
use crate::config::ShellKind;
use crate::infrastructure::LeafletSurfaceFactory;
use crate::ports::outbound::{AdventureSearchPort, MapSurfaceFactory, SleepPort};
use crate::ui::presentation::Services;

pub struct RunnerDeps {
    pub search: Arc<dyn AdventureSearchPort>,
    pub sleep: Arc<dyn SleepPort>,
    pub shell: ShellKind,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps {
        search,
        sleep,
        shell,
    } = deps;

    let map_factory: Arc<dyn MapSurfaceFactory> = Arc::new(LeafletSurfaceFactory);
    let services = Services::new(Arc::new(SearchService::new(search)), map_factory, sleep);

    tracing::info!(?shell, "Launching Micro-Aventure player");

    dioxus::LaunchBuilder::new()
        .with_context(shell)
        .with_context(services)
        .launch(crate::ui::app);
}
