pub mod mock_observer;
pub mod mock_time;

use crate::{
    api::AppState,
    config::{self, Config},
    estimation::ClimateConstants,
    simulation::{PropertyKind, SimSignal, Simulation},
};
use mock_time::MockTimeProvider;
use std::sync::Arc;
use tokio::sync::{mpsc, watch, RwLock};

pub const TEST_SEED: u64 = 7;

pub fn set_app_state() -> (Arc<AppState>, mpsc::Receiver<SimSignal>) {
    AppState::new(&Config::default(), TEST_SEED)
}

/// Simulation already past the input panel, paused at January.
pub fn set_running_simulation(kind: PropertyKind, location: &str) -> Arc<RwLock<Simulation>> {
    let mut sim = Simulation::new(config::Simulation::default(), ClimateConstants::default(), TEST_SEED);
    _ = sim.handle_signal(SimSignal::SelectProperty(kind));
    _ = sim.handle_signal(SimSignal::SetLocation(location.to_owned()));
    _ = sim.handle_signal(SimSignal::SubmitDimensions);
    Arc::new(RwLock::new(sim))
}

pub fn set_time_provider(start_time: i64) -> Arc<MockTimeProvider> {
    Arc::new(MockTimeProvider::new(start_time))
}

/// Stop channel for the frame loop; keep the sender alive for the duration of the test.
pub fn set_stop_signal() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}
