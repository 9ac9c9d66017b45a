use super::phase::{SimSignal, Simulation};
use crate::{error::AppError, time::TimeProvider};
use std::{fmt::Debug, sync::Arc};
use tokio::sync::{mpsc::Receiver, watch, RwLock};
use tracing::{info, warn};

/// Receives the month counter whenever the simulation moves to a new month.
pub trait MonthObserver: Send + Sync + Debug {
    fn on_month_change(&self, month: u8);
}

#[derive(Debug)]
pub struct LogObserver;

impl MonthObserver for LogObserver {
    fn on_month_change(&self, month: u8) {
        info!(month, name = super::month_name(month), "Month changed.");
    }
}

fn handle_control_signals(sim: &mut Simulation, rx: &mut Receiver<SimSignal>) {
    while let Ok(signal) = rx.try_recv() {
        if let Err(e) = sim.handle_signal(signal) {
            warn!(error = %e, "Simulation signal rejected.");
        }
    }
}

/// Frame loop: drain control signals, tick, notify, sleep one frame.
pub async fn run_simulation(
    sim: Arc<RwLock<Simulation>>,
    time_provider: Arc<dyn TimeProvider>,
    mut sim_rx: Receiver<SimSignal>,
    observer: Arc<dyn MonthObserver>,
    stop_signal: watch::Receiver<bool>,
    end_time: Option<i64>, // Optional parameter for tests
) -> Result<(), AppError> {
    let frame_ms = sim.read().await.cfg.frame_interval_ms;
    let mut now = time_provider.now();
    while end_time.map_or(true, |end| now < end) && !*stop_signal.borrow() {
        now = time_provider.now();
        {
            let mut sim = sim.write().await;
            handle_control_signals(&mut sim, &mut sim_rx);
            if let Some(month) = sim.tick(now) {
                observer.on_month_change(month);
            }
        }
        time_provider.advance_time(frame_ms as i64).await;
    }
    info!("Ending simulation loop.");
    Ok(())
}
