use rtrwh::api::{run_web_server, AppState};
use rtrwh::config::{run_options::get_args, Config};
use rtrwh::simulation::{run_simulation, LogObserver};
use rtrwh::time::{RealTimeProvider, TimeProvider};
use rtrwh::utils::start_log;
use std::{error::Error, sync::Arc, time::Duration};
use tokio::sync::watch;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = get_args();
    let cfg = Config::load(&args)?;
    start_log::<RealTimeProvider>(None, Some(&cfg.log.level));

    info!("Starting application...");

    let time_provider = Arc::new(RealTimeProvider);
    let (app_state, sim_rx) = AppState::new(&cfg, time_provider.now() as u64);
    let (stop_tx, stop_rx) = watch::channel(false);

    let sim_task = tokio::spawn({
        let simulation = app_state.simulation.clone();
        async move {
            if let Err(e) =
                run_simulation(simulation, time_provider, sim_rx, Arc::new(LogObserver), stop_rx, None).await
            {
                error!(error = %e, "Simulation loop failed.");
            }
        }
    });

    let handle = axum_server::Handle::new();
    tokio::spawn({
        let handle = handle.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Ctrl-C received, shutting down.");
            }
            _ = stop_tx.send(true);
            handle.graceful_shutdown(Some(Duration::from_secs(5)));
        }
    });

    run_web_server(&cfg.web_server.address, app_state, handle).await?;
    _ = sim_task.await;
    info!("Application stopped.");
    Ok(())
}
