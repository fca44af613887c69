use std::sync::Arc;

use mimalloc::MiMalloc;
use snoopy_airlines::api::ReservationApi;
use snoopy_airlines::config::Config;
use snoopy_airlines::db::{self, FlightStorage};
use snoopy_airlines::router::{AirlineState, airline_router};
use snoopy_airlines::service::flight_search::FlightSearchService;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.basic.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.basic.database_url,
        reservation_base_url = %cfg.reservation.base_url,
        loglevel = %cfg.basic.loglevel,
        init_schema = cfg.basic.init_schema
    );

    let pool = db::connect(&cfg.basic.database_url).await?;
    let storage = FlightStorage::new(pool);
    if cfg.basic.init_schema {
        storage.init_schema().await?;
        info!("database schema initialised");
    }

    let reservations = ReservationApi::new(reqwest::Client::new(), &cfg.reservation.base_url)?;

    let state = AirlineState::new(FlightSearchService::new(storage), Arc::new(reservations));
    let app = airline_router(state);

    let listener = TcpListener::bind(cfg.basic.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.basic.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
