use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hotel_booking::api::{AppState, create_router};
use hotel_booking::availability::BookingManager;
use hotel_booking::config::ConfigLoader;
use hotel_booking::repository::{
    BookingRepository, InMemoryBookingRepository, JsonFileBookingRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("HOTEL_CONFIG_DIR").unwrap_or_else(|_| "./config/hotel".into());
    let config = ConfigLoader::load(&config_dir)?;

    let bind = std::env::var("HOTEL_BIND").unwrap_or_else(|_| config.server().bind_address.clone());

    let bookings: Arc<dyn BookingRepository> = match &config.server().bookings_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            Arc::new(JsonFileBookingRepository::open(path)?)
        }
        None => Arc::new(InMemoryBookingRepository::new()),
    };
    let rooms = Arc::new(config.room_repository());

    let manager = BookingManager::new(bookings, rooms);
    let router = create_router(AppState::new(manager));

    let listener = TcpListener::bind(&bind).await?;
    info!("{} listening on {bind}", config.hotel().name);
    info!("  config_dir: {config_dir}");
    info!("  rooms: {}", config.rooms().len());
    info!(
        "  bookings: {}",
        config
            .server()
            .bookings_file
            .as_ref()
            .map_or("in memory".to_string(), |p| p.display().to_string())
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutdown signal received");
        })
        .await?;

    info!("stopped");
    Ok(())
}
