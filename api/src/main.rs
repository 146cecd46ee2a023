use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use cg_api::{create_app, AppState, Repositories, ServiceSettings};
use cg_infra::config::NotificationConfig;
use cg_infra::database::{
    DatabasePool, MySqlBookingRepository, MySqlCashierRepository, MySqlOtpRepository,
    MySqlRestaurantRepository, MySqlTransactionRepository, MySqlUserRepository,
};
use cg_infra::export::XlsxExporter;
use cg_infra::notification::create_notifier;
use cg_shared::config::{AppConfig, LogFormat, LoggingConfig};

/// Install the tracing subscriber; `log` records from this crate are bridged into it
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    info!("Starting Chegirma API Server ({:?})", config.environment);

    if config.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        log::warn!("JWT_SECRET is not set, using the development default");
    }

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    if config.database.run_migrations {
        database
            .run_migrations()
            .await
            .context("Failed to run database migrations")?;
    }
    info!("Database ready: {}", database.get_statistics());

    let pool = database.get_pool().clone();
    let repositories = Repositories {
        users: Arc::new(MySqlUserRepository::new(pool.clone())),
        restaurants: Arc::new(MySqlRestaurantRepository::new(pool.clone())),
        cashiers: Arc::new(MySqlCashierRepository::new(pool.clone())),
        bookings: Arc::new(MySqlBookingRepository::new(pool.clone())),
        transactions: Arc::new(MySqlTransactionRepository::new(pool.clone())),
        otps: Arc::new(MySqlOtpRepository::new(pool)),
    };

    let notifier = create_notifier(&NotificationConfig::from_env());
    info!("OTP delivery channel: {}", notifier.channel());

    let state = web::Data::new(AppState::new(
        repositories,
        notifier,
        Arc::new(XlsxExporter::new()),
        ServiceSettings {
            jwt: config.jwt.clone(),
            otp: config.otp.clone(),
            security: config.security.clone(),
        },
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &cors))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    // Zero keeps the actix default of one worker per core
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}
