use std::net::SocketAddr;
use std::sync::Arc;

use gigport_api::{
    app,
    state::{AppState, AuthConfig},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gigport_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = gigport_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting Gigport API on port {}", config.server.port);

    let db = gigport_store::DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let app_state = AppState {
        offers: Arc::new(gigport_store::PgOfferRepository::new(db.pool.clone())),
        orders: Arc::new(gigport_store::PgOrderRepository::new(db.pool.clone())),
        reviews: Arc::new(gigport_store::PgReviewRepository::new(db.pool.clone())),
        profiles: Arc::new(gigport_store::PgProfileRepository::new(db.pool.clone())),
        files: Arc::new(gigport_store::LocalFileStore::new(
            &config.uploads.dir,
            &config.uploads.base_url,
        )),
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration_seconds: config.auth.jwt_expiration_seconds,
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
