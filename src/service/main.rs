use roster::config::ServiceConfig;
use roster::http::http_router;
use roster::persistence::memory::MemoryPersistence;
use roster::persistence::relational::RecordRelationalPersistence;
use roster::persistence::Persistence;
use roster::services::RecordService;
use roster_core::Record;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn record_persistence(config: &ServiceConfig) -> anyhow::Result<Box<dyn Persistence<Record>>> {
    let database_url = match &config.database_url {
        Some(database_url) => database_url,
        None => {
            tracing::warn!("DATABASE_URL not set, records are kept in memory");
            return Ok(Box::new(MemoryPersistence::<Record>::default()));
        }
    };

    let db = Arc::new(
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(database_url)
            .await?,
    );

    sqlx::migrate!().run(&*db).await?;

    Ok(Box::new(RecordRelationalPersistence { db }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    let config = ServiceConfig::from_env()?;

    let record_service = Arc::new(RecordService {
        persistence: record_persistence(&config).await?,
    });

    tracing::info!("http api listening on {}", config.endpoint);

    axum::Server::bind(&config.endpoint)
        .serve(http_router(record_service).into_make_service())
        .await?;

    Ok(())
}
