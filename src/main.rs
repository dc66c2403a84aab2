use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use liftplan::config::Config;
use liftplan::handlers::{diary, timeline};
use liftplan::repositories::DiaryRepository;
use liftplan::services::DiaryService;
use liftplan::version::GIT_VERSION;
use liftplan::{db, migrations, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liftplan=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing::info!("liftplan {} starting", GIT_VERSION);
    tracing::info!("Connecting to database: {}", config.database_url);

    let pool = db::create_pool(&config.database_url)?;
    migrations::run_migrations(&pool)?;

    let diary_service = DiaryService::new(DiaryRepository::new(pool.clone()));

    let diary_state = diary::DiaryState {
        diary_service: diary_service.clone(),
    };
    let timeline_state = timeline::TimelineState {
        diary_service,
        default_settings: config.default_settings.clone(),
    };

    let app = routes::create_router(diary_state, timeline_state);

    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
