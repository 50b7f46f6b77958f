use std::sync::Arc;

use anyhow::Context;
use storage::Database;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;
mod state;

use config::Config;
use features::battle_cards::renderer::StaticImageRenderer;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::battle_cards::handlers::ensure_battle_card,
        features::battle_cards::handlers::get_battle_card,
        features::battle_cards::handlers::get_battle_card_image,
        features::contests::handlers::get_contest,
        features::share::handlers::get_share_links,
    ),
    components(
        schemas(
            storage::dto::battle_card::EnsureBattleCardRequest,
            storage::dto::battle_card::BattleCardData,
            storage::dto::battle_card::CreatorSnapshot,
            storage::dto::contest::ContestResponse,
            storage::dto::contest::ParticipantResponse,
            storage::models::ProfileData,
            storage::models::ProfileAvatar,
            features::share::services::ShareLinks,
        )
    ),
    tags(
        (name = "battle-cards", description = "Battle card allocation and images"),
        (name = "contests", description = "Public contest endpoints"),
        (name = "share", description = "Social share links"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Blitz battle card API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!("Connecting to database at: {}", config.database_host());
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    tracing::info!(
        "Serving battle card image from {}",
        config.battle_card_image_path.display()
    );
    let state = AppState::new(
        Arc::new(db),
        Arc::new(StaticImageRenderer::new(&config.battle_card_image_path)),
        &config.public_base_url,
    );

    let app = routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
