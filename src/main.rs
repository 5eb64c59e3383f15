//! Hexa AI server binary.

use std::sync::Arc;

use hexa_ai::adapters::ai::{
    MockAICounselor, MockMessageConverter, OpenAIClient, OpenAIConfig, OpenAICounselor,
    OpenAIMessageConverter,
};
use hexa_ai::adapters::auth::{JwtSessionValidator, MockSessionValidator};
use hexa_ai::adapters::http::{build_router, with_http_layers, AppPorts};
use hexa_ai::adapters::memory::{
    InMemoryArticleRepository, InMemoryConsultRepository, InMemoryKeywordRepository,
};
use hexa_ai::adapters::postgres::{
    PostgresArticleRepository, PostgresConsultRepository, PostgresKeywordRepository,
};
use hexa_ai::config::{AppConfig, DatabaseConfig, ServerConfig};
use hexa_ai::ports::{
    AICounselor, ArticleRepository, ConsultRepository, KeywordRepository, MessageConverter,
    SessionValidator,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let (consult_repository, article_repository) = match &config.database {
        Some(database) => connect_postgres(database).await?,
        None => {
            tracing::warn!("No database configured, data is kept in memory");
            let keywords: Arc<dyn KeywordRepository> = Arc::new(InMemoryKeywordRepository::new());
            (
                Arc::new(InMemoryConsultRepository::new()) as Arc<dyn ConsultRepository>,
                Arc::new(InMemoryArticleRepository::new(keywords)) as Arc<dyn ArticleRepository>,
            )
        }
    };

    let (counselor, converter) = ai_collaborators(&config)?;

    let ports = AppPorts {
        consult_repository,
        counselor,
        converter,
        article_repository,
        session_validator: session_validator(&config),
        analysis_timeout: config.ai.analysis_timeout(),
    };

    let app = with_http_layers(
        build_router(ports),
        &config.server.cors_origins_list(),
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "hexa-ai listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

async fn connect_postgres(
    database: &DatabaseConfig,
) -> Result<(Arc<dyn ConsultRepository>, Arc<dyn ArticleRepository>), BoxError> {
    let pool = database.pool_options().connect(&database.url).await?;

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let keywords: Arc<dyn KeywordRepository> =
        Arc::new(PostgresKeywordRepository::new(pool.clone()));

    Ok((
        Arc::new(PostgresConsultRepository::new(pool.clone())),
        Arc::new(PostgresArticleRepository::new(pool, keywords)),
    ))
}

fn ai_collaborators(
    config: &AppConfig,
) -> Result<(Arc<dyn AICounselor>, Arc<dyn MessageConverter>), BoxError> {
    let Some(api_key) = config.ai.api_key() else {
        tracing::warn!("No OpenAI API key configured, using mock AI responses");
        return Ok((
            Arc::new(MockAICounselor::new()),
            Arc::new(MockMessageConverter::new()),
        ));
    };

    let client = OpenAIClient::new(
        OpenAIConfig::new(api_key.clone())
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    )?;
    tracing::info!(model = client.model(), "OpenAI collaborators configured");

    Ok((
        Arc::new(OpenAICounselor::new(client.clone())),
        Arc::new(OpenAIMessageConverter::new(client)),
    ))
}

fn session_validator(config: &AppConfig) -> Arc<dyn SessionValidator> {
    match &config.auth.jwt_secret {
        Some(secret) => Arc::new(JwtSessionValidator::new(
            secret.clone(),
            config.auth.jwt_issuer.clone(),
        )),
        None => {
            tracing::warn!("No JWT secret configured, authenticated routes reject every token");
            Arc::new(MockSessionValidator::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
