use std::time::Instant;

use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use reelpick::catalog::Catalog;
use reelpick::config::Config;
use reelpick::middleware::request_id::{make_span, request_id_middleware};
use reelpick::routes::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // The catalog must be complete before the listener exists; any dataset
    // problem aborts startup here.
    let start = Instant::now();
    let catalog = Catalog::load(&config.movies_path, &config.ratings_path)?;
    tracing::info!(
        movies = catalog.len(),
        genres = catalog.genres().len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Catalog loaded"
    );

    let state = AppState::new(catalog);
    let app = create_router(state).layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http().make_span_with(make_span)),
    );

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
