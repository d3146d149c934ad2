use crate::config::GeminiOptions;
use crate::gemini::GeminiClient;
use crate::prelude::{eprintln, *};
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use coderelay_core::prompt::{extract_prompt, ErrorBody};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "CODERELAY_PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "CODERELAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[clap(flatten)]
    pub gemini: GeminiOptions,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let config = options.gemini.into_config()?;
    let client = GeminiClient::new(&config)?;

    let addr = format!("{}:{}", options.host, options.port);

    if global.verbose {
        eprintln!("Completion endpoint: {}", client.url());
        eprintln!("Timeout: {:?}", config.timeout);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    log::info!("Relay listening on http://{addr}");
    if global.verbose {
        eprintln!("Generate endpoint: http://{}/generate", addr);
    }

    axum::serve(listener, router(client))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// The relay's routes, with permissive CORS so browser UIs can call it.
///
/// Request bodies are not size-limited; any non-empty prompt is forwarded.
pub fn router(client: GeminiClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/generate", post(generate_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .with_state(Arc::new(client))
}

/// `POST /generate`
///
/// The body is read as JSON whatever its content type. Only a missing prompt
/// produces a non-200 answer; completion failures come back as fallbacks.
async fn generate_handler(State(client): State<Arc<GeminiClient>>, body: Bytes) -> Response {
    log::info!("/generate request received");

    let Some(prompt) = extract_prompt(&body) else {
        log::warn!("Rejecting request without a prompt");
        return (StatusCode::BAD_REQUEST, Json(ErrorBody::missing_prompt())).into_response();
    };

    log::debug!("Prompt received: {prompt}");
    let reply = client.generate(&prompt).await;
    log::info!(
        "Responding with {} directive",
        if reply.is_fallback() { "fallback" } else { "model" }
    );

    Json(reply).into_response()
}
