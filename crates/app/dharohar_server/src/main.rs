//! Dharohar chat relay server binary.
//!
//! Binds one HTTP endpoint (`POST /gemini`) and relays prompts to the
//! Gemini generateContent API, serving canned heritage-themed fallback
//! texts whenever the upstream call fails.

use clap::Parser;
use tracing::info;

use dharohar_api::config::ApiConfig;
use dharohar_api::gemini::GeminiClient;

/// CLI arguments for the relay server.
#[derive(Parser, Debug)]
#[command(name = "dharohar_server", about = "Dharohar heritage-guide chat relay")]
struct Args {
    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dharohar_api=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    // clap already resolved PORT (flag beats env beats default), so its
    // value is authoritative for the bind address.
    let mut config = ApiConfig::from_env()?;
    config.bind_addr = format!("0.0.0.0:{}", args.port);

    info!(endpoint = %config.gemini_endpoint, "starting dharohar_server");

    let gemini = GeminiClient::new(
        reqwest::Client::new(),
        config.gemini_endpoint.clone(),
        config.gemini_api_key.clone(),
    );

    let state = dharohar_api::AppState {
        config: config.clone(),
        gemini,
    };
    let app = dharohar_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!("chatbot backend running at http://{local_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
