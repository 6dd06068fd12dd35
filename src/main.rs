//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use ixora_stylist::adapters::ai::{GeminiAdapter, MockModelAdapter};
use ixora_stylist::adapters::capture::FileCapture;
use ixora_stylist::adapters::ui::tui::TuiInputPort;
use ixora_stylist::domain::{SessionState, UserProfile};
use ixora_stylist::ports::{CapturePort, InputPort, ModelPort};
use ixora_stylist::shared::config::AppConfig;
use ixora_stylist::usecases::StylistService;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });

    info!(ai_configured = cfg.is_ai_configured(), "configuration loaded");

    // --- Model service ---
    let model: Arc<dyn ModelPort> = match cfg.ai_api_key() {
        Some(api_key) => {
            info!(
                model = %cfg.ai_model_or_default(),
                base = %cfg.ai_api_base_or_default(),
                "Gemini adapter enabled"
            );
            Arc::new(
                GeminiAdapter::new(
                    cfg.ai_api_base_or_default(),
                    api_key,
                    cfg.ai_model_or_default(),
                    Duration::from_secs(cfg.request_timeout_secs_or_default()),
                )
                .map_err(|e| anyhow::anyhow!("{}", e))?,
            )
        }
        None => {
            warn!("IXORA_AI_API_KEY / GEMINI_API_KEY not set, using mock model adapter");
            Arc::new(MockModelAdapter::new())
        }
    };

    ixora_stylist::adapters::ui::init_ui(model.model_name());

    // --- Session & services ---
    let profile = UserProfile::default();
    let greeting_name = profile.name.clone();
    let session = Arc::new(SessionState::new(profile));
    let stylist = Arc::new(StylistService::new(Arc::clone(&model)));
    let capture: Arc<dyn CapturePort> = Arc::new(FileCapture::new());

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        stylist,
        capture,
        session,
        cfg.weather(),
        &greeting_name,
    ));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!("session ended");
    Ok(())
}
