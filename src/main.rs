//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into services, run once.
//! No business logic here; the pipeline lives in ReportService.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tg_chat_report::adapters::persistence::{PayloadFile, ReportFile};
use tg_chat_report::adapters::render::{ReportFormat, renderer_for};
use tg_chat_report::adapters::telegram::BotApiGateway;
use tg_chat_report::adapters::ui::{ProgressBarReporter, TracingReporter, TuiInputPort};
use tg_chat_report::domain::DomainError;
use tg_chat_report::ports::{ChatGateway, InputPort, ProgressPort};
use tg_chat_report::shared::config::{AppConfig, DEFAULT_IDS_FILE};
use tg_chat_report::usecases::{AuthService, EnrichService, ReportService, RunOutcome};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, falling back to defaults");
        AppConfig::default()
    });
    let interactive = cfg.is_interactive();
    if interactive {
        tg_chat_report::adapters::ui::init_ui();
    }

    // --- Run parameters: config first, prompts for whatever is missing ---
    let input: Arc<dyn InputPort> = Arc::new(TuiInputPort::new());
    let token = match cfg.bot_token.clone() {
        Some(token) => token,
        None if interactive => input
            .ask_bot_token()
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        None => anyhow::bail!("Set TG_REPORT_BOT_TOKEN (env or .env). Get one from @BotFather"),
    };
    let ids_file = match cfg.ids_file.clone() {
        Some(path) => path,
        None if interactive => input
            .ask_ids_file(DEFAULT_IDS_FILE)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        None => cfg.ids_file_or_default(),
    };

    let format: ReportFormat = cfg
        .format_or_default()
        .parse()
        .map_err(|e: DomainError| anyhow::anyhow!("{}", e))?;
    let renderer = renderer_for(format);
    let output_path = cfg.output_path_or_default(renderer.extension());

    // --- Telegram gateway (every call bounded by the same timeout) ---
    let call_timeout = Duration::from_secs(cfg.request_timeout_secs_or_default());
    let gateway: Arc<dyn ChatGateway> = Arc::new(
        BotApiGateway::new(cfg.api_base_url_or_default(), token, call_timeout)
            .map_err(|e| anyhow::anyhow!("{}", e))?,
    );

    let progress: Arc<dyn ProgressPort> = if interactive {
        Arc::new(ProgressBarReporter::new())
    } else {
        Arc::new(TracingReporter)
    };

    // --- Services ---
    let concurrency = cfg.concurrency_or_default();
    info!(
        concurrency,
        timeout_secs = call_timeout.as_secs(),
        format = ?format,
        "enrichment settings"
    );
    let enricher = EnrichService::new(Arc::clone(&gateway), progress)
        .with_call_timeout(call_timeout)
        .with_concurrency(concurrency);
    let auth = AuthService::new(Arc::clone(&gateway)).with_call_timeout(call_timeout);
    let report_service = ReportService::new(
        auth,
        enricher,
        renderer,
        Arc::new(ReportFile::new(&output_path)),
    );

    // --- Run (read ids -> authenticate -> enrich -> report) ---
    info!(path = %ids_file, "reading chat IDs");
    match report_service.run_from(&PayloadFile::new(&ids_file)).await {
        Ok(RunOutcome::Reported {
            requested,
            included,
            path,
        }) => {
            println!(
                "\nReport generated with {} of {} requested chats.",
                included, requested
            );
            println!("File: {}", path.display());
            Ok(())
        }
        Ok(RunOutcome::NothingEnriched { requested }) => {
            println!("\nNone of the {} chats could be processed. Check that:", requested);
            println!("1. The chat IDs are correct");
            println!("2. The bot is a member of the listed groups");
            println!("3. The bot has the required permissions");
            anyhow::bail!("no chat could be processed")
        }
        Err(DomainError::Input(msg)) => {
            println!("\nNo valid chat IDs found in '{}'.", ids_file);
            println!("The file should contain a JSON list of IDs, for example:");
            println!("[-1001234567890, -1009876543210]");
            anyhow::bail!("{}", msg)
        }
        Err(DomainError::Auth(msg)) => {
            println!("\nTelegram rejected the bot token. Check the token and try again.");
            anyhow::bail!("authentication failed: {}", msg)
        }
        Err(e) => Err(anyhow::anyhow!("{}", e)),
    }
}
