//! Application configuration. Bot credential, paths, tuning.

use serde::Deserialize;

/// Default file with chat IDs when neither config nor prompt provides one.
pub const DEFAULT_IDS_FILE: &str = "chat_ids.json";

/// Report file stem; the renderer supplies the extension.
pub const DEFAULT_REPORT_STEM: &str = "telegram_groups_report";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Bot token from @BotFather. Read from TG_REPORT_BOT_TOKEN.
    pub bot_token: Option<String>,

    /// Path of the chat ID list. Read from TG_REPORT_IDS_FILE.
    pub ids_file: Option<String>,

    /// Where the report is written. Defaults to `telegram_groups_report.<ext>`. Read from TG_REPORT_OUTPUT_PATH.
    #[serde(default)]
    pub output_path: Option<String>,

    /// `html` (default) or `csv`. Read from TG_REPORT_FORMAT.
    #[serde(default)]
    pub format: Option<String>,

    /// Chats enriched at once (default 1, sequential). Read from TG_REPORT_CONCURRENCY.
    #[serde(default)]
    pub concurrency: Option<usize>,

    /// Timeout per Bot API call in seconds (default 15). Read from TG_REPORT_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Bot API base URL (default https://api.telegram.org; a local Bot API server also works).
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Banner, prompts and progress bar (default true). Read from TG_REPORT_INTERACTIVE.
    #[serde(default)]
    pub interactive: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("TG_REPORT").try_parsing(true));
        if let Ok(path) = std::env::var("TG_REPORT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // TELEGRAM_BOT_TOKEN is accepted as well so an existing bot .env can be reused.
        if cfg.bot_token.is_none() {
            cfg.bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok();
        }
        cfg.bot_token = cfg.bot_token.filter(|t| !t.trim().is_empty());
        Ok(cfg)
    }

    /// Returns the chat ID file or `chat_ids.json`.
    pub fn ids_file_or_default(&self) -> String {
        self.ids_file
            .clone()
            .unwrap_or_else(|| DEFAULT_IDS_FILE.to_string())
    }

    /// Returns the report path, using `extension` when no explicit path is configured.
    pub fn output_path_or_default(&self, extension: &str) -> String {
        self.output_path
            .clone()
            .unwrap_or_else(|| format!("{}.{}", DEFAULT_REPORT_STEM, extension))
    }

    /// Returns the report format name. Defaults to "html".
    pub fn format_or_default(&self) -> String {
        self.format.clone().unwrap_or_else(|| "html".to_string())
    }

    /// Returns enrichment concurrency. Defaults to 1; 0 is treated as 1.
    pub fn concurrency_or_default(&self) -> usize {
        self.concurrency.unwrap_or(1).max(1)
    }

    /// Returns per-call timeout in seconds. Defaults to 15.
    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs.filter(|&s| s > 0).unwrap_or(15)
    }

    /// Returns the Bot API base URL.
    pub fn api_base_url_or_default(&self) -> String {
        self.api_base_url
            .clone()
            .unwrap_or_else(|| crate::adapters::telegram::DEFAULT_API_BASE.to_string())
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive.unwrap_or(true)
    }
}
