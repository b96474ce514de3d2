use clap::{ArgAction, Parser};
use dietwise_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DietwiseConfig, LLMConfig,
};
use url::Url;

#[derive(Clone, Parser)]
#[command(name = "dietwise", version, about = "Disease classification and diet recommendations")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Clone, Debug, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/dietwise`.
    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3333"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "contact-email",
        env = "CONTACT_EMAIL",
        default_value = "support@healthapp.com"
    )]
    pub contact_email: String,

    #[arg(
        long = "metrics",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Clone, clap::Args)]
pub struct LLMArgs {
    /// Read once at startup. A missing key only fails the first model call.
    #[arg(
        long = "gemini-api-key",
        env = "GOOGLE_API_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: Url,
}

#[derive(Clone, Debug, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(
        long = "log-json",
        env = "LOG_JSON",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub json: bool,
}

impl From<Args> for DietwiseConfig {
    fn from(args: Args) -> Self {
        DietwiseConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url.as_str().to_string(),
            },
        }
    }
}
