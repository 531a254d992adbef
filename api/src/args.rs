use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use recipe_chat_core::domain::common::{DatasetConfig, LLMConfig, RecipeChatConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-chat-api", version, about = "Suggest recipes from a list of ingredients")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// `*` mirrors the request origin.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatasetArgs {
    #[arg(long = "dataset-path", env = "DATASET_PATH", default_value = "train.json")]
    pub path: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "ollama-url", env = "OLLAMA_URL", default_value = "http://localhost:11434")]
    pub base_url: String,

    #[arg(long = "llm-model", env = "LLM_MODEL", default_value = "mistral")]
    pub model: String,

    /// Unset means wait for the model as long as it takes.
    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            server: ServerArgs {
                host: "0.0.0.0".to_string(),
                port: 8000,
                root_path: String::new(),
                allowed_origins: vec!["*".to_string()],
            },
            dataset: DatasetArgs {
                path: "train.json".to_string(),
            },
            llm: LlmArgs {
                base_url: "http://localhost:11434".to_string(),
                model: "mistral".to_string(),
                timeout_secs: None,
            },
            log: LogArgs {
                filter: "info".to_string(),
                json: false,
            },
        }
    }
}

impl From<Args> for RecipeChatConfig {
    fn from(args: Args) -> Self {
        Self {
            dataset: DatasetConfig {
                path: args.dataset.path,
            },
            llm: LLMConfig {
                base_url: args.llm.base_url,
                model: args.llm.model,
                request_timeout: args.llm.timeout_secs.map(Duration::from_secs),
            },
        }
    }
}
