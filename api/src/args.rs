use aircook_core::domain::common::{AirCookConfig, AirtableConfig, AuthConfig, LLMConfig};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "aircook", version, about = "AirCook recipe API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub airtable: AirtableArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[arg(long, env = "ENV", value_enum, default_value_t = Environment::Development)]
    pub env: Environment,

    /// Emit logs as JSON lines.
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

impl Args {
    pub fn is_production(&self) -> bool {
        self.env == Environment::Production
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AirtableArgs {
    #[arg(long = "airtable-api-key", env = "AIRTABLE_API_KEY")]
    pub api_key: String,

    #[arg(long = "airtable-base-id", env = "AIRTABLE_BASE_ID")]
    pub base_id: String,

    #[arg(
        long = "airtable-api-url",
        env = "AIRTABLE_API_URL",
        default_value = "https://api.airtable.com/v0"
    )]
    pub api_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GROQ_API_KEY")]
    pub groq_api_key: String,

    #[arg(long, env = "GROQ_MODEL", default_value = "llama-3.3-70b-versatile")]
    pub groq_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    #[arg(long, env = "JWT_SECRET")]
    pub jwt_secret: String,

    #[arg(long, env = "JWT_EXPIRATION_HOURS", default_value_t = 24)]
    pub jwt_expiration_hours: i64,
}

impl From<Args> for AirCookConfig {
    fn from(args: Args) -> Self {
        AirCookConfig {
            airtable: AirtableConfig {
                api_url: args.airtable.api_url,
                api_key: args.airtable.api_key,
                base_id: args.airtable.base_id,
            },
            llm: LLMConfig {
                groq_api_key: args.llm.groq_api_key,
                groq_model: args.llm.groq_model,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                jwt_expiration_hours: args.auth.jwt_expiration_hours,
            },
        }
    }
}
