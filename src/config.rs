/*
 * Responsibility
 * - 環境変数の読み込み (PORT, CORS 許可 origin, 署名検証キーなど)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // Browser origins allowed to call the API with credentials.
    pub cors_allowed_origins: Vec<String>,

    // Issuer verification key: hex, uncompressed SEC1 P-256 point.
    pub session_verifier_public_key: String,
}

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => DEFAULT_PORT,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string());
        let cors_allowed_origins = parse_origins(&frontend_url)?;

        let session_verifier_public_key = std::env::var("SESSION_VERIFIER_PUBLIC_KEY")
            .map_err(|_| ConfigError::Missing("SESSION_VERIFIER_PUBLIC_KEY"))?
            .trim()
            .to_string();
        if session_verifier_public_key.is_empty() {
            return Err(ConfigError::Missing("SESSION_VERIFIER_PUBLIC_KEY"));
        }

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            session_verifier_public_key,
        })
    }
}

/// Split a comma-separated origin list and normalize each entry to
/// `scheme://host[:port]`, which is what browsers send in `Origin`.
fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let url = Url::parse(s).map_err(|_| ConfigError::Invalid("FRONTEND_URL"))?;
            match url.origin() {
                origin @ url::Origin::Tuple(..) => Ok(origin.ascii_serialization()),
                url::Origin::Opaque(_) => Err(ConfigError::Invalid("FRONTEND_URL")),
            }
        })
        .collect()
}
