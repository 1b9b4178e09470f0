use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub regions: RegionConfig,
    pub zip_codes: ZipCodeConfig,
    pub models: ModelConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Postal-code region table source.
/// When no path is set the built-in Belgian table is used.
#[derive(Debug, Clone, Default)]
pub struct RegionConfig {
    pub table_path: Option<PathBuf>,
}

/// Optional ZIP code reference file (`[{zip, city, lat, lng}]`)
#[derive(Debug, Clone, Default)]
pub struct ZipCodeConfig {
    pub reference_path: Option<PathBuf>,
}

/// Model-serving endpoints, one per property type
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Prediction endpoint of the apartment model
    pub apartment_url: String,
    /// Prediction endpoint of the house model
    pub house_url: String,
    /// Timeout applied to every model call
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            regions: RegionConfig::from_env()?,
            zip_codes: ZipCodeConfig::from_env()?,
            models: ModelConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 64 * 1024; // 64KB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Immo Estimator API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Property price estimation for Belgium".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl RegionConfig {
    pub fn from_env() -> Result<Self, String> {
        let table_path = optional_path("REGION_TABLE_PATH");
        Ok(Self { table_path })
    }
}

impl ZipCodeConfig {
    pub fn from_env() -> Result<Self, String> {
        let reference_path = optional_path("ZIP_CODE_REFERENCE_PATH");
        Ok(Self { reference_path })
    }
}

impl ModelConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let apartment_url = env::var("APARTMENT_MODEL_URL")
            .unwrap_or_else(|_| "http://localhost:8501/v1/models/apartments:predict".to_string());

        let house_url = env::var("HOUSE_MODEL_URL")
            .unwrap_or_else(|_| "http://localhost:8501/v1/models/houses:predict".to_string());

        let timeout_secs = env::var("MODEL_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "MODEL_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            apartment_url,
            house_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
