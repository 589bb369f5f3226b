use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
    pub notify: NotifyConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Delivery settings for complaint-creation notifications.
/// Without a webhook URL the notifier logs the rendered message instead.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    pub webhook_url: Option<String>,
    pub timeout_secs: u64,
}

/// Numeric env var with a default. The default is used when the variable
/// is unset; a set but unparsable value is an error, not a silent default.
fn numeric_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}

/// Comma-separated origin list; entries are trimmed and blanks dropped.
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // A missing .env file is fine; containers set real env vars.
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            notify: NotifyConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = numeric_env("PORT", 5000u16)?;
        let cors_allowed_origins = split_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            url,
            max_connections: numeric_env("DB_MAX_CONNECTIONS", 10)?,
            min_connections: numeric_env("DB_MIN_CONNECTIONS", 1)?,
            acquire_timeout_secs: numeric_env("DB_ACQUIRE_TIMEOUT_SECS", 5)?,
            idle_timeout_secs: numeric_env("DB_IDLE_TIMEOUT_SECS", 600)?,
            max_lifetime_secs: numeric_env("DB_MAX_LIFETIME_SECS", 1800)?,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Empty credentials mean "no auth", same as unset.
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());

        Ok(Self {
            username,
            password,
            title: env::var("SWAGGER_TITLE")
                .unwrap_or_else(|_| "Rail Sathi Complaint API".to_string()),
            version: env::var("SWAGGER_VERSION").unwrap_or_else(|_| "1.0.0".to_string()),
            description: env::var("SWAGGER_DESCRIPTION")
                .unwrap_or_else(|_| "API for handling rail complaints".to_string()),
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

impl NotifyConfig {
    pub fn from_env() -> Result<Self, String> {
        let webhook_url = env::var("NOTIFY_WEBHOOK_URL").ok().filter(|s| !s.is_empty());

        Ok(Self {
            webhook_url,
            timeout_secs: numeric_env("NOTIFY_TIMEOUT_SECS", 10)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_address_joins_host_and_port() {
        let app = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_allowed_origins: vec![],
        };
        assert_eq!(app.server_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_split_origins_trims_and_drops_blanks() {
        assert_eq!(
            split_origins("https://a.example, https://b.example ,"),
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(split_origins("*"), vec!["*"]);
        assert!(split_origins("").is_empty());
    }

    #[test]
    fn test_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("docs".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("docs:secret".to_string()));
    }
}
