use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::warn;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PROVIDERS_DB_LOCATION: &str = "data/providers.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub providers_db_location: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("PORT is not a valid port number ({}), using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => {
                warn!("PORT not set, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let config = Self {
            port,
            providers_db_location: env::var("PROVIDERS_DB_LOCATION")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("PROVIDERS_DB_LOCATION not set, using default");
                    PathBuf::from(DEFAULT_PROVIDERS_DB_LOCATION)
                }),
        };

        if !config.is_configured() {
            warn!(
                "Providers data not found at {} - searches will return no results until it exists",
                config.providers_db_location.display()
            );
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        self.providers_db_location.is_file()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
