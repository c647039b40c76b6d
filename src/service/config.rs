use std::net::SocketAddr;

const DEFAULT_ENDPOINT: &str = "127.0.0.1:5050";
const DEFAULT_MAX_CONNECTIONS: u32 = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceConfig {
    pub endpoint: SocketAddr,

    /// Records live in PostgreSQL when set, in process memory otherwise.
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl ServiceConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let endpoint = lookup("ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        let endpoint = endpoint
            .parse::<SocketAddr>()
            .map_err(|err| anyhow::anyhow!("ENDPOINT '{endpoint}' is not a socket address: {err}"))?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value.parse::<u32>()?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            endpoint,
            database_url,
            max_connections,
        })
    }
}
