//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings needed to bring up the HTTP server and its database pool.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Upper bound on pooled PostgreSQL connections shared by all requests.
    pub pool_max_size: u32,
}
