pub mod certs;
pub mod config;
pub mod constants;
pub mod database;
pub mod errors;
pub mod utils {
    pub mod tracing;
}

pub use database::{ClientFactory, ConnectionProvider, MongoClientFactory, SHARED_CLIENT, SharedClient};
pub use errors::{ConnectError, Error, Result};
