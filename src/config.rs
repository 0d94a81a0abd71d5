use std::path::PathBuf;

use clap::Parser;

use crate::constants::{DATABASE_NAME, MONGODB_APP_NAME_KEY, MONGODB_CA_FILE_KEY, MONGODB_URL_KEY};
use crate::errors::ConnectError;

#[derive(Debug, Clone, Parser)]
#[clap(name = "mongo-connection")]
pub struct Settings {
    #[clap(long, env = MONGODB_URL_KEY)]
    pub mongodb_url: Option<String>,

    #[clap(long, env, default_value = DATABASE_NAME)]
    pub database_name: String,

    #[clap(long, env = MONGODB_CA_FILE_KEY)]
    pub mongodb_ca_file: Option<String>,

    #[clap(long, env = MONGODB_APP_NAME_KEY)]
    pub mongodb_app_name: Option<String>,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,
}

impl Settings {
    /// Reads settings from `.env` and the process environment only; command
    /// line arguments are ignored so library callers never trip over argv.
    pub fn from_env() -> Result<Self, ConnectError> {
        dotenvy::dotenv().ok();
        Ok(Self::try_parse_from([env!("CARGO_PKG_NAME")])?)
    }

    pub fn connection_url(&self) -> Result<&str, ConnectError> {
        required_url(self.mongodb_url.as_deref())
    }

    /// Blank values count as unset, same as the connection URL.
    pub fn ca_file(&self) -> Option<PathBuf> {
        non_blank(self.mongodb_ca_file.as_deref()).map(PathBuf::from)
    }

    pub fn app_name(&self) -> Option<&str> {
        non_blank(self.mongodb_app_name.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

pub(crate) fn required_url(url: Option<&str>) -> Result<&str, ConnectError> {
    non_blank(url).ok_or(ConnectError::MissingUrl(MONGODB_URL_KEY))
}
