use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bson::doc;
use mongodb::options::{ClientOptions, Tls, TlsOptions};
use mongodb::{Client, Collection, Database};
use tokio::sync::OnceCell;

use crate::certs::CA_BUNDLE;
use crate::config::{Settings, required_url};
use crate::constants::DATABASE_NAME;
use crate::errors::{ConnectError, Error, Result};

/// The one MongoDB client shared by every provider in the process.
pub static SHARED_CLIENT: SharedClient = SharedClient::const_new();

/// Lazily initialised client cell. Concurrent first use runs the factory once;
/// a failed attempt leaves the cell empty so a later call can retry.
#[derive(Debug, Default)]
pub struct SharedClient {
    cell: OnceCell<Client>,
}

impl SharedClient {
    pub const fn const_new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    pub fn get(&self) -> Option<&Client> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    pub async fn get_or_create<F>(&self, factory: &F) -> Result<&Client, ConnectError>
    where
        F: ClientFactory + ?Sized,
    {
        self.cell.get_or_try_init(|| factory.create()).await
    }
}

#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn create(&self) -> Result<Client, ConnectError>;
}

/// Builds a client from an explicit URL, CA bundle and app name.
#[derive(Debug, Clone, Default)]
pub struct MongoClientFactory {
    pub url: Option<String>,
    pub ca_file: Option<PathBuf>,
    pub app_name: Option<String>,
}

impl MongoClientFactory {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ca_file: CA_BUNDLE.clone(),
            app_name: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            url: settings.mongodb_url.clone(),
            ca_file: settings.ca_file().or_else(|| CA_BUNDLE.clone()),
            app_name: settings.app_name().map(str::to_string),
        }
    }

    pub fn with_ca_file(mut self, ca_file: Option<PathBuf>) -> Self {
        self.ca_file = ca_file;
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub async fn options(&self) -> Result<ClientOptions, ConnectError> {
        let url = required_url(self.url.as_deref())?;
        let mut options = ClientOptions::parse(url).await?;

        if let Some(ca_file) = &self.ca_file {
            apply_ca_bundle(&mut options, ca_file);
        }
        if let Some(app_name) = &self.app_name {
            options.app_name = Some(app_name.clone());
        }

        Ok(options)
    }
}

#[async_trait]
impl ClientFactory for MongoClientFactory {
    async fn create(&self) -> Result<Client, ConnectError> {
        let options = self.options().await?;
        tracing::debug!(hosts = ?options.hosts, "creating MongoDB client");
        Ok(Client::with_options(options)?)
    }
}

/// Reads the connection settings from the environment at creation time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvClientFactory;

#[async_trait]
impl ClientFactory for EnvClientFactory {
    async fn create(&self) -> Result<Client, ConnectError> {
        let settings = Settings::from_env()?;
        MongoClientFactory::from_settings(&settings).create().await
    }
}

// An explicit `tls=false` in the URL is respected.
fn apply_ca_bundle(options: &mut ClientOptions, ca_file: &Path) {
    if options.tls.is_none() {
        options.tls = Some(Tls::Enabled(TlsOptions::default()));
    }

    match &mut options.tls {
        Some(Tls::Enabled(tls)) => {
            tls.ca_file_path
                .get_or_insert_with(|| ca_file.to_path_buf());
        }
        _ => tracing::debug!("TLS disabled by connection URL, CA bundle not applied"),
    }
}

/// Handle to one named database on the shared client.
#[derive(Debug, Clone)]
pub struct ConnectionProvider<'a> {
    client: &'a Client,
    database: Database,
    database_name: String,
}

impl ConnectionProvider<'static> {
    pub async fn new(database_name: &str) -> Result<Self> {
        Self::connect_with(&SHARED_CLIENT, &EnvClientFactory, database_name).await
    }

    pub async fn with_default_database() -> Result<Self> {
        Self::new(DATABASE_NAME).await
    }
}

impl<'a> ConnectionProvider<'a> {
    pub async fn connect_with<F>(
        shared: &'a SharedClient,
        factory: &F,
        database_name: &str,
    ) -> Result<Self>
    where
        F: ClientFactory + ?Sized,
    {
        let client = shared
            .get_or_create(factory)
            .await
            .map_err(|e| Error::new(module_path!(), "creating the MongoDB client", e))?;

        let database = client.database(database_name);
        tracing::info!(database = database_name, "MongoDB connection successful.");

        Ok(Self {
            client,
            database,
            database_name: database_name.to_string(),
        })
    }

    pub fn client(&self) -> &'a Client {
        self.client
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Round-trips a `ping` to the server. Construction alone never touches the network.
    pub async fn ping(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| Error::new(module_path!(), "pinging the database", e))?;
        Ok(())
    }
}
