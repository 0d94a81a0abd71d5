use clap::Parser;
use mongo_connection::{
    ConnectionProvider, MongoClientFactory, SHARED_CLIENT, config::Settings,
    utils::tracing::init_standard_tracing,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::parse();
    init_standard_tracing(env!("CARGO_CRATE_NAME"), &settings.log_level);

    let factory = MongoClientFactory::from_settings(&settings);
    let provider =
        ConnectionProvider::connect_with(&SHARED_CLIENT, &factory, &settings.database_name).await?;

    provider.ping().await?;
    tracing::info!("Database {} is reachable", provider.database_name());

    Ok(())
}
