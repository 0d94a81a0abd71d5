//! Drives the process-wide client through the environment. Kept in its own
//! test binary: it mutates env vars and owns `SHARED_CLIENT`.

use mongo_connection::constants::{DATABASE_NAME, MONGODB_CA_FILE_KEY, MONGODB_URL_KEY};
use mongo_connection::{ConnectError, ConnectionProvider, SHARED_CLIENT};

fn set_env(key: &str, value: &str) {
    // SAFETY: this binary holds a single test, nothing else touches the environment.
    unsafe { std::env::set_var(key, value) }
}

fn remove_env(key: &str) {
    // SAFETY: see `set_env`.
    unsafe { std::env::remove_var(key) }
}

#[tokio::test]
async fn constructs_from_environment() {
    set_env(MONGODB_CA_FILE_KEY, "");

    set_env(MONGODB_URL_KEY, "");
    let err = ConnectionProvider::with_default_database().await.unwrap_err();
    assert!(err.is_configuration());
    assert!(matches!(err.cause(), ConnectError::MissingUrl(MONGODB_URL_KEY)));
    assert!(!SHARED_CLIENT.is_initialized());

    remove_env(MONGODB_URL_KEY);
    let err = ConnectionProvider::new("orders").await.unwrap_err();
    assert!(err.is_configuration());
    assert!(!SHARED_CLIENT.is_initialized());

    // A blank CA override falls back to the system bundle instead of failing.
    set_env(MONGODB_URL_KEY, "mongodb://localhost:27017/?tls=false");
    let default = ConnectionProvider::with_default_database().await.unwrap();
    assert_eq!(default.database_name(), DATABASE_NAME);
    assert_eq!(default.database().name(), DATABASE_NAME);
    assert!(std::ptr::eq(default.client(), SHARED_CLIENT.get().unwrap()));

    // Once the client exists the environment is no longer consulted.
    set_env(MONGODB_URL_KEY, "");
    let orders = ConnectionProvider::new("orders").await.unwrap();
    assert_eq!(orders.database().name(), "orders");
    assert!(std::ptr::eq(orders.client(), default.client()));
}
