/// Environment variable holding the full MongoDB connection URL.
pub const MONGODB_URL_KEY: &str = "MONGODB_URL";

/// Database selected when the caller does not name one.
pub const DATABASE_NAME: &str = "app_data";

/// Optional override for the trusted CA bundle.
pub const MONGODB_CA_FILE_KEY: &str = "MONGODB_CA_FILE";

/// Optional application name reported to the server.
pub const MONGODB_APP_NAME_KEY: &str = "MONGODB_APP_NAME";

/// Well-known CA bundle locations, probed in order.
pub const SYSTEM_CA_BUNDLES: &[&str] = &[
    "/etc/ssl/certs/ca-certificates.crt",
    "/etc/pki/tls/certs/ca-bundle.crt",
    "/etc/ssl/ca-bundle.pem",
    "/etc/pki/tls/cacert.pem",
    "/etc/ssl/cert.pem",
];
