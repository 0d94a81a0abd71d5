use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

use crate::constants::SYSTEM_CA_BUNDLES;

/// System CA bundle, looked up once per process.
pub static CA_BUNDLE: Lazy<Option<PathBuf>> = Lazy::new(|| {
    let bundle = resolve_ca_bundle(None, SYSTEM_CA_BUNDLES);
    match &bundle {
        Some(path) => tracing::debug!("using CA bundle at {}", path.display()),
        None => tracing::debug!("no system CA bundle found, falling back to driver roots"),
    }
    bundle
});

/// An explicit path always wins, otherwise the first candidate that exists.
pub fn resolve_ca_bundle(explicit: Option<PathBuf>, candidates: &[&str]) -> Option<PathBuf> {
    explicit.or_else(|| {
        candidates
            .iter()
            .map(Path::new)
            .find(|path| path.is_file())
            .map(Path::to_path_buf)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");

    #[test]
    fn explicit_path_wins() {
        let explicit = PathBuf::from("/custom/ca.pem");
        assert_eq!(
            resolve_ca_bundle(Some(explicit.clone()), &[MANIFEST]),
            Some(explicit)
        );
    }

    #[test]
    fn skips_missing_candidates() {
        let found = resolve_ca_bundle(None, &["/definitely/not/here.pem", MANIFEST]);
        assert_eq!(found, Some(PathBuf::from(MANIFEST)));
    }

    #[test]
    fn directories_are_not_bundles() {
        assert_eq!(resolve_ca_bundle(None, &[env!("CARGO_MANIFEST_DIR")]), None);
    }
}
