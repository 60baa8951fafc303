use forge_ledger::DEFAULT_OFFER_SIZE;
use std::env;
use std::path::{Path, PathBuf};

/// Catalog path override
pub const PERKS_PATH_ENV: &str = "FORGE_PERKS_PATH";
/// Default offer size override
pub const OFFER_SIZE_ENV: &str = "FORGE_OFFER_SIZE";

pub const MAX_OFFER_SIZE: usize = 32;

const PERKS_FILE_NAME: &str = "perks.json";

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Catalog files to try, in order
    pub perks_candidates: Vec<PathBuf>,
    /// Offer size used when a tool call omits `count`
    pub offer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            perks_candidates: vec![PathBuf::from(PERKS_FILE_NAME)],
            offer_size: DEFAULT_OFFER_SIZE,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let perks_candidates = match env_path_override(PERKS_PATH_ENV) {
            Some(path) => vec![path],
            None => default_perks_candidates(),
        };
        let offer_size = parse_offer_size(env::var(OFFER_SIZE_ENV).ok().as_deref());
        Self {
            perks_candidates,
            offer_size,
        }
    }
}

fn env_path_override(key: &str) -> Option<PathBuf> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

/// `./perks.json`, then `perks.json` one level above the executable's directory.
fn default_perks_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(PERKS_FILE_NAME)];
    if let Some(path) = env::current_exe()
        .ok()
        .as_deref()
        .and_then(perks_path_beside_install)
    {
        if !candidates.contains(&path) {
            candidates.push(path);
        }
    }
    candidates
}

fn perks_path_beside_install(exe: &Path) -> Option<PathBuf> {
    Some(exe.parent()?.parent()?.join(PERKS_FILE_NAME))
}

pub(crate) fn parse_offer_size(raw: Option<&str>) -> usize {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DEFAULT_OFFER_SIZE;
    };
    match raw.parse::<usize>() {
        Ok(size) => size.clamp(1, MAX_OFFER_SIZE),
        Err(err) => {
            log::warn!("Ignoring {OFFER_SIZE_ENV}={raw:?}: {err}");
            DEFAULT_OFFER_SIZE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ENV_MUTEX;

    #[test]
    fn offer_size_parsing() {
        assert_eq!(parse_offer_size(None), DEFAULT_OFFER_SIZE);
        assert_eq!(parse_offer_size(Some("  ")), DEFAULT_OFFER_SIZE);
        assert_eq!(parse_offer_size(Some("6")), 6);
        assert_eq!(parse_offer_size(Some("0")), 1);
        assert_eq!(parse_offer_size(Some("1000")), MAX_OFFER_SIZE);
        assert_eq!(parse_offer_size(Some("lots")), DEFAULT_OFFER_SIZE);
    }

    #[test]
    fn install_relative_catalog_path() {
        assert_eq!(
            perks_path_beside_install(Path::new("/opt/forge/bin/forge-mcp")),
            Some(PathBuf::from("/opt/forge/perks.json"))
        );
        assert_eq!(perks_path_beside_install(Path::new("forge-mcp")), None);
    }

    #[test]
    fn env_override_replaces_default_candidates() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let prev_path = env::var(PERKS_PATH_ENV).ok();
        let prev_size = env::var(OFFER_SIZE_ENV).ok();

        env::set_var(PERKS_PATH_ENV, " /tmp/custom-perks.json ");
        env::set_var(OFFER_SIZE_ENV, "3");
        let config = ServerConfig::from_env();
        assert_eq!(
            config.perks_candidates,
            vec![PathBuf::from("/tmp/custom-perks.json")]
        );
        assert_eq!(config.offer_size, 3);

        env::remove_var(PERKS_PATH_ENV);
        env::remove_var(OFFER_SIZE_ENV);
        let config = ServerConfig::from_env();
        assert_eq!(config.perks_candidates[0], PathBuf::from("perks.json"));
        assert_eq!(config.offer_size, DEFAULT_OFFER_SIZE);

        match prev_path {
            Some(v) => env::set_var(PERKS_PATH_ENV, v),
            None => env::remove_var(PERKS_PATH_ENV),
        }
        match prev_size {
            Some(v) => env::set_var(OFFER_SIZE_ENV, v),
            None => env::remove_var(OFFER_SIZE_ENV),
        }
    }
}
