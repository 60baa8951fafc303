use anyhow::{Context, Result};
use forge_ledger::{CpParser, PANEL_DEFAULT_PATTERNS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::session::write_atomic;

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Panel toggles and the user-editable CP pattern list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    pub enabled: bool,
    /// Scan parsed text for a CP balance
    pub auto_track_cp: bool,
    /// Kept for settings compatibility; nothing inserts the sheet automatically
    pub auto_insert_sheet: bool,
    /// Regex sources tried in order, each with one capture group
    pub cp_patterns: Vec<String>,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            auto_track_cp: true,
            auto_insert_sheet: true,
            cp_patterns: default_patterns(),
        }
    }
}

impl PanelSettings {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILE_NAME)
    }

    /// Read `<data-dir>/settings.toml`; missing or malformed settings are the defaults.
    pub async fn load(data_dir: &Path) -> Self {
        let path = Self::path_in(data_dir);
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(err) => {
                log::warn!("Failed to read settings {}: {err}", path.display());
                return Self::default();
            }
        };
        match toml::from_str(&raw) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Invalid settings {}, using defaults: {err}", path.display());
                Self::default()
            }
        }
    }

    pub async fn save(&self, data_dir: &Path) -> Result<()> {
        fs::create_dir_all(data_dir)
            .await
            .with_context(|| format!("create data dir {}", data_dir.display()))?;
        let raw = toml::to_string_pretty(self).context("serialize settings")?;
        write_atomic(&Self::path_in(data_dir), raw.as_bytes()).await
    }

    /// Parser over the configured patterns. Invalid patterns are dropped with a warning.
    pub fn parser(&self) -> CpParser {
        CpParser::from_patterns_lenient(&self.cp_patterns).0
    }

    /// Whether text should be scanned for CP at all.
    pub fn tracks_cp(&self) -> bool {
        self.enabled && self.auto_track_cp
    }

    pub fn reset_patterns(&mut self) {
        self.cp_patterns = default_patterns();
    }
}

fn default_patterns() -> Vec<String> {
    PANEL_DEFAULT_PATTERNS
        .iter()
        .map(|pattern| pattern.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn missing_settings_are_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = PanelSettings::load(dir.path()).await;
        assert_eq!(settings, PanelSettings::default());
        assert_eq!(settings.cp_patterns.len(), 5);
    }

    #[tokio::test]
    async fn partial_settings_fill_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(PanelSettings::path_in(dir.path()), "auto_track_cp = false\n").unwrap();
        let settings = PanelSettings::load(dir.path()).await;
        assert!(!settings.auto_track_cp);
        assert!(settings.enabled);
        assert_eq!(settings.cp_patterns, default_patterns());
        assert!(!settings.tracks_cp());
    }

    #[tokio::test]
    async fn malformed_settings_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(PanelSettings::path_in(dir.path()), "enabled = \"maybe\"").unwrap();
        assert_eq!(
            PanelSettings::load(dir.path()).await,
            PanelSettings::default()
        );
    }

    #[tokio::test]
    async fn save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = PanelSettings::default();
        settings.auto_insert_sheet = false;
        settings.cp_patterns.push(r"balance\s*(\d+)".to_string());
        settings.save(dir.path()).await.unwrap();
        assert_eq!(PanelSettings::load(dir.path()).await, settings);
    }

    #[test]
    fn parser_skips_invalid_patterns() {
        let settings = PanelSettings {
            cp_patterns: vec!["(unclosed".to_string(), r"balance\s*(\d+)".to_string()],
            ..PanelSettings::default()
        };
        let parser = settings.parser();
        assert_eq!(parser.len(), 1);
        assert_eq!(parser.parse("Balance 75"), Some(75));
    }
}
