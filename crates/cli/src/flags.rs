use clap::ValueEnum;

use crate::settings::PanelSettings;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum SettingKey {
    Enabled,
    AutoTrackCp,
    AutoInsertSheet,
}

impl SettingKey {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            SettingKey::Enabled => "enabled",
            SettingKey::AutoTrackCp => "auto_track_cp",
            SettingKey::AutoInsertSheet => "auto_insert_sheet",
        }
    }

    pub(crate) fn apply(self, settings: &mut PanelSettings, value: bool) {
        match self {
            SettingKey::Enabled => settings.enabled = value,
            SettingKey::AutoTrackCp => settings.auto_track_cp = value,
            SettingKey::AutoInsertSheet => settings.auto_insert_sheet = value,
        }
    }
}
