//! Configuration CLI commands

use clap::Subcommand;

use crate::config::{DollaPaths, Settings};
use crate::error::DollaResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current settings and paths
    Show,

    /// Change one setting
    ///
    /// Keys: currency, recent_limit, chart_range, warning_threshold,
    /// on_track_threshold, date_format
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },

    /// Restore default settings
    Reset,
}

/// Handle config commands
pub fn handle_config_command(
    paths: &DollaPaths,
    mut settings: Settings,
    cmd: ConfigCommands,
) -> DollaResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("currency            {}", settings.currency);
            println!("recent_limit        {}", settings.recent_limit);
            println!("chart_range         {}", settings.chart_range);
            println!("warning_threshold   {}", settings.thresholds.warning);
            println!("on_track_threshold  {}", settings.thresholds.on_track);
            println!("date_format         {}", settings.date_format);
        }
        ConfigCommands::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save(paths)?;
            tracing::debug!(%key, %value, "updated setting");
            println!("Set {} = {}", key, value);
        }
        ConfigCommands::Reset => {
            Settings::default().save(paths)?;
            println!("Settings reset to defaults");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists() {
        let temp = TempDir::new().unwrap();
        let paths = DollaPaths::with_base_dir(temp.path().to_path_buf());

        handle_config_command(
            &paths,
            Settings::default(),
            ConfigCommands::Set {
                key: "recent_limit".into(),
                value: "5".into(),
            },
        )
        .unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.recent_limit, 5);
    }

    #[test]
    fn test_set_rejects_bad_value() {
        let temp = TempDir::new().unwrap();
        let paths = DollaPaths::with_base_dir(temp.path().to_path_buf());

        let result = handle_config_command(
            &paths,
            Settings::default(),
            ConfigCommands::Set {
                key: "warning_threshold".into(),
                value: "lots".into(),
            },
        );
        assert!(result.is_err());
        assert!(!paths.settings_file().exists());
    }
}
