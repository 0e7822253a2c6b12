use std::time::Duration;

use errors::DirectoryError;

pub mod config;
pub mod errors;
pub mod logger;

/// Get the location of the config directory.
///
/// On Linux this is `$XDG_CONFIG_HOME/spindle` or `~/.config/spindle`.
///
/// # Errors
///
/// This function will return an error if the home directory of the current user can't be
/// determined.
#[inline]
pub fn get_config_dir() -> Result<std::path::PathBuf, DirectoryError> {
    directories::ProjectDirs::from("", "", "spindle")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(DirectoryError::Config)
}

/// Format a duration as `seconds.milliseconds`, zero padded so log lines line up.
#[must_use]
pub fn format_duration(duration: &Duration) -> String {
    format!("{:>4}.{:03}", duration.as_secs(), duration.subsec_millis())
}
