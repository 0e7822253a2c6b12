//! Handles the configuration of the REPL.
//!
//! this module is responsible for parsing the Spindle.toml file and merging it with environment
//! variables and cli arguments.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use std::{path::PathBuf, str::FromStr};

pub static DEFAULT_CONFIG: &str = include_str!("../Spindle.toml");

#[derive(Clone, Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// Settings for the interactive session
    #[serde(default)]
    pub repl: ReplSettings,
    /// Settings for the logger
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from the config file, environment variables, and CLI arguments.
    ///
    /// The environment variables are prefixed with `SPINDLE_`, and use `__` to separate the
    /// section from the key (e.g. `SPINDLE_REPL__PROMPT`).
    ///
    /// # Arguments
    ///
    /// * `config` - path to the config file, `~` is expanded.
    /// * `log_level` - overrides the configured log level.
    /// * `prompt` - overrides the configured prompt.
    ///
    /// # Errors
    ///
    /// This function will return an error if the config file is not found or if the config file is
    /// invalid.
    #[inline]
    pub fn init(
        config: PathBuf,
        log_level: Option<log::LevelFilter>,
        prompt: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config: PathBuf = shellexpand::tilde(&config.to_string_lossy())
            .into_owned()
            .into();

        let s = Config::builder()
            .add_source(File::from(config))
            .add_source(
                Environment::with_prefix("SPINDLE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut settings: Self = s.try_deserialize()?;

        if let Some(log_level) = log_level {
            settings.logging.level = log_level;
        }

        if let Some(prompt) = prompt {
            settings.repl.prompt = prompt;
        }

        Ok(settings)
    }

    /// Get the (default) path to the config file.
    /// If the config file does not exist at this path, it will be created with the default config.
    ///
    /// See [`crate::get_config_dir`] for more information about where this default path is located.
    ///
    /// # Errors
    ///
    /// This function will return an error if the system config directory (e.g., `~/.config` on linux) could not be found, or if the config file was missing and could not be created.
    #[inline]
    pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
        match crate::get_config_dir() {
            Ok(config_dir) => {
                // if the config directory does not exist, create it
                if !config_dir.exists() {
                    std::fs::create_dir_all(&config_dir)?;
                }
                let config_file = config_dir.join("Spindle.toml");

                if !config_file.exists() {
                    std::fs::write(&config_file, DEFAULT_CONFIG)?;
                }

                Ok(config_file)
            }
            Err(e) => {
                eprintln!("Error: {e}");
                Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Unable to find the config directory for spindle.",
                ))
            }
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ReplSettings {
    /// Printed before every line of input.
    /// Default is "> ".
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Printed once when the session starts.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Show the greeting and prompt even when stdin isn't a terminal.
    /// Default is false, so piped scripts produce only command output.
    #[serde(default)]
    pub force_interactive: bool,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_greeting() -> String {
    "Welcome to your music collection!".to_string()
}

impl Default for ReplSettings {
    #[inline]
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            greeting: default_greeting(),
            force_interactive: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LoggingSettings {
    /// What level of logging to use.
    /// Default is "warn".
    #[serde(default = "default_log_level")]
    #[serde(deserialize_with = "de_log_level")]
    pub level: log::LevelFilter,
}

fn de_log_level<'de, D>(deserializer: D) -> Result<log::LevelFilter, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(log::LevelFilter::from_str(&s).unwrap_or_else(|_| default_log_level()))
}

const fn default_log_level() -> log::LevelFilter {
    log::LevelFilter::Warn
}

impl Default for LoggingSettings {
    #[inline]
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("off", log::LevelFilter::Off)]
    #[case("debug", log::LevelFilter::Debug)]
    #[case("TRACE", log::LevelFilter::Trace)]
    #[case("not a level", log::LevelFilter::Warn)]
    fn test_de_log_level(#[case] input: &str, #[case] expected: log::LevelFilter) {
        let deserializer: serde::de::value::StrDeserializer<'_, serde::de::value::Error> =
            serde::de::IntoDeserializer::into_deserializer(input);
        let result = de_log_level(deserializer);
        assert_eq!(result, Ok(expected));
    }

    #[test]
    fn test_init_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[repl]
prompt = "spindle> "
greeting = "hello"
force_interactive = true

[logging]
level = "debug"
            "#,
        )
        .unwrap();

        let expected = Settings {
            repl: ReplSettings {
                prompt: "spindle> ".into(),
                greeting: "hello".into(),
                force_interactive: true,
            },
            logging: LoggingSettings {
                level: log::LevelFilter::Debug,
            },
        };

        let settings = Settings::init(config_path, None, None).unwrap();

        assert_eq!(settings, expected);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[repl]
greeting = "hi"
            "#,
        )
        .unwrap();

        let settings = Settings::init(config_path, None, None).unwrap();

        assert_eq!(
            settings,
            Settings {
                repl: ReplSettings {
                    greeting: "hi".into(),
                    ..Default::default()
                },
                logging: LoggingSettings::default(),
            }
        );
    }

    #[test]
    fn test_cli_overrides_win() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, DEFAULT_CONFIG).unwrap();

        let settings = Settings::init(
            config_path,
            Some(log::LevelFilter::Trace),
            Some("$ ".to_string()),
        )
        .unwrap();

        assert_eq!(settings.logging.level, log::LevelFilter::Trace);
        assert_eq!(settings.repl.prompt, "$ ");
        assert_eq!(settings.repl.greeting, default_greeting());
    }

    #[test]
    fn test_default_config_works() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, DEFAULT_CONFIG).unwrap();

        let settings = Settings::init(config_path, None, None);

        assert!(settings.is_ok(), "Error: {:?}", settings.err());
        assert_eq!(settings.unwrap(), Settings::default());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("does_not_exist.toml");

        assert!(Settings::init(config_path, None, None).is_err());
    }
}
