use thiserror::Error;

/// Errors that can occur with finding the config directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Unable to find the config directory for spindle.")]
    Config,
}
