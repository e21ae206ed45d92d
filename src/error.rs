/// Errors that can occur when rendering a logo.
#[derive(thiserror::Error, Debug)]
pub enum LogoError {
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    #[error("font '{0}' is not available or failed to load")]
    Font(String),

    #[error("unknown render mode '{0}'")]
    InvalidMode(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to convert text '{0}' to ASCII art")]
    Conversion(String),

    #[error("invalid configuration file: {0}")]
    ConfigFile(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
