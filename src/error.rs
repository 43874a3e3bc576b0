use miette::Diagnostic;
use thiserror::Error;

/// Main error type for figslice operations
#[derive(Error, Diagnostic, Debug)]
pub enum FigsliceError {
    #[error("IO error: {0}")]
    #[diagnostic(code(figslice::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(figslice::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// A required input (token, file key) was not supplied.
    #[error("{message}")]
    #[diagnostic(code(figslice::usage))]
    Usage {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(figslice::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(figslice::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid pattern /{pattern}/: {message}")]
    #[diagnostic(code(figslice::pattern))]
    Pattern { pattern: String, message: String },

    #[error("Discovery error: {message}")]
    #[diagnostic(code(figslice::discover))]
    Discovery {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Figma API error {status}: {message}")]
    #[diagnostic(code(figslice::api))]
    Api { status: u16, message: String },

    /// The render endpoint answered with an `err` field.
    #[error("Render failed at {scale}x: {message}")]
    #[diagnostic(code(figslice::render))]
    Render { scale: String, message: String },

    #[error("Download failed {status}: {message}")]
    #[diagnostic(code(figslice::download))]
    Download { status: u16, message: String },

    #[error("HTTP error: {0}")]
    #[diagnostic(code(figslice::http))]
    Http(#[from] reqwest::Error),
}

impl FigsliceError {
    /// True when the usage text should accompany the error.
    pub fn is_usage(&self) -> bool {
        matches!(self, FigsliceError::Usage { .. })
    }
}

pub type Result<T> = std::result::Result<T, FigsliceError>;
