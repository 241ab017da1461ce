//! Error types for palette loading, stylesheet rendering and CSS processing.
//!
//! Each stage of the pipeline has its own error type so callers can tell a
//! malformed palette apart from a template failure or unparseable CSS:
//!
//! - [`PaletteError`]: invalid colors, unparseable YAML, malformed themes
//! - [`RenderError`]: template or serialization failures
//! - [`CssError`]: CSS text that the formatter or minifier could not read

use std::fmt;
use std::path::PathBuf;

/// Error returned when a palette cannot be loaded or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// A color value is not a valid hex color.
    InvalidColor {
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        message: String,
    },

    /// YAML parse error, or a document that is not a mapping.
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },

    /// The palette file could not be read.
    Load {
        /// The file that failed to load.
        path: PathBuf,
        /// Error message from the filesystem.
        message: String,
    },

    /// A themed palette is missing a theme, or a theme root is not a group.
    InvalidTheme {
        /// Theme name (`light` or `dark`).
        theme: String,
        /// Description of what was wrong.
        message: String,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::InvalidColor { value, message } => {
                write!(f, "invalid color '{}': {}", value, message)
            }
            PaletteError::Parse { path, message } => {
                if let Some(p) = path {
                    write!(f, "failed to parse palette {}: {}", p.display(), message)
                } else {
                    write!(f, "failed to parse palette: {}", message)
                }
            }
            PaletteError::Load { path, message } => {
                write!(f, "failed to load palette {}: {}", path.display(), message)
            }
            PaletteError::InvalidTheme { theme, message } => {
                write!(f, "invalid '{}' theme: {}", theme, message)
            }
        }
    }
}

impl std::error::Error for PaletteError {}

/// Error type for template rendering operations.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error or evaluation failure.
    TemplateError(String),

    /// Data serialization error.
    SerializationError(String),

    /// A variable prefix that would not form a valid CSS custom property name.
    InvalidPrefix(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            RenderError::InvalidPrefix(prefix) => write!(
                f,
                "invalid variable prefix '{}': only ASCII letters, digits, '-' and '_' are allowed",
                prefix
            ),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            _ => RenderError::TemplateError(err.to_string()),
        }
    }
}

/// Error returned when CSS text cannot be parsed for formatting or minifying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssError {
    /// 1-based line of the failure.
    pub line: u32,
    /// 1-based column of the failure.
    pub column: u32,
    /// Parser message.
    pub message: String,
}

impl fmt::Display for CssError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CSS parse error at {}:{}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for CssError {}

impl<'i> From<cssparser::ParseError<'i, ()>> for CssError {
    fn from(err: cssparser::ParseError<'i, ()>) -> Self {
        CssError {
            line: err.location.line + 1,
            column: err.location.column,
            message: format!("{:?}", err.kind),
        }
    }
}
