//! Errors for a generator run.

use std::io;
use std::path::PathBuf;

use preach_render::{CssError, PaletteError, RenderError};
use thiserror::Error;

/// Error type for [`generate`](crate::generate::generate).
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The palette could not be loaded or has malformed themes.
    #[error(transparent)]
    Palette(#[from] PaletteError),

    /// A template failed to render.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The rendered stylesheet could not be formatted or minified.
    #[error(transparent)]
    Css(#[from] CssError),

    /// An output file or directory could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// A filesystem failure while writing outputs.
///
/// Files written before the failure are left in place.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create directory {}: {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
