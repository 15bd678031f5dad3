use go125_syntax::{Pos, RenderError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The rendering back-end failed and no fallback text was configured.
    #[error("cannot render {item} at {pos} in `{file}`")]
    Render {
        file: String,
        item: &'static str,
        pos: Pos,
        #[source]
        source: RenderError,
    },
    #[error("file `{file}` belongs to package `{found}`, not `{expected}`")]
    PackageMismatch {
        file: String,
        expected: String,
        found: String,
    },
    #[error("package path `{0}` is already part of the module")]
    DuplicatePackage(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
