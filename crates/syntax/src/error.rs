use thiserror::Error;

use crate::ast::Span;

/// Failure to turn a syntax node back into Go text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The node is an error-recovery placeholder (`Type::Bad`, `Expr::Bad`).
    #[error("malformed {kind} at {span:?}")]
    BadNode { kind: &'static str, span: Span },
    /// The node is well formed but the renderer has no text for it.
    #[error("cannot render {kind} at {span:?}")]
    Unsupported { kind: &'static str, span: Span },
}

impl RenderError {
    #[inline]
    pub fn span(&self) -> Span {
        match self {
            RenderError::BadNode { span, .. } | RenderError::Unsupported { span, .. } => *span,
        }
    }
}
