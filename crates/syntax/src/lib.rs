//! Go syntax trees for declaration-level tooling.
//!
//! - `ast` holds the arena-allocated node types; a front-end fills one
//!   `AstArena` per file and hands it over wrapped in a [`SyntaxTree`].
//! - `walk` is the visitor layer (`#[derive(WalkAst)]` implements it).
//! - `build` constructs trees programmatically.
//! - `printer` renders type expressions back to compact Go text.

pub mod ast;
pub mod build;
pub mod error;
pub mod printer;
pub mod tree;
pub mod walk;

pub use ast::{Pos, Span};
pub use error::RenderError;
pub use printer::Printer;
pub use tree::SyntaxTree;
