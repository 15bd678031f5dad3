//! Seam to the rendering back-end.

use go125_syntax::ast::{ExprId, TypeId};
use go125_syntax::{Printer, RenderError, SyntaxTree};

/// Node that can be turned back into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Type(TypeId),
    Expr(ExprId),
}

impl From<TypeId> for Node {
    fn from(id: TypeId) -> Self {
        Node::Type(id)
    }
}

impl From<ExprId> for Node {
    fn from(id: ExprId) -> Self {
        Node::Expr(id)
    }
}

pub trait Render {
    fn render(&self, tree: &SyntaxTree, node: Node) -> Result<String, RenderError>;
}

/// Default back-end: compact single-line Go text.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoPrinter;

impl Render for GoPrinter {
    fn render(&self, tree: &SyntaxTree, node: Node) -> Result<String, RenderError> {
        let printer = Printer::new(tree);
        match node {
            Node::Type(id) => printer.type_string(id),
            Node::Expr(id) => printer.expr_string(id),
        }
    }
}

/// Renders `node`, substituting `fallback` on failure when one is given.
pub fn try_render<R: Render + ?Sized>(
    renderer: &R,
    tree: &SyntaxTree,
    node: Node,
    fallback: Option<&str>,
) -> Result<String, RenderError> {
    match (renderer.render(tree, node), fallback) {
        (Ok(text), _) => Ok(text),
        (Err(err), Some(fallback)) => {
            tracing::trace!(%err, fallback, "render failed, using fallback");
            Ok(fallback.to_owned())
        }
        (Err(err), None) => Err(err),
    }
}
