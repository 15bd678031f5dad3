//! Compact single-line Go text for type expressions.
//!
//! Output follows the `go/types` string style rather than `gofmt` layout:
//! struct and interface bodies are written inline with `; ` separators, so
//! every rendered type fits in one line and can be compared as text.
//!
//! ```text
//! map[string][]*pkg.Item
//! struct{X, Y int; Name string `json:"name"`}
//! func(ctx context.Context, args ...string) (int, error)
//! ```

use crate::ast::*;
use crate::error::RenderError;
use crate::tree::SyntaxTree;

type Result<T = ()> = std::result::Result<T, RenderError>;

#[derive(Debug, Clone, Copy)]
pub struct Printer<'t> {
    tree: &'t SyntaxTree,
}

impl<'t> Printer<'t> {
    pub fn new(tree: &'t SyntaxTree) -> Self {
        Self { tree }
    }

    pub fn type_string(&self, id: TypeId) -> Result<String> {
        let mut out = String::new();
        self.ty(&mut out, id)?;
        Ok(out)
    }

    pub fn expr_string(&self, id: ExprId) -> Result<String> {
        let mut out = String::new();
        self.expr(&mut out, id)?;
        Ok(out)
    }

    /// Parameters and results without the leading `func`.
    pub fn signature_string(&self, id: SignatureId) -> Result<String> {
        let mut out = String::new();
        self.signature(&mut out, id)?;
        Ok(out)
    }

    /// Type of a single field group, with `...` for variadic parameters.
    pub fn field_type_string(&self, id: FieldId) -> Result<String> {
        let field = self.tree.arena.fields[id];
        let mut out = String::new();
        if field.ellipsis_pos.is_some() {
            out.push_str("...");
        }
        self.ty(&mut out, field.typ)?;
        Ok(out)
    }

    fn ident(&self, out: &mut String, ident: IdentName) {
        out.push_str(self.tree.name(ident));
    }

    fn ty(&self, out: &mut String, id: TypeId) -> Result {
        let a = &self.tree.arena;
        match a.types[id] {
            Type::Named { pkg, name, args } => {
                if let Some(pkg) = pkg {
                    self.ident(out, pkg);
                    out.push('.');
                }
                self.ident(out, name);
                if !args.is_empty() {
                    out.push('[');
                    for (i, &arg) in a.types_list(args).iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.ty(out, arg)?;
                    }
                    out.push(']');
                }
            }
            Type::Pointer { elem, .. } => {
                out.push('*');
                self.ty(out, elem)?;
            }
            Type::Array { len, elem } => {
                out.push('[');
                match len {
                    ArrayLen::Expr(e) => self.expr(out, e)?,
                    ArrayLen::Ellipsis(_) => out.push_str("..."),
                }
                out.push(']');
                self.ty(out, elem)?;
            }
            Type::Slice { elem } => {
                out.push_str("[]");
                self.ty(out, elem)?;
            }
            Type::Map { key, val } => {
                out.push_str("map[");
                self.ty(out, key)?;
                out.push(']');
                self.ty(out, val)?;
            }
            Type::Chan { dir, elem } => {
                out.push_str(match dir {
                    ChanDir::Both => "chan ",
                    ChanDir::Send => "chan<- ",
                    ChanDir::Recv => "<-chan ",
                });
                self.ty(out, elem)?;
            }
            Type::Struct { fields } => {
                out.push_str("struct{");
                for (i, &f) in a.fields_list(fields.fields).iter().enumerate() {
                    if i > 0 {
                        out.push_str("; ");
                    }
                    self.field(out, f)?;
                }
                out.push('}');
            }
            Type::Interface { elems, .. } => {
                out.push_str("interface{");
                for (i, elem) in a.interface_elems(elems).iter().enumerate() {
                    if i > 0 {
                        out.push_str("; ");
                    }
                    match *elem {
                        InterfaceElem::Method { name, sig, .. } => {
                            self.ident(out, name);
                            self.signature(out, sig)?;
                        }
                        InterfaceElem::Embed(t) => self.ty(out, t)?,
                    }
                }
                out.push('}');
            }
            Type::Func { sig } => {
                out.push_str("func");
                self.signature(out, sig)?;
            }
            Type::Paren { typ } => {
                out.push('(');
                self.ty(out, typ)?;
                out.push(')');
            }
            Type::Bad(span) => return Err(RenderError::BadNode { kind: "type", span }),
        }
        Ok(())
    }

    fn field(&self, out: &mut String, id: FieldId) -> Result {
        let a = &self.tree.arena;
        let field = a.fields[id];
        for (i, &name) in a.ident_names(field.names).iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.ident(out, name);
        }
        if !field.names.is_empty() {
            out.push(' ');
        }
        if field.ellipsis_pos.is_some() {
            out.push_str("...");
        }
        self.ty(out, field.typ)?;
        if let Some(tag) = field.tag {
            out.push(' ');
            out.push_str(self.tree.interner.resolve(tag.value));
        }
        Ok(())
    }

    fn field_list(&self, out: &mut String, list: FieldList) -> Result {
        out.push('(');
        for (i, &f) in self.tree.arena.fields_list(list.fields).iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.field(out, f)?;
        }
        out.push(')');
        Ok(())
    }

    fn signature(&self, out: &mut String, id: SignatureId) -> Result {
        let a = &self.tree.arena;
        let sig = a.signatures[id];
        self.field_list(out, sig.params)?;
        match sig.results {
            None => {}
            Some(Results::Type(t)) => {
                out.push(' ');
                self.ty(out, t)?;
            }
            Some(Results::Params(list)) => {
                let fields = a.fields_list(list.fields);
                match fields {
                    [] => {}
                    [single] if a.fields[*single].names.is_empty() => {
                        out.push(' ');
                        self.ty(out, a.fields[*single].typ)?;
                    }
                    _ => {
                        out.push(' ');
                        self.field_list(out, list)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn expr(&self, out: &mut String, id: ExprId) -> Result {
        let a = &self.tree.arena;
        match a.exprs[id] {
            Expr::Ident(name) => self.ident(out, name),
            Expr::BasicLit(lit) => out.push_str(self.tree.interner.resolve(lit.value)),
            Expr::Paren { expr, .. } => {
                out.push('(');
                self.expr(out, expr)?;
                out.push(')');
            }
            Expr::Selector { expr, sel } => {
                self.expr(out, expr)?;
                out.push('.');
                self.ident(out, sel);
            }
            Expr::Index { base, index } => {
                self.expr(out, base)?;
                out.push('[');
                self.expr(out, index)?;
                out.push(']');
            }
            Expr::Call {
                callee,
                args,
                ellipsis,
            } => {
                self.expr(out, callee)?;
                out.push('(');
                for (i, &arg) in a.exprs_list(args).iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.expr(out, arg)?;
                }
                if ellipsis.is_some() {
                    out.push_str("...");
                }
                out.push(')');
            }
            Expr::Unary { op, expr, .. } => {
                out.push_str(op.as_str());
                self.expr(out, expr)?;
            }
            Expr::Binary {
                left, op, right, ..
            } => {
                self.expr(out, left)?;
                out.push(' ');
                out.push_str(op.as_str());
                out.push(' ');
                self.expr(out, right)?;
            }
            Expr::FuncLit { sig, .. } => {
                out.push_str("func");
                self.signature(out, sig)?;
                out.push_str(" {...}");
            }
            Expr::CompositeLit { typ, lit } => {
                if let Some(typ) = typ {
                    self.ty(out, typ)?;
                }
                self.literal_value(out, lit)?;
            }
            Expr::Bad(span) => return Err(RenderError::BadNode { kind: "expression", span }),
        }
        Ok(())
    }

    /// `{k: v, ...}`; nested literals with elided types print as bare braces.
    fn literal_value(&self, out: &mut String, lit: LiteralValue) -> Result {
        out.push('{');
        for (i, elem) in self.tree.arena.keyed_elems_list(lit.elements).iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            match elem.key {
                None => {}
                Some(Key::FieldName(name)) => self.ident(out, name),
                Some(Key::Expr(e)) => self.expr(out, e)?,
                Some(Key::Literal(l)) => self.literal_value(out, l)?,
            }
            if elem.key.is_some() {
                out.push_str(": ");
            }
            match elem.value {
                Element::Expr(e) => self.expr(out, e)?,
                Element::Literal(l) => self.literal_value(out, l)?,
            }
        }
        out.push('}');
        Ok(())
    }
}
