//! Declared entities recorded per file.
//!
//! A [`TypeNode`] is one declaration occurrence (named or anonymous) keyed by
//! the position of the syntax node it was built from. Its [`Shape`] is the
//! closed set of forms the collector recognises. Type references inside a
//! shape are kept as rendered text; nothing here is resolved.

use go125_syntax::ast::{Block, ChanDir};
use go125_syntax::Pos;

use crate::file::FileId;

/// Handle to a declaration in a file's type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub file: FileId,
    pub pos: Pos,
}

/// Handle to a declaration in a file's function table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FuncRef {
    pub file: FileId,
    pub pos: Pos,
}

/// How a type came to be declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefKind {
    /// `type T U`: a new defined type.
    Define,
    /// `type T = U`: another name for `U`.
    Alias,
    /// Anonymous literal or `var` declaration; no type name is introduced.
    Undeclared,
}

/// Parameter, result or receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncField {
    pub name: Option<String>,
    /// Rendered type, `...T` for a variadic parameter.
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    /// `None` for embedded fields.
    pub name: Option<String>,
    pub type_name: String,
    /// Tag value: quotes removed, escapes of interpreted literals decoded.
    pub tag: Option<String>,
    pub doc: Option<String>,
}

impl StructField {
    #[inline]
    pub fn is_embedded(&self) -> bool {
        self.name.is_none()
    }
}

/// A function bound to the type its receiver names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub doc: Option<String>,
    pub func: FuncRef,
    pub receiver: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncShape {
    /// `Some` only for named function types (`type Handler func()`).
    pub def: Option<DefKind>,
    /// Receiver as written; the binder resolves it.
    pub recv: Option<FuncField>,
    pub params: Vec<FuncField>,
    pub results: Vec<FuncField>,
    pub variadic: bool,
    pub body: Option<Block>,
    pub(crate) bound_to: Option<TypeRef>,
}

impl FuncShape {
    /// Type this method was bound to, once the binder has run.
    #[inline]
    pub fn binding(&self) -> Option<TypeRef> {
        self.bound_to
    }

    #[inline]
    pub fn is_method(&self) -> bool {
        self.recv.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructShape {
    pub def: DefKind,
    pub fields: Vec<StructField>,
}

impl StructShape {
    pub fn field(&self, name: &str) -> Option<&StructField> {
        self.fields.iter().find(|f| f.name.as_deref() == Some(name))
    }
}

/// Declaration whose right-hand side is another (possibly qualified) name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasShape {
    pub def: DefKind,
    /// Full rendered target, e.g. `u.Widget` or `List[int]`.
    pub target: String,
    /// Qualifier of the target, `u` in `u.Widget`.
    pub package: Option<String>,
    /// Unqualified target name, `Widget` in `u.Widget`.
    pub base: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicShape {
    pub def: DefKind,
    /// Predeclared type name, e.g. `int`.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChanShape {
    pub def: DefKind,
    pub dir: ChanDir,
    pub elem: String,
}

/// Array or slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListShape {
    pub def: DefKind,
    /// Rendered length expression; `None` for slices.
    pub len: Option<String>,
    pub elem: String,
}

impl ListShape {
    #[inline]
    pub fn is_slice(&self) -> bool {
        self.len.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapShape {
    pub def: DefKind,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceMethod {
    pub name: String,
    pub doc: Option<String>,
    pub params: Vec<FuncField>,
    pub results: Vec<FuncField>,
    pub variadic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceShape {
    pub def: DefKind,
    pub methods: Vec<InterfaceMethod>,
    /// Rendered embedded interfaces, e.g. `io.Reader`.
    pub embeds: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Func(FuncShape),
    Struct(StructShape),
    Alias(AliasShape),
    Basic(BasicShape),
    Chan(ChanShape),
    List(ListShape),
    Map(MapShape),
    Interface(InterfaceShape),
}

impl Shape {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Shape::Func(_) => "func",
            Shape::Struct(_) => "struct",
            Shape::Alias(_) => "alias",
            Shape::Basic(_) => "basic",
            Shape::Chan(_) => "chan",
            Shape::List(_) => "list",
            Shape::Map(_) => "map",
            Shape::Interface(_) => "interface",
        }
    }

    /// Definition kind; `None` for function declarations and literals.
    pub fn def_kind(&self) -> Option<DefKind> {
        match self {
            Shape::Func(f) => f.def,
            Shape::Struct(s) => Some(s.def),
            Shape::Alias(s) => Some(s.def),
            Shape::Basic(s) => Some(s.def),
            Shape::Chan(s) => Some(s.def),
            Shape::List(s) => Some(s.def),
            Shape::Map(s) => Some(s.def),
            Shape::Interface(s) => Some(s.def),
        }
    }
}

/// One collected declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNode {
    /// `None` for anonymous literals.
    pub name: Option<String>,
    pub doc: Option<String>,
    pub file: FileId,
    pub pos: Pos,
    /// Pointer indirections stripped from the declared right-hand side,
    /// 1 for `type P *T`.
    pub indirection: u32,
    /// Declared inside a function body. Local types are kept in the table but
    /// never resolve by name, since only package-level types are in scope.
    pub local: bool,
    pub shape: Shape,
    pub(crate) methods: Vec<Method>,
}

impl TypeNode {
    pub(crate) fn new(
        name: Option<String>,
        doc: Option<String>,
        file: FileId,
        pos: Pos,
        shape: Shape,
    ) -> Self {
        Self {
            name,
            doc,
            file,
            pos,
            indirection: 0,
            local: false,
            shape,
            methods: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Methods bound by the binder, in binding order.
    #[inline]
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }

    #[inline]
    pub fn type_ref(&self) -> TypeRef {
        TypeRef {
            file: self.file,
            pos: self.pos,
        }
    }

    #[inline]
    pub fn func_ref(&self) -> FuncRef {
        FuncRef {
            file: self.file,
            pos: self.pos,
        }
    }

    pub fn as_func(&self) -> Option<&FuncShape> {
        match &self.shape {
            Shape::Func(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructShape> {
        match &self.shape {
            Shape::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_alias(&self) -> Option<&AliasShape> {
        match &self.shape {
            Shape::Alias(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceShape> {
        match &self.shape {
            Shape::Interface(i) => Some(i),
            _ => None,
        }
    }

    /// Points every file handle inside this node at `file`.
    pub(crate) fn rehome(&mut self, file: FileId) {
        self.file = file;
        for m in &mut self.methods {
            m.func.file = file;
            m.receiver.file = file;
        }
        if let Shape::Func(f) = &mut self.shape {
            if let Some(target) = &mut f.bound_to {
                target.file = file;
            }
        }
    }

    pub(crate) fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }
}
