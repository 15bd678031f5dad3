//! # Go Declaration-Level Syntax Tree
//!
//! Arena-allocated syntax nodes for Go source files, shaped for tools that
//! read declarations rather than execute code.
//!
//! ## Architecture
//!
//! - **Nodes**: every node lives in a typed arena (`SpannedArena<T>`) and is
//!   addressed by a typed `Id<T>`
//! - **Lists**: variable-length children live in shared buffers and are
//!   addressed by `ListRef<T>`
//! - **Spans**: kept in side tables next to the node data; `Span::pos` gives the
//!   node's identity inside its file
//! - **Symbols**: identifiers, literal text and comment text are interned
//!
//! ## Notes
//!
//! - The tree is syntax only. Generic type parameter lists are not modelled;
//!   instantiated names (`List[int]`) keep their argument types
//! - Walk/Visitor infrastructure lives in `crate::walk`
//! - `#[derive(WalkAst)]` generates `impl crate::walk::Walk`

use ast_derive::WalkAst;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::hash::{BuildHasher, BuildHasherDefault, Hasher, RandomState};

// =============================================================================
// Positions
// =============================================================================

/// Byte range of a node in its source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Creates a span from `usize` offsets.
    ///
    /// # Panics
    /// In debug builds, panics if an offset exceeds `u32::MAX`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identity of the node this span belongs to.
    #[inline]
    pub const fn pos(&self) -> Pos {
        Pos(self.start)
    }
}

/// Source position of a node: the start offset of its span.
///
/// Unique per node within one file and totally ordered, so it doubles as a
/// cheap primary key for anything derived from the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Pos(u32);

impl Pos {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// Type-safe handle for an arena-allocated node.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(transparent)]
pub struct Id<T> {
    raw: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn to_usize(&self) -> usize {
        self.raw as usize
    }

    #[inline]
    pub const fn raw(&self) -> u32 {
        self.raw
    }
}

/// Typed slice handle into one of the `ExtraData` buffers.
#[derive(Debug, PartialEq, Eq)]
pub struct ListRef<T> {
    start: u32,
    len: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Copy for ListRef<T> {}

impl<T> Clone for ListRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Default for ListRef<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T> ListRef<T> {
    pub const EMPTY: Self = Self {
        start: 0,
        len: 0,
        _marker: PhantomData,
    };

    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        Self {
            start,
            len,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    const fn range(&self) -> core::ops::Range<usize> {
        self.start as usize..(self.start + self.len) as usize
    }
}

// =============================================================================
// Symbols
// =============================================================================

/// Interned string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Symbol(u32);

impl Symbol {
    #[inline]
    pub const fn from_raw(v: u32) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

pub type Ident = Symbol;

/// Identifier occurrence: interned name plus where it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct IdentName {
    pub sym: Ident,
    pub pos: Span,
}

/// Pass-through hasher for buckets already keyed by a `u64` hash.
#[derive(Default)]
struct PrehashedHasher(u64);

impl Hasher for PrehashedHasher {
    fn write(&mut self, _b: &[u8]) {
        unreachable!("PrehashedHasher only accepts write_u64")
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
}

/// String interner shared by every node of one tree.
#[derive(Debug, Default)]
pub struct Interner {
    strings: Vec<Box<str>>,
    buckets: HashMap<u64, SmallVec<[Symbol; 1]>, BuildHasherDefault<PrehashedHasher>>,
    state: RandomState,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol for `s`, allocating it on first sight.
    pub fn intern(&mut self, s: &str) -> Symbol {
        let h = self.state.hash_one(s);
        let bucket = self.buckets.entry(h).or_default();
        if let Some(&sym) = bucket
            .iter()
            .find(|sym| self.strings[sym.0 as usize].as_ref() == s)
        {
            return sym;
        }
        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(s.into());
        bucket.push(sym);
        sym
    }

    /// Symbol for `s` if it was interned before.
    pub fn get(&self, s: &str) -> Option<Symbol> {
        let h = self.state.hash_one(s);
        self.buckets
            .get(&h)?
            .iter()
            .copied()
            .find(|sym| self.strings[sym.0 as usize].as_ref() == s)
    }

    /// # Panics
    /// Panics if `sym` was produced by another interner.
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        self.strings
            .get(sym.0 as usize)
            .expect("symbol from a foreign interner")
            .as_ref()
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

// =============================================================================
// Arenas
// =============================================================================

/// Arena storing nodes and their spans in parallel vectors.
#[derive(Debug)]
pub struct SpannedArena<T> {
    data: Vec<T>,
    spans: Vec<Span>,
}

impl<T> Default for SpannedArena<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            spans: Vec::new(),
        }
    }
}

impl<T> SpannedArena<T> {
    #[inline]
    pub fn alloc(&mut self, node: T, span: Span) -> Id<T> {
        let id = Id::from_raw(self.data.len() as u32);
        self.data.push(node);
        self.spans.push(span);
        id
    }

    #[inline]
    pub fn span(&self, id: Id<T>) -> Span {
        self.spans[id.to_usize()]
    }

    #[inline]
    pub fn pos(&self, id: Id<T>) -> Pos {
        self.span(id).pos()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Index<Id<T>> for SpannedArena<T> {
    type Output = T;
    fn index(&self, id: Id<T>) -> &T {
        &self.data[id.to_usize()]
    }
}

impl<T> IndexMut<Id<T>> for SpannedArena<T> {
    fn index_mut(&mut self, id: Id<T>) -> &mut T {
        &mut self.data[id.to_usize()]
    }
}

pub type DeclId = Id<Decl>;
pub type StmtId = Id<Stmt>;
pub type ExprId = Id<Expr>;
pub type TypeId = Id<Type>;
pub type FieldId = Id<Field>;
pub type SignatureId = Id<Signature>;
pub type FuncDeclId = Id<FuncDecl>;
pub type CommentId = Id<Comment>;
pub type CommentGroupId = Id<CommentGroup>;

/// Shared list buffers that every `ListRef<T>` points into.
#[derive(Debug, Default)]
pub struct ExtraData {
    pub ident_names: Vec<IdentName>,
    pub exprs: Vec<ExprId>,
    pub stmts: Vec<StmtId>,
    pub types: Vec<TypeId>,
    pub fields: Vec<FieldId>,
    pub specs: Vec<Spec>,
    pub keyed_elems: Vec<KeyedElement>,
    pub top_decls: Vec<TopLevelDecl>,
    pub interface_elems: Vec<InterfaceElem>,
    pub comment_ids: Vec<CommentId>,
}

/// Central arena holding every node of one file.
#[derive(Debug, Default)]
pub struct AstArena {
    pub decls: SpannedArena<Decl>,
    pub stmts: SpannedArena<Stmt>,
    pub exprs: SpannedArena<Expr>,
    pub types: SpannedArena<Type>,
    pub signatures: SpannedArena<Signature>,
    pub funcs: SpannedArena<FuncDecl>,
    pub fields: SpannedArena<Field>,
    pub comments: SpannedArena<Comment>,
    pub comment_groups: SpannedArena<CommentGroup>,
    pub extras: ExtraData,
}

/// Declares a `list_*` builder and a slice accessor for one extras buffer.
macro_rules! list_buffers {
    ($($buf:ident: $t:ty => $push:ident, $get:ident;)*) => {
        impl AstArena {
            $(
                pub fn $push(&mut self, items: impl IntoIterator<Item = $t>) -> ListRef<$t> {
                    let start = self.extras.$buf.len();
                    self.extras.$buf.extend(items);
                    let len = self.extras.$buf.len() - start;
                    debug_assert!(start + len <= u32::MAX as usize);
                    ListRef::new(start as u32, len as u32)
                }

                pub fn $get(&self, r: ListRef<$t>) -> &[$t] {
                    &self.extras.$buf[r.range()]
                }
            )*
        }
    };
}

list_buffers! {
    ident_names: IdentName => list_ident_names, ident_names;
    exprs: ExprId => list_exprs, exprs_list;
    stmts: StmtId => list_stmts, stmts_list;
    types: TypeId => list_types, types_list;
    fields: FieldId => list_fields, fields_list;
    specs: Spec => list_specs, specs_list;
    keyed_elems: KeyedElement => list_keyed_elems, keyed_elems_list;
    top_decls: TopLevelDecl => list_top_decls, top_decls;
    interface_elems: InterfaceElem => list_interface_elems, interface_elems;
    comment_ids: CommentId => list_comment_ids, comment_ids;
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// Comments
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `// text`
    Line,
    /// `/* text */`
    Block,
}

/// One comment; `text` holds the raw comment including its markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct Comment {
    pub kind: CommentKind,
    pub text: Symbol,
}

/// Adjacent comments with no blank line between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct CommentGroup {
    pub comments: ListRef<CommentId>,
}

// =============================================================================
// Source File
// =============================================================================

/// Root of a Go source file.
///
/// ```text
/// SourceFile = PackageClause ";" { ImportDecl ";" } { TopLevelDecl ";" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct SourceFile {
    pub package_pos: Span,
    pub name: IdentName,
    /// Import declarations appear here as `GenDeclKind::Import` groups.
    pub decls: ListRef<TopLevelDecl>,
    #[walk(skip)]
    pub doc: Option<CommentGroupId>,
}

// =============================================================================
// Declarations
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum TopLevelDecl {
    Decl(DeclId),
    Func(FuncDeclId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum Decl {
    Gen(GenDecl),
    Bad(Span),
}

/// `import`, `const`, `type` or `var` declaration, grouped or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct GenDecl {
    /// Doc shared by every spec of the group.
    #[walk(skip)]
    pub doc: Option<CommentGroupId>,
    pub kw_pos: Span,
    pub kind: GenDeclKind,
    pub l_paren: Option<Span>,
    pub specs: ListRef<Spec>,
    pub r_paren: Option<Span>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GenDeclKind {
    Import,
    Const,
    Type,
    Var,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

/// `ImportSpec = [ "." | "_" | PackageName ] ImportPath`
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct ImportSpec {
    #[walk(skip)]
    pub doc: Option<CommentGroupId>,
    pub name: Option<ImportName>,
    pub path: StringLit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum ImportName {
    Dot(Span),
    Blank(Span),
    Name(IdentName),
}

/// Const or var spec: `IdentifierList [ Type ] [ "=" ExpressionList ]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct ValueSpec {
    #[walk(skip)]
    pub doc: Option<CommentGroupId>,
    pub names: ListRef<IdentName>,
    pub typ: Option<TypeId>,
    pub values: ListRef<ExprId>,
}

/// `TypeSpec = identifier [ "=" ] Type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct TypeSpec {
    #[walk(skip)]
    pub doc: Option<CommentGroupId>,
    pub name: IdentName,
    /// Position of `=`; present only for alias declarations.
    pub assign_pos: Option<Span>,
    pub typ: TypeId,
}

impl TypeSpec {
    #[inline]
    pub const fn is_alias(&self) -> bool {
        self.assign_pos.is_some()
    }
}

/// Function or method declaration.
///
/// ```text
/// FunctionDecl = "func" FunctionName Signature [ FunctionBody ]
/// MethodDecl   = "func" Receiver MethodName Signature [ FunctionBody ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct FuncDecl {
    #[walk(skip)]
    pub doc: Option<CommentGroupId>,
    pub func_pos: Span,
    pub recv: Option<FieldList>,
    pub name: IdentName,
    pub signature: SignatureId,
    /// `None` for declarations implemented outside Go.
    pub body: Option<Block>,
}

// =============================================================================
// Signatures and Fields
// =============================================================================

/// `Signature = Parameters [ Result ]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct Signature {
    pub params: FieldList,
    pub results: Option<Results>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum Results {
    /// `(x int, err error)` or `(int, error)`
    Params(FieldList),
    /// `int`
    Type(TypeId),
}

/// Parenthesised or braced list of field groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct FieldList {
    pub open: Span,
    pub fields: ListRef<FieldId>,
    pub close: Span,
}

/// One field group of a parameter list or struct body.
///
/// `X, Y int` is a single group with two names; embedded struct fields and
/// unnamed parameters have no names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct Field {
    pub names: ListRef<IdentName>,
    /// `...` of a variadic parameter.
    pub ellipsis_pos: Option<Span>,
    pub typ: TypeId,
    pub tag: Option<StringLit>,
    #[walk(skip)]
    pub doc: Option<CommentGroupId>,
    #[walk(skip)]
    pub comment: Option<CommentGroupId>,
}

// =============================================================================
// Statements
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum Stmt {
    Expr(ExprId),
    Decl(DeclId),
    /// `x, y = a, b`
    Assign {
        lhs: ListRef<ExprId>,
        op_pos: Span,
        rhs: ListRef<ExprId>,
    },
    /// `x, y := a, b`
    Define {
        names: ListRef<IdentName>,
        op_pos: Span,
        values: ListRef<ExprId>,
    },
    Go {
        go_pos: Span,
        call: ExprId,
    },
    Defer {
        defer_pos: Span,
        call: ExprId,
    },
    Return {
        return_pos: Span,
        results: ListRef<ExprId>,
    },
    Block(Block),
    If {
        if_pos: Span,
        init: Option<StmtId>,
        cond: ExprId,
        then_block: Block,
        else_stmt: Option<StmtId>,
    },
    /// Condition-only or infinite loop; clause and range headers are folded
    /// into `init`/`post`.
    For {
        for_pos: Span,
        init: Option<StmtId>,
        cond: Option<ExprId>,
        post: Option<StmtId>,
        body: Block,
    },
    Bad(Span),
}

/// `Block = "{" StatementList "}"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct Block {
    pub l_brace: Span,
    pub stmts: ListRef<StmtId>,
    pub r_brace: Span,
}

// =============================================================================
// Expressions
// =============================================================================

/// `LiteralValue = "{" [ ElementList [ "," ] ] "}"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct LiteralValue {
    pub l_brace: Span,
    pub elements: ListRef<KeyedElement>,
    pub r_brace: Span,
}

/// `KeyedElement = [ Key ":" ] Element`
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct KeyedElement {
    pub key: Option<Key>,
    pub value: Element,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum Key {
    FieldName(IdentName),
    Expr(ExprId),
    Literal(LiteralValue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum Element {
    Expr(ExprId),
    Literal(LiteralValue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum Expr {
    Ident(IdentName),
    BasicLit(BasicLit),
    /// `func(x int) int { return x }`
    FuncLit {
        func_pos: Span,
        sig: SignatureId,
        body: Block,
    },
    /// `T{...}`; `typ` is `None` for elided element types inside another literal.
    CompositeLit {
        typ: Option<TypeId>,
        lit: LiteralValue,
    },
    Paren {
        l_paren: Span,
        expr: ExprId,
        r_paren: Span,
    },
    Selector {
        expr: ExprId,
        sel: IdentName,
    },
    Index {
        base: ExprId,
        index: ExprId,
    },
    /// Call or conversion; `ellipsis` marks `f(xs...)`.
    Call {
        callee: ExprId,
        args: ListRef<ExprId>,
        ellipsis: Option<Span>,
    },
    Unary {
        op: UnaryOp,
        op_pos: Span,
        expr: ExprId,
    },
    Binary {
        left: ExprId,
        op: BinaryOp,
        op_pos: Span,
        right: ExprId,
    },
    Bad(Span),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicLit {
    pub kind: BasicLitKind,
    /// Literal text exactly as written.
    pub value: Symbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BasicLitKind {
    Int,
    Float,
    Imag,
    Rune,
    String,
}

/// String literal as written, quotes included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringLit {
    pub value: Symbol,
    pub raw: Span,
}

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum Type {
    /// `Name`, `pkg.Name` or `Name[Args]`
    Named {
        pkg: Option<IdentName>,
        name: IdentName,
        args: ListRef<TypeId>,
    },
    /// `*T`
    Pointer { star_pos: Span, elem: TypeId },
    /// `[N]T`
    Array { len: ArrayLen, elem: TypeId },
    /// `[]T`
    Slice { elem: TypeId },
    /// `map[K]V`
    Map { key: TypeId, val: TypeId },
    /// `chan T`, `<-chan T`, `chan<- T`
    Chan { dir: ChanDir, elem: TypeId },
    /// `struct { ... }`
    Struct { fields: FieldList },
    /// `interface { ... }`
    Interface {
        l_brace: Span,
        elems: ListRef<InterfaceElem>,
        r_brace: Span,
    },
    /// `func(...) ...`
    Func { sig: SignatureId },
    /// `(T)`
    Paren { typ: TypeId },
    Bad(Span),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum ArrayLen {
    /// `[10]int`
    Expr(ExprId),
    /// `[...]int`
    Ellipsis(Span),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum InterfaceElem {
    /// `Read(p []byte) (int, error)`
    Method {
        #[walk(skip)]
        doc: Option<CommentGroupId>,
        name: IdentName,
        sig: SignatureId,
    },
    /// Embedded interface: `io.Reader`
    Embed(TypeId),
}

// =============================================================================
// Operators
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Add,
    Sub,
    Not,
    Xor,
    Deref,
    Addr,
    Recv,
}

impl UnaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Add => "+",
            UnaryOp::Sub => "-",
            UnaryOp::Not => "!",
            UnaryOp::Xor => "^",
            UnaryOp::Deref => "*",
            UnaryOp::Addr => "&",
            UnaryOp::Recv => "<-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    AndNot,
    LAnd,
    LOr,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::AndNot => "&^",
            BinaryOp::LAnd => "&&",
            BinaryOp::LOr => "||",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        }
    }
}
