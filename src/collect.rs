//! Declaration collection.
//!
//! One walk over a file's syntax tree fills three tables:
//!
//! - **funcs**: function declarations, methods and function literals, keyed by
//!   the position of their `func` keyword;
//! - **types**: type declarations, keyed by the position of the right-hand side
//!   after pointer indirections are stripped, plus anonymous struct literals
//!   and `var` declarations with an explicit struct type;
//! - **imports**: import specs grouped by local alias.
//!
//! Declarations whose shape the model does not track are skipped. Method
//! receivers are recorded as text and left for the binder.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::AddAssign;

use go125_syntax::ast::*;
use go125_syntax::walk::{self, Visitor};
use go125_syntax::SyntaxTree;

use crate::config::Config;
use crate::entity::{
    AliasShape, BasicShape, ChanShape, DefKind, FuncShape, InterfaceMethod, InterfaceShape,
    ListShape, MapShape, Shape, StructShape, TypeNode,
};
use crate::error::{Error, Result};
use crate::field::{self, ExpandedSignature};
use crate::file::{File, FileId, Import, ImportTable};
use crate::render::{self, GoPrinter, Node, Render};

/// Counts reported by one collection run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollectStats {
    pub funcs: usize,
    pub types: usize,
    pub imports: usize,
    /// Entities dropped because their position was already taken.
    pub duplicates: usize,
}

impl AddAssign for CollectStats {
    fn add_assign(&mut self, rhs: Self) {
        self.funcs += rhs.funcs;
        self.types += rhs.types;
        self.imports += rhs.imports;
        self.duplicates += rhs.duplicates;
    }
}

/// Predeclared Go types a plain identifier can name.
const BASIC_TYPES: &[&str] = &[
    "bool", "string", "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16",
    "uint32", "uint64", "uintptr", "byte", "rune", "float32", "float64", "complex64",
    "complex128",
];

pub fn is_basic_type(name: &str) -> bool {
    BASIC_TYPES.contains(&name)
}

/// Collects `file` with the default printer. Existing tables are replaced.
pub fn collect_file(file: &mut File, config: &Config) -> Result<CollectStats> {
    collect_file_with(file, config, &GoPrinter)
}

pub fn collect_file_with(
    file: &mut File,
    config: &Config,
    renderer: &dyn Render,
) -> Result<CollectStats> {
    let mut collector = Collector {
        tree: file.syntax(),
        file: file.id(),
        file_name: file.name(),
        config,
        renderer,
        funcs: BTreeMap::new(),
        types: BTreeMap::new(),
        imports: ImportTable::default(),
        stats: CollectStats::default(),
        depth: 0,
        error: None,
    };
    let tree = collector.tree;
    tree.walk(&mut collector);
    let Collector {
        funcs,
        types,
        imports,
        stats,
        error,
        ..
    } = collector;
    if let Some(err) = error {
        return Err(err);
    }
    tracing::debug!(
        file = %file.name(),
        funcs = stats.funcs,
        types = stats.types,
        imports = stats.imports,
        duplicates = stats.duplicates,
        "collected declarations"
    );
    file.funcs = funcs;
    file.types = types;
    file.imports = imports;
    Ok(stats)
}

struct Collector<'t> {
    tree: &'t SyntaxTree,
    file: FileId,
    file_name: &'t str,
    config: &'t Config,
    renderer: &'t dyn Render,
    funcs: BTreeMap<Pos, TypeNode>,
    types: BTreeMap<Pos, TypeNode>,
    imports: ImportTable,
    stats: CollectStats,
    /// Function bodies enclosing the current node.
    depth: u32,
    /// First rendering failure; stops the walk from registering anything more.
    error: Option<Error>,
}

impl<'t> Collector<'t> {
    fn render(&self, item: &'static str, node: Node, pos: Pos) -> Result<String> {
        render::try_render(
            self.renderer,
            self.tree,
            node,
            self.config.render_fallback.as_deref(),
        )
        .map_err(|source| Error::Render {
            file: self.file_name.to_owned(),
            item,
            pos,
            source,
        })
    }

    fn render_type(&self, id: TypeId) -> Result<String> {
        self.render("type", Node::Type(id), self.tree.arena.types.pos(id))
    }

    fn signature(&self, sig: SignatureId) -> Result<ExpandedSignature> {
        field::expand_signature(self.tree, sig, |t| self.render_type(t))
    }

    fn record<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(err) => {
                self.error.get_or_insert(err);
                None
            }
        }
    }

    fn insert_func(&mut self, node: TypeNode) {
        match self.funcs.entry(node.pos) {
            Entry::Vacant(slot) => {
                slot.insert(node);
                self.stats.funcs += 1;
            }
            Entry::Occupied(_) => {
                tracing::debug!(pos = %node.pos, "function position already taken");
                self.stats.duplicates += 1;
            }
        }
    }

    fn insert_type(&mut self, mut node: TypeNode) {
        node.local = self.depth > 0;
        match self.types.entry(node.pos) {
            Entry::Vacant(slot) => {
                tracing::trace!(
                    name = node.name().unwrap_or("<anonymous>"),
                    kind = node.shape.kind_name(),
                    local = node.local,
                    pos = %node.pos,
                    "type collected"
                );
                slot.insert(node);
                self.stats.types += 1;
            }
            Entry::Occupied(_) => {
                tracing::debug!(pos = %node.pos, "type position already taken");
                self.stats.duplicates += 1;
            }
        }
    }

    // Functions

    fn func_decl(&self, id: FuncDeclId) -> Result<TypeNode> {
        let decl = self.tree.arena.funcs[id];
        let recv = match decl.recv {
            Some(list) => field::expand_func_fields(self.tree, list, |t| self.render_type(t))?
                .into_iter()
                .next(),
            None => None,
        };
        let sig = self.signature(decl.signature)?;
        let shape = FuncShape {
            def: None,
            recv,
            params: sig.params,
            results: sig.results,
            variadic: sig.variadic,
            body: decl.body,
            bound_to: None,
        };
        Ok(TypeNode::new(
            Some(self.tree.name(decl.name).to_owned()),
            self.tree.doc_text(decl.doc),
            self.file,
            decl.func_pos.pos(),
            Shape::Func(shape),
        ))
    }

    fn func_lit(&self, func_pos: Span, sig: SignatureId, body: Block) -> Result<TypeNode> {
        let sig = self.signature(sig)?;
        let shape = FuncShape {
            def: None,
            recv: None,
            params: sig.params,
            results: sig.results,
            variadic: sig.variadic,
            body: Some(body),
            bound_to: None,
        };
        Ok(TypeNode::new(None, None, self.file, func_pos.pos(), Shape::Func(shape)))
    }

    // Declarations

    fn gen_decl(&mut self, decl: GenDecl) {
        let tree = self.tree;
        for &spec in tree.arena.specs_list(decl.specs) {
            let node = match spec {
                Spec::Import(spec) => {
                    self.import(spec, decl.doc);
                    continue;
                }
                Spec::Type(spec) => self.type_spec(spec, decl.doc),
                Spec::Value(spec) => self.value_spec(spec, decl.doc),
            };
            if let Some(node) = self.record(node).flatten() {
                self.insert_type(node);
            }
        }
    }

    fn import(&mut self, spec: ImportSpec, group_doc: Option<CommentGroupId>) {
        let path = self.tree.unquote(spec.path).into_owned();
        let (alias, explicit) = match spec.name {
            Some(ImportName::Name(name)) => (self.tree.name(name).to_owned(), true),
            Some(ImportName::Dot(_)) => (".".to_owned(), true),
            Some(ImportName::Blank(_)) => ("_".to_owned(), true),
            None => (default_alias(&path).to_owned(), false),
        };
        let import = Import {
            alias: alias.clone(),
            path,
            explicit,
            doc: self.tree.doc_text(spec.doc.or(group_doc)),
            pos: spec.path.raw.pos(),
        };
        self.imports.entry(alias).or_default().push(import);
        self.stats.imports += 1;
    }

    /// Named type declaration, dispatched on its right-hand side.
    fn type_spec(&self, spec: TypeSpec, group_doc: Option<CommentGroupId>) -> Result<Option<TypeNode>> {
        let a = &self.tree.arena;
        let name = self.tree.name(spec.name).to_owned();
        let doc = self.tree.doc_text(spec.doc.or(group_doc));
        let def = if spec.is_alias() {
            DefKind::Alias
        } else {
            DefKind::Define
        };
        let (elem, indirection) = strip_pointers(a, spec.typ);
        let shape = match a.types[elem] {
            Type::Named {
                pkg,
                name: base,
                args,
            } => {
                let base = self.tree.name(base);
                if pkg.is_none() && args.is_empty() && is_basic_type(base) {
                    Shape::Basic(BasicShape {
                        def,
                        name: base.to_owned(),
                    })
                } else {
                    Shape::Alias(AliasShape {
                        def,
                        target: self.render_type(elem)?,
                        package: pkg.map(|p| self.tree.name(p).to_owned()),
                        base: base.to_owned(),
                    })
                }
            }
            Type::Chan { dir, elem: e } => Shape::Chan(ChanShape {
                def,
                dir,
                elem: self.render_type(e)?,
            }),
            Type::Array { len, elem: e } => {
                let len = match len {
                    ArrayLen::Expr(x) => self.render("array length", Node::Expr(x), a.exprs.pos(x))?,
                    ArrayLen::Ellipsis(_) => "...".to_owned(),
                };
                Shape::List(ListShape {
                    def,
                    len: Some(len),
                    elem: self.render_type(e)?,
                })
            }
            Type::Slice { elem: e } => Shape::List(ListShape {
                def,
                len: None,
                elem: self.render_type(e)?,
            }),
            Type::Map { key, val } => Shape::Map(MapShape {
                def,
                key: self.render_type(key)?,
                value: self.render_type(val)?,
            }),
            Type::Interface { elems, .. } => Shape::Interface(self.interface(def, elems)?),
            Type::Struct { fields } => Shape::Struct(self.struct_shape(def, fields)?),
            Type::Func { sig } => {
                let sig = self.signature(sig)?;
                Shape::Func(FuncShape {
                    def: Some(def),
                    recv: None,
                    params: sig.params,
                    results: sig.results,
                    variadic: sig.variadic,
                    body: None,
                    bound_to: None,
                })
            }
            Type::Paren { .. } | Type::Bad(_) | Type::Pointer { .. } => {
                tracing::trace!(%name, "type declaration shape not tracked");
                return Ok(None);
            }
        };
        let mut node = TypeNode::new(Some(name), doc, self.file, a.types.pos(elem), shape);
        node.indirection = indirection;
        Ok(Some(node))
    }

    /// `var x struct{...}` registers a struct named after its first variable.
    fn value_spec(&self, spec: ValueSpec, group_doc: Option<CommentGroupId>) -> Result<Option<TypeNode>> {
        let a = &self.tree.arena;
        let Some(typ) = spec.typ else {
            return Ok(None);
        };
        let Some(&first) = a.ident_names(spec.names).first() else {
            return Ok(None);
        };
        let (elem, indirection) = strip_pointers(a, typ);
        let Type::Struct { fields } = a.types[elem] else {
            return Ok(None);
        };
        let shape = self.struct_shape(DefKind::Undeclared, fields)?;
        let mut node = TypeNode::new(
            Some(self.tree.name(first).to_owned()),
            self.tree.doc_text(spec.doc.or(group_doc)),
            self.file,
            a.types.pos(elem),
            Shape::Struct(shape),
        );
        node.indirection = indirection;
        Ok(Some(node))
    }

    /// Struct literal used as a composite literal type: `struct{ N int }{N: 1}`.
    fn anonymous_struct(&self, typ: TypeId) -> Result<Option<TypeNode>> {
        let Type::Struct { fields } = self.tree.arena.types[typ] else {
            return Ok(None);
        };
        let shape = self.struct_shape(DefKind::Undeclared, fields)?;
        Ok(Some(TypeNode::new(
            None,
            None,
            self.file,
            self.tree.arena.types.pos(typ),
            Shape::Struct(shape),
        )))
    }

    fn struct_shape(&self, def: DefKind, fields: FieldList) -> Result<StructShape> {
        let fields = field::expand_struct_fields(self.tree, fields, |t| self.render_type(t))?;
        Ok(StructShape { def, fields })
    }

    fn interface(&self, def: DefKind, elems: ListRef<InterfaceElem>) -> Result<InterfaceShape> {
        let mut shape = InterfaceShape {
            def,
            methods: Vec::new(),
            embeds: Vec::new(),
        };
        for &elem in self.tree.arena.interface_elems(elems) {
            match elem {
                InterfaceElem::Method { doc, name, sig } => {
                    let sig = self.signature(sig)?;
                    shape.methods.push(InterfaceMethod {
                        name: self.tree.name(name).to_owned(),
                        doc: self.tree.doc_text(doc),
                        params: sig.params,
                        results: sig.results,
                        variadic: sig.variadic,
                    });
                }
                InterfaceElem::Embed(t) => shape.embeds.push(self.render_type(t)?),
            }
        }
        Ok(shape)
    }
}

impl<'t> Visitor<'t> for Collector<'t> {
    fn visit_decl(&mut self, a: &'t AstArena, id: DeclId) {
        if self.error.is_some() {
            return;
        }
        match a.decls[id] {
            Decl::Gen(decl) => self.gen_decl(decl),
            Decl::Bad(span) => tracing::trace!(?span, "skipping malformed declaration"),
        }
        walk::walk_decl(self, a, id);
    }

    fn visit_func_decl(&mut self, a: &'t AstArena, id: FuncDeclId) {
        if self.error.is_some() {
            return;
        }
        let node = self.func_decl(id);
        if let Some(node) = self.record(node) {
            self.insert_func(node);
        }
        self.depth += 1;
        walk::walk_func_decl(self, a, id);
        self.depth -= 1;
    }

    fn visit_expr(&mut self, a: &'t AstArena, id: ExprId) {
        if self.error.is_some() {
            return;
        }
        match a.exprs[id] {
            Expr::FuncLit {
                func_pos,
                sig,
                body,
            } => {
                let node = self.func_lit(func_pos, sig, body);
                if let Some(node) = self.record(node) {
                    self.insert_func(node);
                }
            }
            Expr::CompositeLit { typ: Some(typ), .. } => {
                let node = self.anonymous_struct(typ);
                if let Some(node) = self.record(node).flatten() {
                    self.insert_type(node);
                }
            }
            _ => {}
        }
        let body = u32::from(matches!(a.exprs[id], Expr::FuncLit { .. }));
        self.depth += body;
        walk::walk_expr(self, a, id);
        self.depth -= body;
    }
}

/// Follows `*T` down to `T`, returning the element and the number of stars.
fn strip_pointers(a: &AstArena, mut id: TypeId) -> (TypeId, u32) {
    let mut depth = 0;
    while let Type::Pointer { elem, .. } = a.types[id] {
        id = elem;
        depth += 1;
    }
    (id, depth)
}

/// Local name of an import written without one: the last path element.
fn default_alias(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
