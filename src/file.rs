use std::collections::BTreeMap;

use go125_syntax::ast::TypeId;
use go125_syntax::{Pos, SyntaxTree};
use la_arena::{Idx, RawIdx};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::bind::{self, BindStats};
use crate::collect::{self, CollectStats};
use crate::config::Config;
use crate::entity::TypeNode;
use crate::error::{Error, Result};
use crate::render::{self, GoPrinter, Node, Render};
use crate::scope::FileScope;

/// Index of a file inside its package.
pub type FileId = Idx<File>;

/// One import spec of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Local name: the explicit name, `.` for dot imports, `_` for blank
    /// imports, otherwise the last path segment.
    pub alias: String,
    pub path: String,
    /// The alias was written in the source.
    pub explicit: bool,
    pub doc: Option<String>,
    pub pos: Pos,
}

pub(crate) type ImportTable = FxHashMap<String, SmallVec<[Import; 1]>>;

/// A parsed file and the declarations collected from it.
#[derive(Debug)]
pub struct File {
    pub(crate) id: FileId,
    name: String,
    syntax: SyntaxTree,
    pub(crate) funcs: BTreeMap<Pos, TypeNode>,
    pub(crate) types: BTreeMap<Pos, TypeNode>,
    pub(crate) imports: ImportTable,
}

impl File {
    pub fn new(name: impl Into<String>, syntax: SyntaxTree) -> Self {
        Self {
            id: Idx::from_raw(RawIdx::from(0u32)),
            name: name.into(),
            syntax,
            funcs: BTreeMap::new(),
            types: BTreeMap::new(),
            imports: ImportTable::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn syntax(&self) -> &SyntaxTree {
        &self.syntax
    }

    pub fn package_name(&self) -> &str {
        self.syntax.package_name()
    }

    /// Functions, function literals and methods in position order.
    pub fn funcs(&self) -> impl Iterator<Item = &TypeNode> {
        self.funcs.values()
    }

    /// Every non-function declaration, plus named function types, in
    /// position order.
    pub fn types(&self) -> impl Iterator<Item = &TypeNode> {
        self.types.values()
    }

    pub fn func(&self, pos: Pos) -> Option<&TypeNode> {
        self.funcs.get(&pos)
    }

    pub fn type_node(&self, pos: Pos) -> Option<&TypeNode> {
        self.types.get(&pos)
    }

    /// Function named `name`; methods are included.
    pub fn func_named(&self, name: &str) -> Option<&TypeNode> {
        self.funcs.values().find(|n| n.name() == Some(name))
    }

    /// Every import record, in source order.
    pub fn imports(&self) -> Vec<&Import> {
        let mut all: Vec<_> = self.imports.values().flatten().collect();
        all.sort_by_key(|imp| imp.pos);
        all
    }

    /// Lookup scope for a file that belongs to no package.
    pub fn scope(&self) -> FileScope<'_> {
        FileScope::standalone(self)
    }

    /// Collects declarations and, when `config.bind_methods` is set, binds
    /// methods within this file alone.
    ///
    /// Use [`Package::collect`](crate::Package::collect) for files that share
    /// a package with others, so receivers declared elsewhere are found.
    pub fn collect(&mut self, config: &Config) -> Result<CollectStats> {
        self.collect_with(config, &GoPrinter)
    }

    pub fn collect_with(&mut self, config: &Config, renderer: &dyn Render) -> Result<CollectStats> {
        let stats = collect::collect_file_with(self, config, renderer)?;
        if config.bind_methods {
            bind::bind_file(self);
        }
        Ok(stats)
    }

    /// Binds methods whose receivers are declared in this file.
    pub fn bind_methods(&mut self) -> BindStats {
        bind::bind_file(self)
    }

    /// Renders a type node of this file.
    pub fn format(&self, id: TypeId) -> Result<String> {
        GoPrinter
            .render(&self.syntax, Node::Type(id))
            .map_err(|source| Error::Render {
                file: self.name.clone(),
                item: "type",
                pos: self.syntax.arena.types.pos(id),
                source,
            })
    }

    /// Renders a type node, returning `default` when rendering fails.
    pub fn try_format(&self, id: TypeId, default: &str) -> String {
        render::try_render(&GoPrinter, &self.syntax, Node::Type(id), Some(default))
            .unwrap_or_else(|_| default.to_owned())
    }

    /// Moves the file to slot `id` of a package.
    pub(crate) fn set_id(&mut self, id: FileId) {
        self.id = id;
        for node in self.funcs.values_mut().chain(self.types.values_mut()) {
            node.rehome(id);
        }
    }
}
