//! Name resolution across file, package and module scope.
//!
//! Lookups match declared names exactly and return the first hit:
//!
//! 1. the origin file's type table;
//! 2. the other files of the origin package, in the order they were added;
//! 3. for `alias.Name`, the packages the origin file imports under `alias`.
//!
//! Two declarations with the same name in one scope are not disambiguated;
//! the first in search order shadows the rest.

use crate::entity::{TypeNode, TypeRef};
use crate::file::{File, Import};
use crate::module::{Module, Package};

/// Alias under which dot-imported packages are searched for bare names.
pub const DOT_IMPORT: &str = ".";

/// A resolved declaration and where it lives.
#[derive(Debug, Clone, Copy)]
pub struct Found<'a> {
    pub package: Option<&'a Package>,
    pub file: &'a File,
    pub node: &'a TypeNode,
}

impl Found<'_> {
    #[inline]
    pub fn type_ref(&self) -> TypeRef {
        self.node.type_ref()
    }
}

/// Starting point of a lookup: a file plus whatever encloses it.
#[derive(Debug, Clone, Copy)]
pub struct FileScope<'a> {
    module: Option<&'a Module>,
    package: Option<&'a Package>,
    file: &'a File,
}

impl<'a> FileScope<'a> {
    pub(crate) fn new(module: Option<&'a Module>, package: Option<&'a Package>, file: &'a File) -> Self {
        Self {
            module,
            package,
            file,
        }
    }

    pub(crate) fn standalone(file: &'a File) -> Self {
        Self::new(None, None, file)
    }

    #[inline]
    pub fn file(&self) -> &'a File {
        self.file
    }

    #[inline]
    pub fn package(&self) -> Option<&'a Package> {
        self.package
    }

    #[inline]
    pub fn module(&self) -> Option<&'a Module> {
        self.module
    }

    fn found(&self, file: &'a File, node: &'a TypeNode) -> Found<'a> {
        Found {
            package: self.package,
            file,
            node,
        }
    }

    /// Declaration named `name` in the origin file. Leading `*`s are ignored.
    pub fn lookup_in_file(&self, name: &str) -> Option<Found<'a>> {
        let name = name.trim_start_matches('*');
        find_in_file(self.file, name).map(|node| self.found(self.file, node))
    }

    /// Declaration named `name` in the origin file, then in the rest of the
    /// package. Qualified names never match here.
    pub fn lookup_in_package(&self, name: &str) -> Option<Found<'a>> {
        if name.contains('.') {
            return None;
        }
        let name = name.trim_start_matches('*');
        if let Some(found) = self.lookup_in_file(name) {
            return Some(found);
        }
        let package = self.package?;
        package
            .files()
            .filter(|f| f.id() != self.file.id())
            .find_map(|f| find_in_file(f, name).map(|node| self.found(f, node)))
    }

    /// Full resolution: package scope, then the imported packages.
    ///
    /// `alias.Name` searches the packages imported as `alias`; a bare name
    /// searches dot-imported packages. Without a module nothing outside the
    /// package is reachable.
    pub fn lookup_in_module(&self, name: &str) -> Option<Found<'a>> {
        if let Some(found) = self.lookup_in_package(name) {
            return Some(found);
        }
        let name = name.trim_start_matches('*');
        let (alias, ident) = name.split_once('.').unwrap_or((DOT_IMPORT, name));
        let found = self.packages_by_alias(alias).into_iter().find_map(|pkg| {
            pkg.files().find_map(|f| {
                find_in_file(f, ident).map(|node| Found {
                    package: Some(pkg),
                    file: f,
                    node,
                })
            })
        });
        if found.is_none() {
            tracing::trace!(file = %self.file.name(), name, "not found in module scope");
        }
        found
    }

    /// Imports of the origin file visible as `alias`, in source order.
    ///
    /// An import written without a name also answers to the package clause of
    /// the package it points at, when a module is attached.
    pub fn imports_by_alias(&self, alias: &str) -> Vec<&'a Import> {
        let mut out: Vec<&'a Import> = match self.file.imports.get(alias) {
            Some(imports) => imports.iter().collect(),
            None => Vec::new(),
        };
        if let Some(module) = self.module {
            let declared = self.file.imports.values().flatten().filter(|imp| {
                !imp.explicit
                    && imp.alias != alias
                    && module
                        .package_by_path(&imp.path)
                        .is_some_and(|p| p.name() == alias)
            });
            out.extend(declared);
        }
        out.sort_by_key(|imp| imp.pos);
        out
    }

    /// Module packages the origin file imports as `alias`.
    pub fn packages_by_alias(&self, alias: &str) -> Vec<&'a Package> {
        let Some(module) = self.module else {
            return Vec::new();
        };
        let mut out: Vec<&'a Package> = Vec::new();
        for imp in self.imports_by_alias(alias) {
            if let Some(pkg) = module.package_by_path(&imp.path) {
                if !out.iter().any(|p| std::ptr::eq(*p, pkg)) {
                    out.push(pkg);
                }
            }
        }
        out
    }
}

/// Package-level type declared as `name`. Function-local declarations are
/// skipped so they never shadow one.
fn find_in_file<'a>(file: &'a File, name: &str) -> Option<&'a TypeNode> {
    file.types
        .values()
        .find(|n| !n.local && n.name() == Some(name))
}
