use la_arena::{Arena, Idx};
use rustc_hash::FxHashMap;

use crate::bind::{self, BindStats};
use crate::collect::{self, CollectStats};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::file::{File, FileId};
use crate::render::{GoPrinter, Render};
use crate::scope::FileScope;

/// Files sharing one package clause.
#[derive(Debug)]
pub struct Package {
    name: String,
    path: Option<String>,
    files: Arena<File>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            files: Arena::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Import path, once the package belongs to a module.
    #[inline]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Adds a file; its package clause must name this package.
    ///
    /// Files are searched in the order they were added.
    pub fn add_file(&mut self, mut file: File) -> Result<FileId> {
        if file.package_name() != self.name {
            return Err(Error::PackageMismatch {
                file: file.name().to_owned(),
                expected: self.name.clone(),
                found: file.package_name().to_owned(),
            });
        }
        let slot = Idx::from_raw((self.files.len() as u32).into());
        file.set_id(slot);
        let id = self.files.alloc(file);
        debug_assert_eq!(id, slot);
        Ok(id)
    }

    pub fn file(&self, id: FileId) -> Option<&File> {
        let index = u32::from(id.into_raw()) as usize;
        (index < self.files.len()).then(|| &self.files[id])
    }

    pub(crate) fn file_mut(&mut self, id: FileId) -> Option<&mut File> {
        let index = u32::from(id.into_raw()) as usize;
        if index < self.files.len() {
            Some(&mut self.files[id])
        } else {
            None
        }
    }

    pub fn file_by_name(&self, name: &str) -> Option<&File> {
        self.files.values().find(|f| f.name() == name)
    }

    /// Files in insertion order.
    pub fn files(&self) -> impl Iterator<Item = &File> {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Lookup scope for one of this package's files, without a module.
    pub fn scope(&self, file: FileId) -> Option<FileScope<'_>> {
        Some(FileScope::new(None, Some(self), self.file(file)?))
    }

    /// Collects every file, then binds methods across the package when
    /// `config.bind_methods` is set.
    pub fn collect(&mut self, config: &Config) -> Result<CollectStats> {
        self.collect_with(config, &GoPrinter)
    }

    pub fn collect_with(&mut self, config: &Config, renderer: &dyn Render) -> Result<CollectStats> {
        let stats = self.collect_files(config, renderer)?;
        if config.bind_methods {
            self.bind_methods();
        }
        Ok(stats)
    }

    fn collect_files(&mut self, config: &Config, renderer: &dyn Render) -> Result<CollectStats> {
        let mut stats = CollectStats::default();
        for file in self.files.values_mut() {
            stats += collect::collect_file_with(file, config, renderer)?;
        }
        tracing::debug!(package = %self.name, files = self.files.len(), ?stats, "collected package");
        Ok(stats)
    }

    /// Runs the method binder over the whole package.
    ///
    /// Run once after every file is collected. Methods bound by an earlier
    /// run are not resolved again.
    pub fn bind_methods(&mut self) -> BindStats {
        bind::bind_package(self)
    }
}

pub type PackageId = Idx<Package>;

/// Packages reachable from one another through imports.
#[derive(Debug)]
pub struct Module {
    path: String,
    packages: Arena<Package>,
    by_path: FxHashMap<String, PackageId>,
}

impl Module {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            packages: Arena::new(),
            by_path: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Registers `package` under its import path.
    pub fn add_package(&mut self, path: impl Into<String>, mut package: Package) -> Result<PackageId> {
        let path = path.into();
        if self.by_path.contains_key(&path) {
            return Err(Error::DuplicatePackage(path));
        }
        package.path = Some(path.clone());
        let id = self.packages.alloc(package);
        self.by_path.insert(path, id);
        Ok(id)
    }

    pub fn package(&self, id: PackageId) -> Option<&Package> {
        let index = u32::from(id.into_raw()) as usize;
        (index < self.packages.len()).then(|| &self.packages[id])
    }

    pub fn package_by_path(&self, path: &str) -> Option<&Package> {
        self.by_path.get(path).map(|&id| &self.packages[id])
    }

    /// Packages whose package clause is `name`; several import paths may share
    /// one name.
    pub fn packages_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Package> + 'a {
        self.packages.values().filter(move |p| p.name == name)
    }

    /// Packages in registration order.
    pub fn packages(&self) -> impl Iterator<Item = (PackageId, &Package)> {
        self.packages.iter()
    }

    pub fn scope(&self, package: PackageId, file: FileId) -> Option<FileScope<'_>> {
        let pkg = self.package(package)?;
        Some(FileScope::new(Some(self), Some(pkg), pkg.file(file)?))
    }

    /// Collects every package, then binds methods in every package when
    /// `config.bind_methods` is set.
    pub fn collect(&mut self, config: &Config) -> Result<CollectStats> {
        self.collect_with(config, &GoPrinter)
    }

    pub fn collect_with(&mut self, config: &Config, renderer: &dyn Render) -> Result<CollectStats> {
        let mut stats = CollectStats::default();
        for package in self.packages.values_mut() {
            stats += package.collect_files(config, renderer)?;
        }
        if config.bind_methods {
            self.bind_methods();
        }
        Ok(stats)
    }

    pub fn bind_methods(&mut self) -> BindStats {
        let mut stats = BindStats::default();
        for package in self.packages.values_mut() {
            stats += package.bind_methods();
        }
        stats
    }
}
