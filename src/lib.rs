//! Declaration model and scope resolution over Go syntax trees.
//!
//! The crate takes files already parsed into [`go125_syntax::SyntaxTree`]s,
//! arranged into [`Package`]s and a [`Module`], and builds a table of what
//! each file declares:
//!
//! - `collect` walks one file and records functions, methods, function
//!   literals, named types, anonymous struct literals and imports, each keyed
//!   by its source position;
//! - `bind` attaches methods to the types their pointer receivers name,
//!   across all files of a package;
//! - `scope` resolves a possibly qualified type name from a starting file
//!   through file, package and imported-package scope.
//!
//! Type references are kept as rendered text; nothing is type-checked.
//!
//! ```
//! use go125_aster::{Config, File, Package};
//! use go125_syntax::build::TreeBuilder;
//!
//! let mut b = TreeBuilder::new("geo");
//! let int = b.named("int");
//! let x = b.field(&["X", "Y"], int);
//! let st = b.struct_type(vec![x]);
//! b.type_decl("Point", st);
//!
//! let mut pkg = Package::new("geo");
//! let id = pkg.add_file(File::new("point.go", b.finish())).unwrap();
//! pkg.collect(&Config::default()).unwrap();
//!
//! let scope = pkg.scope(id).unwrap();
//! let point = scope.lookup_in_package("Point").unwrap();
//! assert_eq!(point.node.as_struct().unwrap().fields.len(), 2);
//! ```

pub mod bind;
pub mod collect;
pub mod config;
pub mod entity;
pub mod error;
pub mod field;
pub mod file;
pub mod module;
pub mod render;
pub mod scope;

pub use bind::BindStats;
pub use collect::CollectStats;
pub use config::Config;
pub use entity::{
    AliasShape, BasicShape, ChanShape, DefKind, FuncField, FuncRef, FuncShape, InterfaceMethod,
    InterfaceShape, ListShape, MapShape, Method, Shape, StructField, StructShape, TypeNode,
    TypeRef,
};
pub use error::{Error, Result};
pub use file::{File, FileId, Import};
pub use module::{Module, Package, PackageId};
pub use render::{GoPrinter, Node, Render};
pub use scope::{FileScope, Found};
