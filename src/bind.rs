//! Method binding.
//!
//! Attaches every collected method to the declaration its receiver names.
//! Only pointer receivers written as `*Ident` are bound; `Ident`, `*pkg.T`
//! and `*List[T]` receivers are left alone. Resolution goes through package
//! scope, so the receiver type may live in any file of the package.
//!
//! Binding runs in two phases. Every pending binding is planned against the
//! immutable tables first, then applied, so each method list has exactly one
//! writer and the plan cannot observe its own appends.

use std::ops::AddAssign;

use go125_syntax::Pos;
use unicode_ident::{is_xid_continue, is_xid_start};

use crate::entity::{Method, Shape, TypeRef};
use crate::file::{File, FileId};
use crate::module::Package;
use crate::scope::FileScope;

/// Counts reported by one binder run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BindStats {
    pub bound: usize,
    /// Methods bound by an earlier run and left as they were.
    pub already_bound: usize,
    /// `*Ident` receivers naming nothing in scope.
    pub unresolved: usize,
    /// Value receivers and receivers that are not a plain identifier.
    pub skipped_receivers: usize,
}

impl AddAssign for BindStats {
    fn add_assign(&mut self, rhs: Self) {
        self.bound += rhs.bound;
        self.already_bound += rhs.already_bound;
        self.unresolved += rhs.unresolved;
        self.skipped_receivers += rhs.skipped_receivers;
    }
}

struct Pending {
    func_file: FileId,
    func_pos: Pos,
    method: Method,
}

/// Binds the methods of a file that belongs to no package.
pub fn bind_file(file: &mut File) -> BindStats {
    let mut stats = BindStats::default();
    let pending = plan(std::iter::once(FileScope::standalone(file)), &mut stats);
    for p in pending {
        let receiver = p.method.receiver;
        if let Some(node) = file.types.get_mut(&receiver.pos) {
            node.add_method(p.method);
        }
        if let Some(node) = file.funcs.get_mut(&p.func_pos) {
            mark_bound(&mut node.shape, receiver);
        }
        stats.bound += 1;
    }
    log_stats(file.name(), &stats);
    stats
}

/// Binds the methods of every file of `package` against package scope.
pub fn bind_package(package: &mut Package) -> BindStats {
    let mut stats = BindStats::default();
    let pending = {
        let pkg: &Package = package;
        let scopes = pkg.files().map(|f| FileScope::new(None, Some(pkg), f));
        plan(scopes, &mut stats)
    };
    for Pending {
        func_file,
        func_pos,
        method,
    } in pending
    {
        let receiver = method.receiver;
        // The method and its receiver may live in different files.
        if let Some(node) = package
            .file_mut(receiver.file)
            .and_then(|f| f.types.get_mut(&receiver.pos))
        {
            node.add_method(method);
        }
        if let Some(node) = package
            .file_mut(func_file)
            .and_then(|f| f.funcs.get_mut(&func_pos))
        {
            mark_bound(&mut node.shape, receiver);
        }
        stats.bound += 1;
    }
    log_stats(package.name(), &stats);
    stats
}

fn plan<'a>(scopes: impl Iterator<Item = FileScope<'a>>, stats: &mut BindStats) -> Vec<Pending> {
    let mut pending = Vec::new();
    for scope in scopes {
        let file = scope.file();
        for node in file.funcs() {
            let Shape::Func(func) = &node.shape else {
                continue;
            };
            let Some(recv) = &func.recv else {
                continue;
            };
            if func.binding().is_some() {
                stats.already_bound += 1;
                continue;
            }
            let Some(base) = pointer_receiver_base(&recv.type_name) else {
                tracing::trace!(receiver = %recv.type_name, "receiver not bound");
                stats.skipped_receivers += 1;
                continue;
            };
            let Some(found) = scope.lookup_in_package(base) else {
                tracing::debug!(
                    file = %file.name(),
                    receiver = base,
                    "receiver type not found in package"
                );
                stats.unresolved += 1;
                continue;
            };
            let Some(name) = node.name() else {
                continue;
            };
            pending.push(Pending {
                func_file: node.file,
                func_pos: node.pos,
                method: Method {
                    name: name.to_owned(),
                    doc: node.doc.clone(),
                    func: node.func_ref(),
                    receiver: found.type_ref(),
                },
            });
        }
    }
    pending
}

fn mark_bound(shape: &mut Shape, target: TypeRef) {
    if let Shape::Func(func) = shape {
        func.bound_to = Some(target);
    }
}

fn log_stats(scope: &str, stats: &BindStats) {
    tracing::debug!(
        scope,
        bound = stats.bound,
        already_bound = stats.already_bound,
        unresolved = stats.unresolved,
        skipped = stats.skipped_receivers,
        "bound methods"
    );
}

/// `T` for a receiver written `*T`, where `T` is a plain identifier.
pub(crate) fn pointer_receiver_base(text: &str) -> Option<&str> {
    let base = text.strip_prefix('*')?;
    is_identifier(base).then_some(base)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else { return false };
    if first != '_' && !is_xid_start(first) {
        return false;
    }
    chars.all(|c| c == '_' || is_xid_continue(c))
}
