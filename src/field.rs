//! Field normalization.
//!
//! A field group such as `X, Y int` is one syntax node with several names.
//! The model stores one field per name, each carrying the group's type text
//! and tag. Groups without names (embedded struct fields, unnamed
//! parameters) produce a single nameless field.

use go125_syntax::ast::{FieldList, Results, SignatureId, TypeId};
use go125_syntax::SyntaxTree;

use crate::entity::{FuncField, StructField};

/// Expands parameter or result groups; `render` turns a group's type into text.
pub fn expand_func_fields<E>(
    tree: &SyntaxTree,
    list: FieldList,
    mut render: impl FnMut(TypeId) -> Result<String, E>,
) -> Result<Vec<FuncField>, E> {
    let a = &tree.arena;
    let mut out = Vec::with_capacity(list.fields.len() as usize);
    for &id in a.fields_list(list.fields) {
        let group = a.fields[id];
        let mut type_name = render(group.typ)?;
        if group.ellipsis_pos.is_some() {
            type_name.insert_str(0, "...");
        }
        let names = a.ident_names(group.names);
        if names.is_empty() {
            out.push(FuncField {
                name: None,
                type_name,
            });
            continue;
        }
        out.extend(names.iter().map(|&n| FuncField {
            name: Some(tree.name(n).to_owned()),
            type_name: type_name.clone(),
        }));
    }
    Ok(out)
}

/// Expands struct field groups, keeping tag and doc on every produced field.
pub fn expand_struct_fields<E>(
    tree: &SyntaxTree,
    list: FieldList,
    mut render: impl FnMut(TypeId) -> Result<String, E>,
) -> Result<Vec<StructField>, E> {
    let a = &tree.arena;
    let mut out = Vec::with_capacity(list.fields.len() as usize);
    for &id in a.fields_list(list.fields) {
        let group = a.fields[id];
        let type_name = render(group.typ)?;
        let tag = group.tag.map(|t| tree.unquote(t).into_owned());
        let doc = tree.doc_text(group.doc);
        let names = a.ident_names(group.names);
        if names.is_empty() {
            out.push(StructField {
                name: None,
                type_name,
                tag,
                doc,
            });
            continue;
        }
        out.extend(names.iter().map(|&n| StructField {
            name: Some(tree.name(n).to_owned()),
            type_name: type_name.clone(),
            tag: tag.clone(),
            doc: doc.clone(),
        }));
    }
    Ok(out)
}

/// Parameters, results and variadic flag of a signature.
pub(crate) struct ExpandedSignature {
    pub params: Vec<FuncField>,
    pub results: Vec<FuncField>,
    pub variadic: bool,
}

pub(crate) fn expand_signature<E>(
    tree: &SyntaxTree,
    sig: SignatureId,
    mut render: impl FnMut(TypeId) -> Result<String, E>,
) -> Result<ExpandedSignature, E> {
    let a = &tree.arena;
    let sig = a.signatures[sig];
    let variadic = a
        .fields_list(sig.params.fields)
        .last()
        .is_some_and(|&f| a.fields[f].ellipsis_pos.is_some());
    let params = expand_func_fields(tree, sig.params, &mut render)?;
    let results = match sig.results {
        None => Vec::new(),
        Some(Results::Type(t)) => vec![FuncField {
            name: None,
            type_name: render(t)?,
        }],
        Some(Results::Params(list)) => expand_func_fields(tree, list, &mut render)?,
    };
    Ok(ExpandedSignature {
        params,
        results,
        variadic,
    })
}
