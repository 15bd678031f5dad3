use std::collections::HashSet;

use go125_aster::field::{expand_func_fields, expand_struct_fields};
use go125_aster::{Config, File, GoPrinter, Node, Render};
use go125_syntax::ast::{FieldId, FieldList, Type, TypeId};
use go125_syntax::build::TreeBuilder;
use go125_syntax::{RenderError, SyntaxTree};
use proptest::prelude::*;

const TYPES: &[&str] = &["int", "string", "Point", "error"];

fn render(tree: &SyntaxTree) -> impl FnMut(TypeId) -> Result<String, RenderError> + '_ {
    move |id| GoPrinter.render(tree, Node::Type(id))
}

fn field_list(tree: &SyntaxTree, ty: TypeId) -> FieldList {
    match tree.arena.types[ty] {
        Type::Struct { fields } => fields,
        _ => unreachable!("built as a struct"),
    }
}

/// Struct whose groups have the given name counts, with type index and tag flag.
fn build(groups: &[(usize, usize, bool)]) -> (SyntaxTree, TypeId) {
    let mut b = TreeBuilder::new("p");
    let mut ids: Vec<FieldId> = Vec::new();
    for (g, &(count, ty, tagged)) in groups.iter().enumerate() {
        let names: Vec<String> = (0..count).map(|i| format!("F{g}_{i}")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let typ = b.named(TYPES[ty]);
        let id = if tagged {
            b.tagged_field(&names, typ, &format!("`k:\"{g}\"`"))
        } else {
            b.field(&names, typ)
        };
        ids.push(id);
    }
    let st = b.struct_type(ids);
    (b.finish(), st)
}

fn groups() -> impl Strategy<Value = Vec<(usize, usize, bool)>> {
    prop::collection::vec((0usize..5, 0..TYPES.len(), any::<bool>()), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]
    #[test]
    fn each_name_becomes_one_field(groups in groups()) {
        let (tree, st) = build(&groups);
        let fields = expand_struct_fields(&tree, field_list(&tree, st), render(&tree)).unwrap();

        let expected: usize = groups.iter().map(|&(n, _, _)| n.max(1)).sum();
        prop_assert_eq!(fields.len(), expected);

        let mut it = fields.iter();
        for (g, &(count, ty, tagged)) in groups.iter().enumerate() {
            for i in 0..count.max(1) {
                let f = it.next().unwrap();
                prop_assert_eq!(&f.type_name, TYPES[ty]);
                let tag = tagged.then(|| format!("k:\"{g}\""));
                prop_assert_eq!(&f.tag, &tag);
                if count == 0 {
                    prop_assert!(f.is_embedded());
                } else {
                    prop_assert_eq!(f.name.clone(), Some(format!("F{g}_{i}")));
                }
            }
        }
    }

    #[test]
    fn params_expand_like_struct_fields(groups in groups()) {
        let (tree, st) = build(&groups);
        let list = field_list(&tree, st);
        let params = expand_func_fields(&tree, list, render(&tree)).unwrap();
        let fields = expand_struct_fields(&tree, list, render(&tree)).unwrap();
        prop_assert_eq!(params.len(), fields.len());
        for (p, f) in params.iter().zip(&fields) {
            prop_assert_eq!(&p.name, &f.name);
            prop_assert_eq!(&p.type_name, &f.type_name);
        }
    }

    #[test]
    fn table_positions_are_unique(decls in prop::collection::vec((0usize..3, 0..TYPES.len()), 1..12)) {
        let mut b = TreeBuilder::new("p");
        for (i, &(kind, ty)) in decls.iter().enumerate() {
            let name = format!("T{i}");
            let elem = b.named(TYPES[ty]);
            match kind {
                0 => {
                    let f = b.field(&["V"], elem);
                    let st = b.struct_type(vec![f]);
                    b.type_decl(&name, st);
                }
                1 => {
                    let s = b.slice(elem);
                    b.type_decl(&name, s);
                }
                _ => {
                    let p = b.param(elem);
                    let sig = b.signature(vec![p], vec![]);
                    b.func(&name, sig, vec![]);
                }
            }
        }
        let mut file = File::new("gen.go", b.finish());
        let stats = file.collect(&Config::default()).unwrap();
        prop_assert_eq!(stats.duplicates, 0);
        prop_assert_eq!(stats.types + stats.funcs, decls.len());

        let positions: HashSet<_> = file.types().chain(file.funcs()).map(|n| n.pos).collect();
        prop_assert_eq!(positions.len(), decls.len());
    }
}
