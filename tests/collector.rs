use go125_aster::{
    collect, Config, DefKind, Error, File, Node, Package, Render, Shape, TypeNode,
};
use go125_syntax::ast::{ChanDir, GenDeclKind, InterfaceElem};
use go125_syntax::build::TreeBuilder;
use go125_syntax::{RenderError, Span, SyntaxTree};

fn collected(b: TreeBuilder) -> File {
    let mut file = File::new("x.go", b.finish());
    file.collect(&Config::default()).unwrap();
    file
}

fn type_named<'f>(file: &'f File, name: &str) -> &'f TypeNode {
    file.types()
        .find(|n| n.name() == Some(name))
        .unwrap_or_else(|| panic!("no type named {name}"))
}

#[test]
fn basic_and_alias_shapes() {
    let mut b = TreeBuilder::new("p");
    let int = b.named("int");
    b.type_decl("Count", int);
    let rune = b.named("rune");
    b.alias_decl("Char", rune);
    let other = b.named("Count");
    b.type_decl("Total", other);
    let qualified = b.qualified("time", "Duration");
    b.alias_decl("Delay", qualified);
    let file = collected(b);

    let count = type_named(&file, "Count");
    let Shape::Basic(basic) = &count.shape else {
        panic!("Count is {}", count.shape.kind_name());
    };
    assert_eq!(basic.name, "int");
    assert_eq!(basic.def, DefKind::Define);

    assert_eq!(type_named(&file, "Char").shape.def_kind(), Some(DefKind::Alias));

    let total = type_named(&file, "Total").as_alias().unwrap();
    assert_eq!(total.target, "Count");
    assert_eq!(total.package, None);

    let delay = type_named(&file, "Delay").as_alias().unwrap();
    assert_eq!(delay.def, DefKind::Alias);
    assert_eq!(delay.package.as_deref(), Some("time"));
    assert_eq!(delay.base, "Duration");
}

#[test]
fn container_shapes() {
    let mut b = TreeBuilder::new("p");
    let string = b.named("string");
    let int = b.named("int");
    let m = b.map(string, int);
    b.type_decl("Index", m);
    let byte = b.named("byte");
    let s = b.slice(byte);
    b.type_decl("Bytes", s);
    let f = b.named("float64");
    let arr = b.array("3", f);
    b.type_decl("Vec3", arr);
    let ev = b.named("Event");
    let ch = b.chan(ChanDir::Recv, ev);
    b.type_decl("Events", ch);
    let file = collected(b);

    let Shape::Map(index) = &type_named(&file, "Index").shape else {
        panic!("Index is not a map");
    };
    assert_eq!((index.key.as_str(), index.value.as_str()), ("string", "int"));

    let Shape::List(bytes) = &type_named(&file, "Bytes").shape else {
        panic!("Bytes is not a list");
    };
    assert!(bytes.is_slice());
    assert_eq!(bytes.elem, "byte");

    let Shape::List(vec3) = &type_named(&file, "Vec3").shape else {
        panic!("Vec3 is not a list");
    };
    assert_eq!(vec3.len.as_deref(), Some("3"));
    assert_eq!(vec3.elem, "float64");

    let Shape::Chan(events) = &type_named(&file, "Events").shape else {
        panic!("Events is not a chan");
    };
    assert_eq!(events.dir, ChanDir::Recv);
    assert_eq!(events.elem, "Event");
}

#[test]
fn interface_methods_and_embeds() {
    let mut b = TreeBuilder::new("p");
    let bytes = {
        let byte = b.named("byte");
        b.slice(byte)
    };
    let p = b.field(&["p"], bytes);
    let int = b.named("int");
    let n = b.field(&["n"], int);
    let err = b.named("error");
    let e = b.field(&["err"], err);
    let sig = b.signature(vec![p], vec![n, e]);
    let read = b.method_elem("Read", sig);
    let closer = b.qualified("io", "Closer");
    let iface = b.interface_type(vec![read, InterfaceElem::Embed(closer)]);
    b.type_decl("ReadCloser", iface);
    let file = collected(b);

    let shape = type_named(&file, "ReadCloser").as_interface().unwrap();
    assert_eq!(shape.embeds, ["io.Closer"]);
    assert_eq!(shape.methods.len(), 1);
    let read = &shape.methods[0];
    assert_eq!(read.name, "Read");
    assert_eq!(read.params[0].type_name, "[]byte");
    let results: Vec<_> = read.results.iter().map(|r| r.type_name.as_str()).collect();
    assert_eq!(results, ["int", "error"]);
}

#[test]
fn pointer_declarations_record_indirection() {
    let mut b = TreeBuilder::new("p");
    let st = b.struct_type(vec![]);
    let ptr = b.pointer(st);
    b.type_decl("Handle", ptr);
    let file = collected(b);

    let handle = type_named(&file, "Handle");
    assert_eq!(handle.indirection, 1);
    assert_eq!(handle.pos, file.syntax().arena.types.pos(st));
    assert!(handle.as_struct().is_some());
}

#[test]
fn struct_fields_keep_tags_and_docs() {
    let mut b = TreeBuilder::new("p");
    let string = b.named("string");
    let name = b.tagged_field(&["First", "Last"], string, "`json:\"name\"`");
    b.field_doc(name, &["Display name."]);
    let base = b.named("Base");
    let embedded = b.param(base);
    let st = b.struct_type(vec![name, embedded]);
    let spec = b.type_spec("User", st);
    let spec = b.with_doc(spec, &["User is an account."]);
    let group = b.doc(&["Group doc."]);
    b.gen_decl(GenDeclKind::Type, Some(group), vec![spec]);
    let file = collected(b);

    let user = type_named(&file, "User");
    assert_eq!(user.doc.as_deref(), Some("User is an account."));
    let fields = &user.as_struct().unwrap().fields;
    assert_eq!(fields.len(), 3);
    for f in &fields[..2] {
        assert_eq!(f.tag.as_deref(), Some("json:\"name\""));
        assert_eq!(f.doc.as_deref(), Some("Display name."));
    }
    assert!(fields[2].is_embedded());
    assert_eq!(fields[2].type_name, "Base");
}

#[test]
fn group_doc_is_the_fallback() {
    let mut b = TreeBuilder::new("p");
    let int = b.named("int");
    let a = b.type_spec("A", int);
    let int = b.named("int");
    let c = b.type_spec("C", int);
    let c = b.with_doc(c, &["C has its own."]);
    let group = b.doc(&["Shared."]);
    b.gen_decl(GenDeclKind::Type, Some(group), vec![a, c]);
    let file = collected(b);

    assert_eq!(type_named(&file, "A").doc.as_deref(), Some("Shared."));
    assert_eq!(type_named(&file, "C").doc.as_deref(), Some("C has its own."));
}

#[test]
fn var_with_struct_type() {
    let mut b = TreeBuilder::new("p");
    let int = b.named("int");
    let hits = b.field(&["Hits"], int);
    let st = b.struct_type(vec![hits]);
    b.var_decl(&["stats", "backup"], Some(st), vec![]);
    let plain = b.named("int");
    b.var_decl(&["n"], Some(plain), vec![]);
    let file = collected(b);

    assert_eq!(file.types().count(), 1);
    let stats = type_named(&file, "stats");
    assert_eq!(stats.shape.def_kind(), Some(DefKind::Undeclared));
    assert!(stats.as_struct().unwrap().field("Hits").is_some());
}

#[test]
fn functions_and_literals() {
    let mut b = TreeBuilder::new("p");
    let string = b.named("string");
    let args = b.variadic(&["args"], string);
    let int = b.named("int");
    let n = b.param(int);
    let sig = b.signature(vec![args], vec![n]);
    let inner_sig = b.signature(vec![], vec![]);
    let lit = b.func_lit(inner_sig, vec![]);
    let defer = b.expr_stmt(lit);
    b.func("Run", sig, vec![defer]);
    let file = collected(b);

    assert_eq!(file.funcs().count(), 2);
    let run = file.func_named("Run").unwrap().as_func().unwrap();
    assert!(run.variadic);
    assert_eq!(run.params[0].name.as_deref(), Some("args"));
    assert_eq!(run.params[0].type_name, "...string");
    assert!(run.body.is_some());
    assert!(!run.is_method());

    let anon = file.funcs().find(|f| f.is_anonymous()).unwrap();
    assert_eq!(anon.as_func().unwrap().params.len(), 0);
}

#[test]
fn local_type_declarations_are_collected() {
    let mut b = TreeBuilder::new("p");
    let int = b.named("int");
    let spec = b.type_spec("local", int);
    let decl = b.local_gen_decl(GenDeclKind::Type, None, vec![spec]);
    let stmt = b.decl_stmt(decl);
    let sig = b.signature(vec![], vec![]);
    b.func("f", sig, vec![stmt]);
    let file = collected(b);
    let local = type_named(&file, "local");
    assert!(local.local);
    assert!(file.scope().lookup_in_file("local").is_none());
}

#[test]
fn local_types_do_not_shadow_package_types() {
    // func helper() { type Point int }
    let mut b = TreeBuilder::new("p");
    let int = b.named("int");
    let spec = b.type_spec("Point", int);
    let decl = b.local_gen_decl(GenDeclKind::Type, None, vec![spec]);
    let stmt = b.decl_stmt(decl);
    let sig = b.signature(vec![], vec![]);
    b.func("helper", sig, vec![stmt]);
    // var setup = func() { type Point string }
    let string = b.named("string");
    let spec = b.type_spec("Point", string);
    let decl = b.local_gen_decl(GenDeclKind::Type, None, vec![spec]);
    let stmt = b.decl_stmt(decl);
    let sig = b.signature(vec![], vec![]);
    let lit = b.func_lit(sig, vec![stmt]);
    b.var_decl(&["setup"], None, vec![lit]);
    // type Point struct{ X int }
    // func (p *Point) Len() {}
    let int = b.named("int");
    let x = b.field(&["X"], int);
    let st = b.struct_type(vec![x]);
    b.type_decl("Point", st);
    let recv = b.named("Point");
    let recv = b.pointer(recv);
    let sig = b.signature(vec![], vec![]);
    b.method("p", recv, "Len", sig, vec![]);

    let mut pkg = Package::new("p");
    let id = pkg.add_file(File::new("x.go", b.finish())).unwrap();
    pkg.collect(&Config::default()).unwrap();

    let scope = pkg.scope(id).unwrap();
    let point = scope.lookup_in_package("Point").unwrap().node;
    assert!(!point.local);
    assert!(point.as_struct().is_some());
    assert_eq!(point.methods().len(), 1);
    assert_eq!(scope.lookup_in_file("*Point").unwrap().node.pos, point.pos);

    let file = pkg.file(id).unwrap();
    let locals: Vec<_> = file.types().filter(|n| n.local).collect();
    assert_eq!(locals.len(), 2);
    for local in locals {
        assert_eq!(local.name(), Some("Point"));
        assert!(local.methods().is_empty());
    }
}

#[test]
fn array_length_with_composite_literal() {
    // type B [len([3]int{})]byte
    let mut b = TreeBuilder::new("p");
    let int = b.named("int");
    let three = b.array("3", int);
    let lit = b.composite(Some(three), vec![]);
    let len = b.name_expr("len");
    let call = b.call(len, vec![lit]);
    let byte = b.named("byte");
    let arr = b.array_expr(call, byte);
    b.type_decl("B", arr);
    let st = b.struct_type(vec![]);
    b.type_decl("Other", st);
    let file = collected(b);

    let Shape::List(list) = &type_named(&file, "B").shape else {
        panic!("B is not a list");
    };
    assert_eq!(list.len.as_deref(), Some("len([3]int{})"));
    assert_eq!(list.elem, "byte");
    assert!(type_named(&file, "Other").as_struct().is_some());
}

#[test]
fn interpreted_tags_are_unescaped() {
    let mut b = TreeBuilder::new("p");
    let string = b.named("string");
    let name = b.tagged_field(&["Name"], string, r#""json:\"name\"""#);
    let st = b.struct_type(vec![name]);
    b.type_decl("User", st);
    let file = collected(b);

    let user = type_named(&file, "User").as_struct().unwrap();
    assert_eq!(user.fields[0].tag.as_deref(), Some(r#"json:"name""#));
}

#[test]
fn imports_are_recorded_in_order() {
    let mut b = TreeBuilder::new("p");
    b.import("fmt");
    b.import_named("str", "strings");
    b.import_dot("example.com/dsl");
    b.import_blank("embed");
    let mut file = File::new("x.go", b.finish());
    let stats = file.collect(&Config::default()).unwrap();
    assert_eq!(stats.imports, 4);

    let aliases: Vec<_> = file.imports().iter().map(|i| i.alias.as_str()).collect();
    assert_eq!(aliases, ["fmt", "str", ".", "_"]);
    let explicit: Vec<_> = file.imports().iter().map(|i| i.explicit).collect();
    assert_eq!(explicit, [false, true, true, true]);
    assert_eq!(file.imports()[2].path, "example.com/dsl");
}

#[test]
fn parenthesised_and_bad_types_are_skipped() {
    let mut b = TreeBuilder::new("p");
    let int = b.named("int");
    let paren = b.paren_type(int);
    b.type_decl("P", paren);
    b.bad_decl();
    let file = collected(b);
    assert_eq!(file.types().count(), 0);
}

#[test]
fn render_failure_propagates_without_fallback() {
    let mut b = TreeBuilder::new("p");
    let bad = b.bad_type();
    let f = b.field(&["X"], bad);
    let st = b.struct_type(vec![f]);
    b.type_decl("Broken", st);
    let tree = b.finish();

    let mut file = File::new("broken.go", tree);
    let err = file.collect(&Config::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Render {
            item: "type",
            source: RenderError::BadNode { .. },
            ..
        }
    ));
    assert!(err.to_string().contains("broken.go"));
    assert_eq!(file.types().count(), 0);

    let config = Config::default().with_render_fallback("invalid type");
    file.collect(&config).unwrap();
    let broken = type_named(&file, "Broken").as_struct().unwrap();
    assert_eq!(broken.fields[0].type_name, "invalid type");
}

#[test]
fn custom_renderer() {
    struct Upper;

    impl Render for Upper {
        fn render(&self, tree: &SyntaxTree, node: Node) -> Result<String, RenderError> {
            match node {
                Node::Type(id) => go125_aster::GoPrinter
                    .render(tree, Node::Type(id))
                    .map(|s| s.to_uppercase()),
                Node::Expr(_) => Err(RenderError::Unsupported {
                    kind: "expression",
                    span: Span::default(),
                }),
            }
        }
    }

    let mut b = TreeBuilder::new("p");
    let string = b.named("string");
    let f = b.field(&["Name"], string);
    let st = b.struct_type(vec![f]);
    b.type_decl("T", st);
    let mut file = File::new("x.go", b.finish());
    collect::collect_file_with(&mut file, &Config::default(), &Upper).unwrap();
    let t = type_named(&file, "T").as_struct().unwrap();
    assert_eq!(t.fields[0].type_name, "STRING");
}

#[test]
fn format_renders_nodes() {
    let mut b = TreeBuilder::new("p");
    let string = b.named("string");
    let item = b.qualified("pkg", "Item");
    let ptr = b.pointer(item);
    let list = b.slice(ptr);
    let m = b.map(string, list);
    let bad = b.bad_type();
    let file = File::new("x.go", b.finish());
    assert_eq!(file.format(m).unwrap(), "map[string][]*pkg.Item");
    assert!(file.format(bad).is_err());
    assert_eq!(file.try_format(bad, "?"), "?");
}

#[test]
fn package_clause_must_match() {
    let b = TreeBuilder::new("other");
    let mut pkg = Package::new("p");
    let err = pkg.add_file(File::new("o.go", b.finish())).unwrap_err();
    assert!(matches!(err, Error::PackageMismatch { ref found, .. } if found == "other"));
    assert!(pkg.is_empty());
}

#[test]
fn module_rejects_duplicate_paths() {
    let mut module = go125_aster::Module::new("example.com");
    module.add_package("example.com/a", Package::new("a")).unwrap();
    let err = module
        .add_package("example.com/a", Package::new("b"))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicatePackage(ref path) if path == "example.com/a"));
    assert_eq!(module.packages_named("a").count(), 1);
}

#[test]
fn file_added_after_collection_is_rehomed() {
    let mut first = TreeBuilder::new("p");
    let int = first.named("int");
    first.type_decl("A", int);
    let mut pkg = Package::new("p");
    pkg.add_file(File::new("a.go", first.finish())).unwrap();

    let mut b = TreeBuilder::new("p");
    let st = b.struct_type(vec![]);
    b.type_decl("T", st);
    let recv = b.named("T");
    let recv = b.pointer(recv);
    let sig = b.signature(vec![], vec![]);
    b.method("t", recv, "M", sig, vec![]);
    let mut file = File::new("t.go", b.finish());
    file.collect(&Config::default()).unwrap();

    let id = pkg.add_file(file).unwrap();
    let file = pkg.file(id).unwrap();
    let t = type_named(file, "T");
    assert_eq!(t.file, id);
    assert_eq!(t.methods()[0].receiver.file, id);
    assert_eq!(t.methods()[0].func.file, id);
}
