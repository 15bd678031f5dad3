use go125_aster::{BindStats, Config, File, Package};
use go125_syntax::ast::TypeId;
use go125_syntax::build::TreeBuilder;

fn empty_sig(b: &mut TreeBuilder) -> go125_syntax::ast::SignatureId {
    b.signature(vec![], vec![])
}

fn pointer_to(b: &mut TreeBuilder, name: &str) -> TypeId {
    let t = b.named(name);
    b.pointer(t)
}

fn staged() -> Config {
    Config::default().with_bind_methods(false)
}

#[test]
fn second_run_appends_nothing() {
    let mut b = TreeBuilder::new("p");
    let st = b.struct_type(vec![]);
    b.type_decl("T", st);
    let recv = pointer_to(&mut b, "T");
    let sig = empty_sig(&mut b);
    b.method("t", recv, "M", sig, vec![]);

    let mut pkg = Package::new("p");
    let id = pkg.add_file(File::new("t.go", b.finish())).unwrap();
    pkg.collect(&staged()).unwrap();

    let first = pkg.bind_methods();
    assert_eq!(first.bound, 1);
    let second = pkg.bind_methods();
    assert_eq!(
        second,
        BindStats {
            already_bound: 1,
            ..BindStats::default()
        }
    );

    let file = pkg.file(id).unwrap();
    let t = file.types().next().unwrap();
    assert_eq!(t.methods().len(), 1);
}

#[test]
fn value_and_qualified_receivers_are_skipped() {
    let mut b = TreeBuilder::new("p");
    let st = b.struct_type(vec![]);
    b.type_decl("T", st);

    let value = b.named("T");
    let sig = empty_sig(&mut b);
    b.method("t", value, "Value", sig, vec![]);

    let qualified = b.qualified("q", "T");
    let qualified = b.pointer(qualified);
    let sig = empty_sig(&mut b);
    b.method("t", qualified, "Foreign", sig, vec![]);

    let double = pointer_to(&mut b, "T");
    let double = b.pointer(double);
    let sig = empty_sig(&mut b);
    b.method("t", double, "Double", sig, vec![]);

    let param = b.named("K");
    let generic = b.instantiated("T", vec![param]);
    let generic = b.pointer(generic);
    let sig = empty_sig(&mut b);
    b.method("t", generic, "Generic", sig, vec![]);

    let mut file = File::new("t.go", b.finish());
    file.collect(&staged()).unwrap();
    let stats = file.bind_methods();
    assert_eq!(stats.bound, 0);
    assert_eq!(stats.skipped_receivers, 4);

    let t = file.types().next().unwrap();
    assert!(t.methods().is_empty());
    assert!(file.funcs().all(|f| f.as_func().unwrap().binding().is_none()));
}

#[test]
fn unknown_receiver_is_counted() {
    let mut b = TreeBuilder::new("p");
    let recv = pointer_to(&mut b, "Missing");
    let sig = empty_sig(&mut b);
    b.method("m", recv, "M", sig, vec![]);

    let mut pkg = Package::new("p");
    pkg.add_file(File::new("m.go", b.finish())).unwrap();
    pkg.collect(&staged()).unwrap();
    let stats = pkg.bind_methods();
    assert_eq!(stats.unresolved, 1);
    assert_eq!(stats.bound, 0);
}

#[test]
fn named_func_type_receives_methods() {
    // type HandlerFunc func(int)
    // func (f *HandlerFunc) Serve() {}
    let mut b = TreeBuilder::new("p");
    let int = b.named("int");
    let arg = b.param(int);
    let sig = b.signature(vec![arg], vec![]);
    let func = b.func_type(sig);
    b.type_decl("HandlerFunc", func);
    let recv = pointer_to(&mut b, "HandlerFunc");
    let sig = empty_sig(&mut b);
    b.method("f", recv, "Serve", sig, vec![]);

    let mut file = File::new("h.go", b.finish());
    file.collect(&Config::default()).unwrap();

    let handler = file.types().next().unwrap();
    assert_eq!(handler.name(), Some("HandlerFunc"));
    let shape = handler.as_func().unwrap();
    assert_eq!(shape.params.len(), 1);
    assert!(shape.body.is_none());
    assert_eq!(handler.method("Serve").unwrap().receiver, handler.type_ref());
}

#[test]
fn receiver_may_be_declared_after_the_method() {
    let mut b = TreeBuilder::new("p");
    let recv = pointer_to(&mut b, "Late");
    let sig = empty_sig(&mut b);
    b.method("l", recv, "Early", sig, vec![]);
    let st = b.struct_type(vec![]);
    b.type_decl("Late", st);

    let mut file = File::new("late.go", b.finish());
    file.collect(&Config::default()).unwrap();
    let late = file.types().next().unwrap();
    assert_eq!(late.methods().len(), 1);
    assert_eq!(late.methods()[0].name, "Early");
}

#[test]
fn methods_keep_their_doc() {
    let mut b = TreeBuilder::new("p");
    let st = b.struct_type(vec![]);
    b.type_decl("T", st);
    let doc = b.doc(&["Close releases the handle."]);
    let recv = pointer_to(&mut b, "T");
    let recv = b.field(&["t"], recv);
    let sig = empty_sig(&mut b);
    b.func_decl(Some(doc), Some(recv), "Close", sig, Some(vec![]));

    let mut file = File::new("t.go", b.finish());
    file.collect(&Config::default()).unwrap();
    let t = file.types().next().unwrap();
    let close = t.method("Close").unwrap();
    assert_eq!(close.doc.as_deref(), Some("Close releases the handle."));
    assert_eq!(file.func(close.func.pos).unwrap().name(), Some("Close"));
}
