use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use go125_aster::{Config, File, Package};
use go125_syntax::ast::BinaryOp;
use go125_syntax::build::TreeBuilder;
use std::hint::black_box as bb;

// =============================================================================
// Synthetic packages
// =============================================================================

/// One file declaring `types` structs, each with a pointer method, a value
/// method and a function literal in the method body.
fn synthetic_file(package: &str, index: usize, types: usize) -> File {
    let mut b = TreeBuilder::new(package);
    b.import("fmt");
    b.import_named("str", "strings");
    for t in 0..types {
        let name = format!("T{index}_{t}");
        let int = b.named("int");
        let xy = b.field(&["X", "Y"], int);
        let string = b.named("string");
        let label = b.tagged_field(&["Label"], string, "`json:\"label\"`");
        let st = b.struct_type(vec![xy, label]);
        b.type_decl(&name, st);

        let recv = b.named(&name);
        let recv = b.pointer(recv);
        let int = b.named("int");
        let res = b.param(int);
        let sig = b.signature(vec![], vec![res]);
        let x = b.name_expr("x");
        let y = b.name_expr("y");
        let sum = b.binary(x, BinaryOp::Add, y);
        let ret = b.ret(vec![sum]);
        let inner = b.signature(vec![], vec![]);
        let lit = b.func_lit(inner, vec![]);
        let call = b.expr_stmt(lit);
        b.method("p", recv, "Sum", sig, vec![call, ret]);

        let value = b.named(&name);
        let sig = b.signature(vec![], vec![]);
        b.method("p", value, "Reset", sig, vec![]);
    }
    File::new(format!("f{index}.go"), b.finish())
}

fn synthetic_package(files: usize, types: usize) -> Package {
    let mut pkg = Package::new("bench");
    for i in 0..files {
        pkg.add_file(synthetic_file("bench", i, types))
            .expect("package clause matches");
    }
    pkg
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect");
    let config = Config::default();
    for &(files, types) in &[(1usize, 10usize), (8, 25), (32, 50)] {
        group.throughput(Throughput::Elements((files * types) as u64));
        group.bench_with_input(
            BenchmarkId::new("package", format!("{files}x{types}")),
            &(files, types),
            |b, &(files, types)| {
                b.iter_batched(
                    || synthetic_package(files, types),
                    |mut pkg| {
                        let stats = pkg.collect(&config).expect("collect");
                        bb(stats);
                        pkg
                    },
                    BatchSize::LargeInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut pkg = synthetic_package(16, 40);
    pkg.collect(&Config::default()).expect("collect");
    let first = pkg.files().next().expect("non-empty").id();
    let scope = pkg.scope(first).expect("file exists");

    c.bench_function("lookup_in_package/last_file", |b| {
        b.iter(|| bb(scope.lookup_in_package(bb("T15_39"))))
    });
    c.bench_function("lookup_in_package/miss", |b| {
        b.iter(|| bb(scope.lookup_in_package(bb("Missing"))))
    });
}

criterion_group!(benches, bench_collect, bench_lookup);
criterion_main!(benches);
