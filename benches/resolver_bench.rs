//! Resolver benchmarks.
//!
//! Measures full-name resolution over long member chains and enclosing-function
//! lookup from deeply nested nodes.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jsnames::ast::node::{CallExpression, Identifier, MemberExpression, Wrapper};
use jsnames::ast::{NodeBase, NodeList};
use jsnames::{
    Node, NodeArena, NodeIndex, resolve_enclosing_function_name, resolve_full_name,
    resolve_partial_name,
};

/// `s0.s1.s2...sN()`, returns (arena, call)
fn build_chain(segments: usize) -> (NodeArena, NodeIndex) {
    let mut arena = NodeArena::with_capacity(segments * 2 + 1);
    let mut current = arena.add(Node::Identifier(Identifier::new("s0", 0, 0)));
    for i in 1..segments {
        let property = arena.add(Node::Identifier(Identifier::new(format!("s{i}"), 0, 0)));
        current = arena.add(Node::MemberExpression(MemberExpression {
            base: NodeBase::default(),
            object: current,
            property,
            computed: false,
        }));
    }
    let call = arena.add(Node::CallExpression(CallExpression {
        base: NodeBase::default(),
        callee: current,
        arguments: NodeList::new(),
    }));
    (arena, call)
}

/// An identifier under `depth` nested expression statements, none of them a
/// function, so the lookup walks to the root.
fn build_deep(depth: usize) -> (NodeArena, NodeIndex) {
    let mut arena = NodeArena::with_capacity(depth + 1);
    let leaf = arena.add(Node::Identifier(Identifier::new("leaf", 0, 0)));
    let mut current = leaf;
    for _ in 0..depth {
        current = arena.add(Node::ExpressionStatement(Wrapper {
            base: NodeBase::default(),
            expression: current,
        }));
    }
    (arena, leaf)
}

fn bench_full_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_full_name");
    for segments in [2, 8, 32, 128] {
        let (arena, call) = build_chain(segments);
        group.bench_with_input(BenchmarkId::from_parameter(segments), &call, |b, &call| {
            b.iter(|| black_box(resolve_full_name(&arena, black_box(call))))
        });
    }
    group.finish();
}

fn bench_partial_name(c: &mut Criterion) {
    let (arena, call) = build_chain(8);
    c.bench_function("resolve_partial_name", |b| {
        b.iter(|| black_box(resolve_partial_name(&arena, black_box(call))))
    });
}

fn bench_enclosing_function(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_enclosing_function_name");
    for depth in [10, 100, 1000] {
        let (arena, leaf) = build_deep(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &leaf, |b, &leaf| {
            b.iter(|| black_box(resolve_enclosing_function_name(&arena, black_box(leaf))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_full_name,
    bench_partial_name,
    bench_enclosing_function
);
criterion_main!(benches);
