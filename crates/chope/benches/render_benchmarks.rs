//! Resolve and render benchmarks.
//!
//! These benchmarks measure the two passes over a wide page:
//! variable substitution → text serialization
//!
//! Run with: `cargo bench -p chope --bench render_benchmarks`

use std::borrow::Cow;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use chope::{Attrs, Children, Element, Render, Resolve, Var, Values, css, values};

// ============================================================================
// Fixture - a list page with one templated row per item
// ============================================================================

fn row(index: usize) -> Element {
    Element::new("li", Attrs::new().selector(".row").attr("data-index", index))
        .expect("static attributes")
        .children(Var::with_default(format!("label-{index}"), "placeholder\ntext"))
}

fn page(rows: usize) -> Element {
    let items: Children = (0..rows).map(row).collect();
    Element::new("main", Attrs::new().selector("#page"))
        .expect("static attributes")
        .children(chope::children![
            css![
                ".row" => { color: Var::with_default("accent", "red"), margin: (0, 4) },
                "#page" => { font_size: "1.2rem" },
            ],
            Element::empty("ul").children(items),
        ])
}

fn labels(rows: usize) -> Values {
    let mut values = values! { "accent" => "blue" };
    for index in (0..rows).step_by(2) {
        values.insert(format!("label-{index}"), format!("item {index}").into());
    }
    values
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for rows in [10, 100, 1000] {
        let tree = page(rows);
        let values = labels(rows);

        group.bench_with_input(BenchmarkId::new("half_bound", rows), &rows, |b, _| {
            b.iter(|| black_box(&tree).set_vars(black_box(&values)))
        });

        // Nothing matches, so every node is returned borrowed.
        group.bench_with_input(BenchmarkId::new("unchanged", rows), &rows, |b, _| {
            b.iter(|| matches!(black_box(&tree).resolve(black_box(&Values::new())), Cow::Owned(_)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for rows in [10, 100, 1000] {
        let tree = page(rows).set_vars(&labels(rows));

        group.bench_with_input(BenchmarkId::new("indented", rows), &rows, |b, _| {
            b.iter(|| black_box(&tree).render(2))
        });

        group.bench_with_input(BenchmarkId::new("flat", rows), &rows, |b, _| {
            b.iter(|| black_box(&tree).render(0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_render);
criterion_main!(benches);
