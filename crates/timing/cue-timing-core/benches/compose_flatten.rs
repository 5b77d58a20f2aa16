use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cue_timing_core::{AnimationGroup, Entry, ParamId, RelativeInterval, ScalarAnimation, Value};

fn leaf(i: usize) -> Entry {
    ScalarAnimation::from_values(
        "obj".to_string(),
        ParamId::new(format!("p{i}")),
        Value::Float(0.0),
        Value::Float(1.0),
        0.0,
        1.0,
    )
    .unwrap()
    .into()
}

fn nested_tree(depth: usize, width: usize) -> Vec<Entry> {
    if depth == 0 {
        (0..width).map(leaf).collect()
    } else {
        (0..width)
            .map(|_| {
                Entry::from(AnimationGroup::new(nested_tree(depth - 1, width)))
                    .windowed(RelativeInterval::new(0.1, 0.9).unwrap())
            })
            .collect()
    }
}

fn bench_compose_flatten(c: &mut Criterion) {
    c.bench_function("flatten_nested_tree", |b| {
        b.iter(|| {
            let group = AnimationGroup::new(black_box(nested_tree(3, 4)));
            black_box(group.len())
        })
    });

    c.bench_function("rescale_flat_group", |b| {
        let group = AnimationGroup::new(nested_tree(2, 8));
        let window = RelativeInterval::new(0.25, 0.75).unwrap();
        b.iter(|| {
            let mut rescaled = group.clone();
            rescaled.rescale_by(black_box(&window));
            black_box(rescaled.len())
        })
    });
}

criterion_group!(benches, bench_compose_flatten);
criterion_main!(benches);
