// Benchmark for neighbor-bound computation and resize commits
// Run with: cargo bench --bench collision_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use instello_timetable::models::slot::Slot;
use instello_timetable::models::weekday::Weekday;
use instello_timetable::services::timetable::{
    resize_bounds, ResizeHandle, TimetableConfig, TimetableEditor,
};

/// Fill every day with one-period slots on alternating periods
fn sparse_week(number_of_hours: u8) -> Vec<Slot> {
    Weekday::ALL
        .iter()
        .flat_map(|&day| {
            (1..=number_of_hours)
                .step_by(2)
                .map(move |period| Slot::new(day, period, period, "maths", "Maths"))
        })
        .collect()
}

fn bench_resize_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_bounds");

    for hours in [4u8, 8, 12].iter() {
        let slots = sparse_week(*hours);
        let current = slots[slots.len() / 2].clone();
        group.bench_with_input(BenchmarkId::new("full_week", hours), hours, |b, &hours| {
            b.iter(|| resize_bounds(black_box(&current), black_box(&slots), black_box(hours)));
        });
    }

    group.finish();
}

fn bench_resize_slot(c: &mut Criterion) {
    c.bench_function("resize_slot_grow_and_shrink", |b| {
        let mut editor = TimetableEditor::new(
            TimetableConfig {
                number_of_hours: 12,
                editable: true,
            },
            vec![Slot::new(Weekday::Wednesday, 3, 3, "maths", "Maths")],
        );
        let id = editor.slots()[0].id.clone();
        b.iter(|| {
            editor.resize_slot(black_box(&id), ResizeHandle::Right, 6);
            editor.resize_slot(black_box(&id), ResizeHandle::Right, -6);
        });
    });
}

criterion_group!(benches, bench_resize_bounds, bench_resize_slot);
criterion_main!(benches);
