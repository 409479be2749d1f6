#![forbid(unsafe_code)]

//! Benchmarks for the scroll table.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use scroll_table::column::DropdownOptions;
use scroll_table::editor::EditableCell;
use scroll_table::grid::Grid;
use scroll_table::{ColumnKind, KeyMsg, KeyType, ScrollTable};

fn build_rows(count: usize) -> Vec<Vec<String>> {
    (0..count)
        .map(|i| {
            vec![
                format!("Person {i}"),
                (20 + i % 50).to_string(),
                ["North", "South", "East", "West"][i % 4].to_string(),
                ["Active", "Inactive", "Pending"][i % 3].to_string(),
                format!("Note for row {i}"),
            ]
        })
        .collect()
}

fn build_table(count: usize) -> ScrollTable {
    ScrollTable::new(["Name", "Age", "Region", "Status", "Notes"], build_rows(count))
        .column_kinds([
            ColumnKind::Editable,
            ColumnKind::Editable,
            ColumnKind::Text,
            ColumnKind::Dropdown,
            ColumnKind::Editable,
        ])
        .dropdown_options(DropdownOptions::new().with(3, ["Active", "Inactive", "Pending"]))
        .max_width(60)
        .max_height(20)
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_table/view");
    for count in [10_usize, 100, 1000] {
        let table = build_table(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("view", count), &table, |b, table| {
            b.iter(|| black_box(table.view()));
        });
    }

    group.bench_function("view_with_popup", |b| {
        let mut table = build_table(100);
        table.set_cursor(5, 3);
        table.update(&KeyMsg::from_type(KeyType::Enter));
        b.iter(|| black_box(table.view()));
    });
    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_table/navigate");
    let table = build_table(1000);

    group.bench_function("page_through", |b| {
        let down = KeyMsg::from_type(KeyType::PgDown);
        let up = KeyMsg::from_type(KeyType::PgUp);
        b.iter_batched(
            || table.clone(),
            |mut table| {
                for _ in 0..50 {
                    table.update(&down);
                }
                for _ in 0..50 {
                    table.update(&up);
                }
                black_box(table.cursor());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("sweep_columns", |b| {
        let right = KeyMsg::from_type(KeyType::Right);
        let home = KeyMsg::from_type(KeyType::Home);
        b.iter_batched(
            || table.clone(),
            |mut table| {
                for _ in 0..5 {
                    table.update(&right);
                }
                table.update(&home);
                black_box(table.scroll());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_editing(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_table/edit");

    group.bench_function("type_and_commit", |b| {
        let table = build_table(1000);
        let enter = KeyMsg::from_type(KeyType::Enter);
        b.iter_batched(
            || table.clone(),
            |mut table| {
                table.update(&enter);
                for c in "edited".chars() {
                    table.update(&KeyMsg::from_char(c));
                }
                black_box(table.update(&enter));
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("editor_layout", |b| {
        let cell = EditableCell::new("A fairly long value that needs to scroll inside the cell");
        b.iter(|| black_box(cell.layout(12)));
    });

    group.bench_function("column_widths", |b| {
        let grid = Grid::new(["Name", "Age", "Region", "Status", "Notes"], build_rows(1000));
        b.iter(|| black_box(grid.column_widths()));
    });
    group.finish();
}

criterion_group!(benches, bench_view, bench_navigation, bench_editing);
criterion_main!(benches);
