// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `bracken_property`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::string::String;
use std::sync::Once;

use bracken_dispatch::Outcome;
use bracken_property::{
    DuplicateHandling, EventDispatcher, EventDispatcherExt, Property, PropertyTable,
};

struct Elem {
    table: PropertyTable<Self>,
}

impl Elem {
    fn new() -> Self {
        Self {
            table: PropertyTable::new(),
        }
    }
}

impl EventDispatcher for Elem {
    fn property_table(&self) -> &PropertyTable<Self> {
        &self.table
    }

    fn property_table_mut(&mut self) -> &mut PropertyTable<Self> {
        &mut self.table
    }
}

fn registered(width: &Property<f64>) -> Elem {
    let mut element = Elem::new();
    width
        .register(&mut element, DuplicateHandling::Error)
        .unwrap();
    element
}

fn bench_property(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: PropertyTable<Elem>={} Property<f64>={} ErasedValue={}",
            core::mem::size_of::<PropertyTable<Elem>>(),
            core::mem::size_of::<Property<f64>>(),
            core::mem::size_of::<bracken_property::ErasedValue>(),
        );
    });

    let width = Property::new("width", 0.0_f64);

    let mut group = c.benchmark_group("property/read");

    group.bench_function("get", |b| {
        let mut element = registered(&width);
        element.set_property(&width, 100.0).unwrap();
        b.iter(|| black_box(*width.get(&element).unwrap()))
    });

    group.finish();

    let mut group = c.benchmark_group("property/mutate");

    group.bench_function("set/f64/unchanged", |b| {
        let mut element = registered(&width);
        element.set_property(&width, 100.0).unwrap();
        b.iter(|| black_box(width.set(&mut element, 100.0).unwrap()))
    });

    group.bench_function("set/f64/no_callback", |b| {
        b.iter_batched(
            || registered(&width),
            |mut element| {
                black_box(width.set(&mut element, 123.0).unwrap());
                black_box(element);
            },
            BatchSize::SmallInput,
        )
    });

    for callbacks in [1_u32, 4, 16] {
        group.bench_function(BenchmarkId::new("set/f64/callbacks", callbacks), |b| {
            b.iter_batched(
                || {
                    let mut element = registered(&width);
                    for _ in 0..callbacks {
                        element
                            .bind(&width, |_, new: &f64| {
                                black_box(*new);
                                Outcome::Continue
                            })
                            .unwrap();
                    }
                    element
                },
                |mut element| {
                    black_box(width.set(&mut element, 123.0).unwrap());
                    black_box(element);
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("set/f64/early_stop", |b| {
        b.iter_batched(
            || {
                let mut element = registered(&width);
                element.bind(&width, |_, _: &f64| Outcome::Stop).unwrap();
                for _ in 0..15 {
                    element
                        .bind(&width, |_, new: &f64| {
                            black_box(*new);
                            Outcome::Continue
                        })
                        .unwrap();
                }
                element
            },
            |mut element| {
                black_box(width.set(&mut element, 123.0).unwrap());
                black_box(element);
            },
            BatchSize::SmallInput,
        )
    });

    let text = Property::new("text", String::new());
    group.bench_function("set/string", |b| {
        b.iter_batched(
            || {
                let mut element = Elem::new();
                text.register(&mut element, DuplicateHandling::Error)
                    .unwrap();
                element
            },
            |mut element| {
                black_box(
                    text.set(&mut element, String::from("hello world"))
                        .unwrap(),
                );
                black_box(element);
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_property);
criterion_main!(benches);
