// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable property basics.
//!
//! Demonstrate registering properties on a host object, binding ordered
//! change callbacks, and consuming a change with an early stop.
//!
//! Run:
//! - `cargo run -p bracken_demos --example observable_basics`

use bracken_dispatch::Outcome;
use bracken_property::{
    DuplicateHandling, EventDispatcher, EventDispatcherExt, Property, PropertyTable, SetOutcome,
};

struct Slider {
    table: PropertyTable<Self>,
}

impl EventDispatcher for Slider {
    fn property_table(&self) -> &PropertyTable<Self> {
        &self.table
    }

    fn property_table_mut(&mut self) -> &mut PropertyTable<Self> {
        &mut self.table
    }
}

fn main() {
    let value = Property::new("value", 0.0_f64);
    let label = Property::new("label", String::from("volume"));

    let mut slider = Slider {
        table: PropertyTable::new(),
    };
    value
        .register(&mut slider, DuplicateHandling::Error)
        .unwrap();
    label
        .register(&mut slider, DuplicateHandling::Error)
        .unwrap();

    // Callbacks run in binding order. The first one consumes out-of-range
    // writes, so the logger after it never sees one. The value itself is
    // committed before dispatch either way.
    slider
        .bind(&value, |_slider, new: &f64| {
            if !(0.0..=1.0).contains(new) {
                println!("guard: {new} is out of range, consuming");
                return Outcome::Stop;
            }
            Outcome::Continue
        })
        .unwrap();
    slider
        .bind(&value, |_slider, new: &f64| {
            println!("logger: value changed to {new}");
            Outcome::Continue
        })
        .unwrap();

    for next in [0.25, 0.25, 1.5, 0.75] {
        match slider.set_property(&value, next).unwrap() {
            SetOutcome::Changed => println!("set {next}: changed"),
            SetOutcome::Unchanged => println!("set {next}: already current, no dispatch"),
            SetOutcome::Consumed => println!("set {next}: consumed by the guard"),
        }
    }

    slider
        .set_property(&label, String::from("master volume"))
        .unwrap();
    println!(
        "final: {} = {}",
        slider.get_property(&label).unwrap(),
        slider.get_property(&value).unwrap()
    );
}
