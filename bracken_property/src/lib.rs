// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Property: observable properties with ordered change callbacks.
//!
//! This crate provides named, typed properties that can be attached to host
//! objects. Writing a new value to a property notifies a list of registered
//! callbacks, in order, and any callback can halt further notification. It
//! is the state/reaction decoupling layer that declarative UI and event
//! frameworks build on.
//!
//! ## Core Concepts
//!
//! ### Descriptors and per-instance state
//!
//! A [`Property<T>`] is a reusable descriptor: a name and a default value.
//! Each host instance owns a [`PropertyTable`] mapping names to live
//! [`PropertyState`]s (current value plus ordered callback list). The
//! descriptor itself carries no per-instance data, so instances can be
//! created and dropped freely without any descriptor-side cleanup.
//!
//! ### The accessor protocol
//!
//! - [`Property::register`] creates the per-instance state, initialized to
//!   the default value, with an empty callback list. Double registration is
//!   governed by [`DuplicateHandling`].
//! - [`Property::get`] reads the current value.
//! - [`Property::set`] is the change-gated write: a value equal to the
//!   stored one is ignored entirely; a differing value is committed first
//!   and then dispatched.
//!
//! ### Dispatch
//!
//! Dispatch walks a snapshot of the callback list taken when the pass
//! begins, strictly in binding order, invoking each callback with
//! `(instance, new_value)`. A callback returning
//! [`Outcome::Stop`](bracken_dispatch::Outcome::Stop) consumes the change
//! and suppresses the callbacks after it. Because the pass iterates a
//! snapshot, callbacks may freely bind, unbind, or re-enter `set`.
//!
//! ## Quick Start
//!
//! ```
//! use bracken_dispatch::Outcome;
//! use bracken_property::{
//!     DuplicateHandling, EventDispatcher, EventDispatcherExt, Property, PropertyTable,
//!     SetOutcome,
//! };
//!
//! struct Slider {
//!     table: PropertyTable<Self>,
//! }
//!
//! impl EventDispatcher for Slider {
//!     fn property_table(&self) -> &PropertyTable<Self> {
//!         &self.table
//!     }
//!     fn property_table_mut(&mut self) -> &mut PropertyTable<Self> {
//!         &mut self.table
//!     }
//! }
//!
//! let value = Property::new("value", 0.0_f64);
//! let mut slider = Slider { table: PropertyTable::new() };
//! slider.register_property(&value, DuplicateHandling::Error).unwrap();
//!
//! // React to changes; returning Stop would consume the change.
//! slider.bind(&value, |_slider, new: &f64| {
//!     assert!(new.is_finite());
//!     Outcome::Continue
//! }).unwrap();
//!
//! assert_eq!(slider.set_property(&value, 0.5), Ok(SetOutcome::Changed));
//!
//! // The change gate: writing the same value again does nothing.
//! assert_eq!(slider.set_property(&value, 0.5), Ok(SetOutcome::Unchanged));
//! ```
//!
//! ## Concurrency
//!
//! Everything here is single-threaded and synchronous: `get`, `set`, and
//! dispatch run to completion on the calling thread, and callback handles
//! are `Rc`-based (not `Send`). Hosts that share instances across threads
//! must add their own synchronization around the whole
//! check-write-dispatch sequence.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod object;
mod property;
mod state;
mod table;
mod value;

pub use object::{EventDispatcher, EventDispatcherExt};
pub use property::{Property, PropertyError, SetOutcome};
pub use state::{BindingId, PropertyState};
pub use table::{DuplicateError, DuplicateHandling, PropertyTable};
pub use value::ErasedValue;
