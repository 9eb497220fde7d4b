// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance property tables.
//!
//! Every dispatcher instance owns one [`PropertyTable`]: a mapping from
//! property name to that instance's [`PropertyState`]. The table is created
//! with the instance and destroyed with it; nothing else indexes the
//! instance's states, so no cleanup beyond dropping the instance is needed.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::state::PropertyState;
use crate::value::ErasedValue;

/// How to handle registering a property name that is already present.
///
/// Passed to [`Property::register`](crate::Property::register). The silent
/// overwrite of the reference design is available but opt-in; rejecting the
/// duplicate is the default.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum DuplicateHandling {
    /// Replace the existing state, discarding its current value and all of
    /// its bound callbacks.
    Overwrite,
    /// Leave the existing state untouched and return [`DuplicateError`].
    #[default]
    Error,
}

/// Error returned when a property name is already registered on an instance
/// and the handling is [`DuplicateHandling::Error`].
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct DuplicateError {
    /// The property name that was already present.
    pub name: &'static str,
}

impl fmt::Debug for DuplicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DuplicateError {{ name: {:?} }}", self.name)
    }
}

impl fmt::Display for DuplicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "property {:?} is already registered", self.name)
    }
}

impl core::error::Error for DuplicateError {}

/// Per-instance storage mapping property names to live states.
///
/// `D` is the owning dispatcher type; it flows through to the callback
/// signatures stored in each state.
///
/// # Example
///
/// ```
/// use bracken_property::{DuplicateHandling, EventDispatcher, Property, PropertyTable};
///
/// struct Widget {
///     table: PropertyTable<Self>,
/// }
///
/// impl EventDispatcher for Widget {
///     fn property_table(&self) -> &PropertyTable<Self> {
///         &self.table
///     }
///     fn property_table_mut(&mut self) -> &mut PropertyTable<Self> {
///         &mut self.table
///     }
/// }
///
/// let width = Property::new("width", 0.0_f64);
/// let mut widget = Widget { table: PropertyTable::new() };
/// width.register(&mut widget, DuplicateHandling::Error).unwrap();
///
/// assert!(widget.property_table().contains("width"));
/// assert_eq!(widget.property_table().len(), 1);
/// ```
pub struct PropertyTable<D> {
    states: HashMap<&'static str, PropertyState<D>>,
}

impl<D> PropertyTable<D> {
    /// Creates a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Returns the number of registered properties.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if no properties are registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns `true` if a property is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Returns the registered property names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.states.keys().copied()
    }

    /// Returns the state registered under `name`.
    #[must_use]
    pub fn state(&self, name: &str) -> Option<&PropertyState<D>> {
        self.states.get(name)
    }

    /// Returns the state registered under `name`, mutably.
    #[must_use]
    pub fn state_mut(&mut self, name: &str) -> Option<&mut PropertyState<D>> {
        self.states.get_mut(name)
    }

    /// Inserts a fresh state for `name`, honoring the duplicate policy.
    pub(crate) fn insert(
        &mut self,
        name: &'static str,
        default: ErasedValue,
        handling: DuplicateHandling,
    ) -> Result<(), DuplicateError> {
        if handling == DuplicateHandling::Error && self.states.contains_key(name) {
            return Err(DuplicateError { name });
        }
        self.states.insert(name, PropertyState::new(name, default));
        Ok(())
    }
}

impl<D> Default for PropertyTable<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for PropertyTable<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyTable")
            .field("count", &self.states.len())
            .field("names", &self.states.keys().collect::<Vec<_>>())
            .finish()
    }
}
