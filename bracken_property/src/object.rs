// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dispatcher capability and its convenience surface.
//!
//! [`EventDispatcher`] is the only thing the property core asks of a host
//! object: access to the per-instance [`PropertyTable`]. Any type providing
//! that gets the attribute-style convenience methods of
//! [`EventDispatcherExt`] for free.
//!
//! Where a dynamic host would intercept plain field syntax, this crate uses
//! explicit accessor calls; `obj.set_property(&width, 4.0)` is the spelled-
//! out form of `obj.width = 4.0`.

use bracken_dispatch::Outcome;

use crate::property::{Property, PropertyError, SetOutcome};
use crate::state::BindingId;
use crate::table::{DuplicateError, DuplicateHandling, PropertyTable};

/// A host object that can carry observable properties.
///
/// # Example
///
/// ```
/// use bracken_property::{EventDispatcher, PropertyTable};
///
/// struct Widget {
///     table: PropertyTable<Self>,
/// }
///
/// impl EventDispatcher for Widget {
///     fn property_table(&self) -> &PropertyTable<Self> {
///         &self.table
///     }
///
///     fn property_table_mut(&mut self) -> &mut PropertyTable<Self> {
///         &mut self.table
///     }
/// }
/// ```
pub trait EventDispatcher: Sized {
    /// Returns a reference to the instance's property table.
    fn property_table(&self) -> &PropertyTable<Self>;

    /// Returns a mutable reference to the instance's property table.
    fn property_table_mut(&mut self) -> &mut PropertyTable<Self>;
}

/// Extension methods for [`EventDispatcher`].
///
/// These forward to the [`Property`] accessors so call sites can read
/// instance-first: `widget.set_property(&width, 4.0)` instead of
/// `width.set(&mut widget, 4.0)`.
///
/// # Example
///
/// ```
/// use bracken_dispatch::Outcome;
/// use bracken_property::{
///     DuplicateHandling, EventDispatcher, EventDispatcherExt, Property, PropertyTable,
/// };
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
///
/// widget.register_property(&width, DuplicateHandling::Error).unwrap();
/// widget.bind(&width, |_widget, _new: &f64| Outcome::Continue).unwrap();
///
/// widget.set_property(&width, 4.0).unwrap();
/// assert_eq!(widget.get_property(&width), Ok(&4.0));
/// ```
pub trait EventDispatcherExt: EventDispatcher {
    /// Registers a property on this instance. See [`Property::register`].
    fn register_property<T: Clone + PartialEq + 'static>(
        &mut self,
        property: &Property<T>,
        handling: DuplicateHandling,
    ) -> Result<(), DuplicateError> {
        property.register(self, handling)
    }

    /// Reads a property's current value. See [`Property::get`].
    fn get_property<T: Clone + PartialEq + 'static>(
        &self,
        property: &Property<T>,
    ) -> Result<&T, PropertyError> {
        property.get(self)
    }

    /// Writes a property value, dispatching on change. See [`Property::set`].
    fn set_property<T: Clone + PartialEq + 'static>(
        &mut self,
        property: &Property<T>,
        value: T,
    ) -> Result<SetOutcome, PropertyError> {
        property.set(self, value)
    }

    /// Binds a change callback. See [`Property::bind`].
    fn bind<T, F>(&mut self, property: &Property<T>, callback: F) -> Result<BindingId, PropertyError>
    where
        T: Clone + PartialEq + 'static,
        F: Fn(&mut Self, &T) -> Outcome + 'static,
    {
        property.bind(self, callback)
    }

    /// Removes a bound callback. See [`Property::unbind`].
    fn unbind<T: Clone + PartialEq + 'static>(
        &mut self,
        property: &Property<T>,
        id: BindingId,
    ) -> Result<bool, PropertyError> {
        property.unbind(self, id)
    }

    /// Returns `true` if a property is registered under `name`.
    fn is_registered(&self, name: &str) -> bool {
        self.property_table().contains(name)
    }
}

// Blanket implementation for all EventDispatcher types.
impl<D: EventDispatcher> EventDispatcherExt for D {}
