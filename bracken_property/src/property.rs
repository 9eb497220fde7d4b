// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable property descriptors and the accessor protocol.
//!
//! A [`Property<T>`] is a reusable descriptor: a name plus a default value,
//! shared by every dispatcher instance that registers it. The descriptor
//! holds no per-instance data; each instance's current value and callback
//! list live in the instance's own [`PropertyTable`](crate::PropertyTable).
//!
//! The accessor protocol is:
//!
//! - [`Property::register`] — create the per-instance state with the default
//!   value and an empty callback list.
//! - [`Property::get`] — read the current value.
//! - [`Property::set`] — the change-gated write: equal values are ignored;
//!   a differing value is committed to storage first and then dispatched to
//!   the callbacks bound at that moment, in insertion order, until one of
//!   them returns [`Outcome::Stop`].

use alloc::rc::Rc;
use core::fmt;

use bracken_dispatch::Outcome;

use crate::object::EventDispatcher;
use crate::state::{BindingId, ErasedCallback};
use crate::table::{DuplicateError, DuplicateHandling};
use crate::value::ErasedValue;

/// Error returned by the property accessors.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum PropertyError {
    /// The property name was never registered on this instance.
    Unregistered {
        /// The property name that was looked up.
        name: &'static str,
    },
    /// The state registered under this name holds a value of a different
    /// type.
    ///
    /// Reachable only after a [`DuplicateHandling::Overwrite`] registration
    /// replaced the state with one of another value type.
    TypeMismatch {
        /// The property name that was looked up.
        name: &'static str,
    },
}

impl fmt::Debug for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unregistered { name } => write!(f, "Unregistered {{ name: {name:?} }}"),
            Self::TypeMismatch { name } => write!(f, "TypeMismatch {{ name: {name:?} }}"),
        }
    }
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unregistered { name } => {
                write!(f, "property {name:?} is not registered on this instance")
            }
            Self::TypeMismatch { name } => {
                write!(f, "property {name:?} holds a value of a different type")
            }
        }
    }
}

impl core::error::Error for PropertyError {}

/// What a write accessor call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SetOutcome {
    /// The new value equaled the stored value; nothing was written and no
    /// callback ran.
    Unchanged,
    /// The value was committed and every bound callback ran.
    Changed,
    /// The value was committed and a callback returned
    /// [`Outcome::Stop`], suppressing the callbacks after it.
    Consumed,
}

impl SetOutcome {
    /// Returns `true` if the stored value was overwritten.
    #[must_use]
    pub fn changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// A named, observable attribute descriptor with a default value.
///
/// One `Property<T>` is typically created per attribute of a schema and
/// registered on every instance that declares it. The descriptor is bound to
/// exactly one name for its whole lifetime, so registering it on further
/// instances can never corrupt the diagnostics of earlier ones.
///
/// # Example
///
/// ```
/// use bracken_dispatch::Outcome;
/// use bracken_property::{
///     DuplicateHandling, EventDispatcher, Property, PropertyTable, SetOutcome,
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
/// let visible = Property::new("visible", false);
/// let mut widget = Widget { table: PropertyTable::new() };
/// visible.register(&mut widget, DuplicateHandling::Error).unwrap();
///
/// assert_eq!(visible.get(&widget), Ok(&false));
///
/// visible.bind(&mut widget, |_widget, _shown: &bool| Outcome::Continue).unwrap();
///
/// assert_eq!(visible.set(&mut widget, true), Ok(SetOutcome::Changed));
/// assert_eq!(visible.set(&mut widget, true), Ok(SetOutcome::Unchanged));
/// ```
#[derive(Clone)]
pub struct Property<T> {
    name: &'static str,
    default: T,
}

impl<T: Clone + PartialEq + 'static> Property<T> {
    /// Creates a descriptor with the given name and default value.
    ///
    /// The name must be non-empty and identifies this property in every
    /// table it is registered in.
    #[must_use]
    pub fn new(name: &'static str, default: T) -> Self {
        debug_assert!(!name.is_empty(), "property name must be non-empty");
        Self { name, default }
    }

    /// Returns the property name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the default value new registrations start from.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Registers this property on an instance.
    ///
    /// Creates a fresh state in the instance's table with the current value
    /// set to a clone of the default and an empty callback list. `handling`
    /// decides what happens if the name is already registered there:
    /// [`DuplicateHandling::Overwrite`] replaces the old state (discarding
    /// its value and callbacks), [`DuplicateHandling::Error`] rejects the
    /// call and leaves the old state untouched.
    pub fn register<D: EventDispatcher>(
        &self,
        obj: &mut D,
        handling: DuplicateHandling,
    ) -> Result<(), DuplicateError> {
        obj.property_table_mut().insert(
            self.name,
            ErasedValue::new(self.default.clone()),
            handling,
        )
    }

    /// Returns `true` if this property is registered on the instance.
    #[must_use]
    pub fn is_registered<D: EventDispatcher>(&self, obj: &D) -> bool {
        obj.property_table().contains(self.name)
    }

    /// Reads the current value. No side effects.
    pub fn get<'a, D: EventDispatcher>(&self, obj: &'a D) -> Result<&'a T, PropertyError> {
        let state = obj
            .property_table()
            .state(self.name)
            .ok_or(PropertyError::Unregistered { name: self.name })?;
        state
            .value()
            .downcast_ref::<T>()
            .ok_or(PropertyError::TypeMismatch { name: self.name })
    }

    /// Writes a value, dispatching to the bound callbacks if it changed.
    ///
    /// If `value` equals the stored value the call is a no-op and returns
    /// [`SetOutcome::Unchanged`]; repeated identical writes are idempotent
    /// and never notify.
    ///
    /// Otherwise the value is committed to storage and then the callbacks
    /// bound at that moment are invoked in insertion order with
    /// `(instance, new_value)`. A callback returning [`Outcome::Stop`]
    /// suppresses the callbacks after it ([`SetOutcome::Consumed`]); if all
    /// callbacks return [`Outcome::Continue`], each runs exactly once
    /// ([`SetOutcome::Changed`]).
    ///
    /// Callbacks observe the committed value: `get` inside a callback
    /// returns the new value. Because dispatch iterates a snapshot, a
    /// callback may bind or unbind callbacks, or re-enter `set`, without
    /// affecting the current pass.
    ///
    /// A panicking callback propagates to the caller; the committed value is
    /// not rolled back and the callbacks after it do not run.
    pub fn set<D: EventDispatcher>(
        &self,
        obj: &mut D,
        value: T,
    ) -> Result<SetOutcome, PropertyError> {
        let new = ErasedValue::new(value);
        let snapshot = {
            let state = obj
                .property_table_mut()
                .state_mut(self.name)
                .ok_or(PropertyError::Unregistered { name: self.name })?;
            if !state.value().is::<T>() {
                return Err(PropertyError::TypeMismatch { name: self.name });
            }
            if *state.value() == new {
                return Ok(SetOutcome::Unchanged);
            }
            state.set_value(new.clone());
            state.snapshot()
        };

        let stopped = bracken_dispatch::run(&snapshot, obj, |callback, obj| callback(obj, &new));
        Ok(if stopped {
            SetOutcome::Consumed
        } else {
            SetOutcome::Changed
        })
    }

    /// Binds a change callback on an instance, appending it to the dispatch
    /// order.
    ///
    /// Returns a [`BindingId`] that [`Property::unbind`] accepts. Requires
    /// the property to be registered on the instance first.
    pub fn bind<D, F>(&self, obj: &mut D, callback: F) -> Result<BindingId, PropertyError>
    where
        D: EventDispatcher,
        F: Fn(&mut D, &T) -> Outcome + 'static,
    {
        let state = obj
            .property_table_mut()
            .state_mut(self.name)
            .ok_or(PropertyError::Unregistered { name: self.name })?;
        let erased: Rc<ErasedCallback<D>> =
            Rc::new(move |obj: &mut D, value: &ErasedValue| match value.downcast_ref::<T>() {
                Some(value) => callback(obj, value),
                None => Outcome::Continue,
            });
        Ok(state.bind_erased(erased))
    }

    /// Removes a previously bound callback.
    ///
    /// Returns `Ok(true)` if the callback was removed, `Ok(false)` if the id
    /// was stale. The relative order of the remaining callbacks is
    /// preserved.
    pub fn unbind<D: EventDispatcher>(
        &self,
        obj: &mut D,
        id: BindingId,
    ) -> Result<bool, PropertyError> {
        let state = obj
            .property_table_mut()
            .state_mut(self.name)
            .ok_or(PropertyError::Unregistered { name: self.name })?;
        Ok(state.unbind(id))
    }
}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("type", &core::any::type_name::<T>())
            .finish()
    }
}
