// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance, per-property live state.
//!
//! A [`PropertyState`] is created once per `(property, instance)` pair at
//! registration time and owns that instance's current value and ordered
//! callback list. The state lives inside the instance's
//! [`PropertyTable`](crate::PropertyTable); the descriptor itself holds no
//! per-instance data.

use alloc::rc::Rc;
use core::fmt;

use bracken_dispatch::Outcome;
use smallvec::SmallVec;

use crate::value::ErasedValue;

/// Inline capacity for a property's callback list.
///
/// Most observed properties carry a handful of callbacks at most, so this
/// keeps the common case free of heap allocation.
const INLINE_BINDINGS: usize = 4;

/// A change callback with its value argument erased.
///
/// Typed callbacks are wrapped at bind time; the wrapper downcasts the
/// erased value back to the property's value type before invoking the user
/// callback.
pub(crate) type ErasedCallback<D> = dyn Fn(&mut D, &ErasedValue) -> Outcome;

/// Snapshot of a callback list, taken when a dispatch pass begins.
pub(crate) type CallbackSnapshot<D> = SmallVec<[Rc<ErasedCallback<D>>; INLINE_BINDINGS]>;

/// Identifies one bound callback within one [`PropertyState`].
///
/// Returned by [`Property::bind`](crate::Property::bind) and accepted by
/// [`Property::unbind`](crate::Property::unbind). Ids are never reused within
/// a state, so a stale id after an unbind is harmless.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BindingId(u32);

impl fmt::Debug for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BindingId").field(&self.0).finish()
    }
}

/// The live record of a property on one dispatcher instance.
///
/// Holds the current value, the ordered callback list, and a diagnostic copy
/// of the property name. `D` is the dispatcher type the callbacks operate on.
pub struct PropertyState<D> {
    name: &'static str,
    value: ErasedValue,
    callbacks: SmallVec<[(BindingId, Rc<ErasedCallback<D>>); INLINE_BINDINGS]>,
    next_binding: u32,
}

impl<D> PropertyState<D> {
    pub(crate) fn new(name: &'static str, value: ErasedValue) -> Self {
        Self {
            name,
            value,
            callbacks: SmallVec::new(),
            next_binding: 0,
        }
    }

    /// Returns the name this state was registered under.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the current stored value.
    #[must_use]
    #[inline]
    pub fn value(&self) -> &ErasedValue {
        &self.value
    }

    /// Returns the number of callbacks currently bound.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.callbacks.len()
    }

    pub(crate) fn set_value(&mut self, value: ErasedValue) {
        self.value = value;
    }

    /// Appends a callback and returns its id. Insertion order is dispatch
    /// order.
    pub(crate) fn bind_erased(&mut self, callback: Rc<ErasedCallback<D>>) -> BindingId {
        let id = BindingId(self.next_binding);
        self.next_binding += 1;
        self.callbacks.push((id, callback));
        id
    }

    /// Removes the callback with the given id, preserving the order of the
    /// rest. Returns `true` if a callback was removed.
    pub(crate) fn unbind(&mut self, id: BindingId) -> bool {
        match self.callbacks.iter().position(|(bound, _)| *bound == id) {
            Some(index) => {
                self.callbacks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Clones the callback handles for one dispatch pass.
    ///
    /// Dispatch iterates this snapshot, so callbacks that bind or unbind
    /// during the pass cannot affect which callbacks the pass visits.
    pub(crate) fn snapshot(&self) -> CallbackSnapshot<D> {
        self.callbacks
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect()
    }
}

impl<D> fmt::Debug for PropertyState<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyState")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("binding_count", &self.binding_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    fn noop() -> Rc<ErasedCallback<()>> {
        Rc::new(|_, _| Outcome::Continue)
    }

    #[test]
    fn state_new() {
        let state = PropertyState::<()>::new("width", ErasedValue::new(0.0_f64));
        assert_eq!(state.name(), "width");
        assert_eq!(state.value().downcast_ref::<f64>(), Some(&0.0));
        assert_eq!(state.binding_count(), 0);
    }

    #[test]
    fn binding_ids_are_unique_and_ordered() {
        let mut state = PropertyState::<()>::new("width", ErasedValue::new(0.0_f64));
        let a = state.bind_erased(noop());
        let b = state.bind_erased(noop());
        let c = state.bind_erased(noop());
        assert!(a < b && b < c);
        assert_eq!(state.binding_count(), 3);
    }

    #[test]
    fn unbind_removes_exactly_one() {
        let mut state = PropertyState::<()>::new("width", ErasedValue::new(0.0_f64));
        let a = state.bind_erased(noop());
        let b = state.bind_erased(noop());

        assert!(state.unbind(a));
        assert_eq!(state.binding_count(), 1);

        // Already removed; stale ids are harmless.
        assert!(!state.unbind(a));
        assert!(state.unbind(b));
        assert_eq!(state.binding_count(), 0);
    }

    #[test]
    fn ids_are_not_reused_after_unbind() {
        let mut state = PropertyState::<()>::new("width", ErasedValue::new(0.0_f64));
        let a = state.bind_erased(noop());
        state.unbind(a);
        let b = state.bind_erased(noop());
        assert_ne!(a, b);
    }

    #[test]
    fn snapshot_is_insertion_ordered_and_detached() {
        let mut state = PropertyState::<Vec<u32>>::new("width", ErasedValue::new(0.0_f64));
        for tag in 0..3_u32 {
            state.bind_erased(Rc::new(move |seen: &mut Vec<u32>, _| {
                seen.push(tag);
                Outcome::Continue
            }));
        }

        let snapshot = state.snapshot();
        // Mutating the live list does not touch the snapshot already taken.
        state.unbind(BindingId(1));
        assert_eq!(snapshot.len(), 3);

        let mut seen = Vec::new();
        for callback in &snapshot {
            let _ = callback(&mut seen, state.value());
        }
        assert_eq!(seen, [0, 1, 2]);
    }

    #[test]
    fn state_debug() {
        let state = PropertyState::<()>::new("width", ErasedValue::new(0.0_f64));
        let debug = format!("{:?}", state);
        assert!(debug.contains("PropertyState"));
        assert!(debug.contains("width"));
    }
}
