// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-erased property value storage.
//!
//! [`ErasedValue`] lets a property table hold values of heterogeneous types
//! behind one storage type, while still supporting the equality comparison
//! the write accessor's change gate needs.

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

/// A type-erased property value.
///
/// Wraps a value of any `Clone + PartialEq + 'static` type, storing it on the
/// heap together with its [`TypeId`] for later downcasting. Unlike a plain
/// `Box<dyn Any>`, erased values can be cloned and compared: two values are
/// equal when they hold the same type and that type's `PartialEq` says so.
///
/// # Example
///
/// ```
/// use bracken_property::ErasedValue;
///
/// let value = ErasedValue::new(42_i32);
/// assert!(value.is::<i32>());
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
///
/// // Equality is type-aware: different types never compare equal.
/// assert_eq!(value, ErasedValue::new(42_i32));
/// assert_ne!(value, ErasedValue::new(42_u32));
/// ```
pub struct ErasedValue {
    inner: Box<dyn ErasedValueTrait>,
    type_id: TypeId,
}

impl ErasedValue {
    /// Creates a new erased value from a concrete value.
    #[must_use]
    pub fn new<T: Clone + PartialEq + 'static>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            inner: Box::new(value),
        }
    }

    /// Returns the [`TypeId`] of the contained value.
    #[must_use]
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if the contained value is of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Attempts to downcast to a reference of type `T`.
    ///
    /// Returns `None` if the contained value is not of type `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        if self.is::<T>() {
            self.inner.as_any().downcast_ref()
        } else {
            None
        }
    }
}

impl Clone for ErasedValue {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_boxed(),
            type_id: self.type_id,
        }
    }
}

impl PartialEq for ErasedValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.inner.eq_dyn(other.inner.as_any())
    }
}

impl fmt::Debug for ErasedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedValue")
            .field("type_id", &self.type_id)
            .finish_non_exhaustive()
    }
}

/// Trait object for erased values that can be cloned and compared.
trait ErasedValueTrait: Any {
    fn as_any(&self) -> &dyn Any;
    fn clone_boxed(&self) -> Box<dyn ErasedValueTrait>;
    fn eq_dyn(&self, other: &dyn Any) -> bool;
}

impl<T: Clone + PartialEq + 'static> ErasedValueTrait for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn ErasedValueTrait> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some_and(|other| self == other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn erased_value_downcast() {
        let value = ErasedValue::new(42_i32);
        assert!(value.is::<i32>());
        assert!(!value.is::<f64>());
        assert_eq!(value.downcast_ref::<i32>(), Some(&42));
        assert_eq!(value.downcast_ref::<f64>(), None);
    }

    #[test]
    fn erased_value_eq_same_type() {
        assert_eq!(ErasedValue::new(42_i32), ErasedValue::new(42_i32));
        assert_ne!(ErasedValue::new(42_i32), ErasedValue::new(43_i32));
    }

    #[test]
    fn erased_value_eq_across_types_is_false() {
        // 42_i32 and 42_i64 are numerically equal but typed differently.
        assert_ne!(ErasedValue::new(42_i32), ErasedValue::new(42_i64));
    }

    #[test]
    fn erased_value_eq_string() {
        let a = ErasedValue::new(String::from("hello"));
        let b = ErasedValue::new(String::from("hello"));
        let c = ErasedValue::new(String::from("world"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn erased_value_clone() {
        let value = ErasedValue::new(String::from("hello"));
        let cloned = value.clone();
        assert_eq!(cloned, value);
        assert_eq!(
            cloned.downcast_ref::<String>().map(|s| s.as_str()),
            Some("hello")
        );
    }

    #[test]
    fn erased_value_type_id() {
        let value = ErasedValue::new(42_i32);
        assert_eq!(value.type_id(), TypeId::of::<i32>());
    }

    #[test]
    fn erased_value_debug() {
        let value = ErasedValue::new(42_i32);
        let debug = format!("{:?}", value);
        assert!(debug.contains("ErasedValue"));
    }
}
