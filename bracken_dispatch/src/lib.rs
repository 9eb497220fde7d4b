// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Dispatch: ordered callback walks with typed early-stop outcomes.
//!
//! This crate provides the notification pass shared by the Bracken observable
//! crates: walk a sequence of entries strictly in order, hand each one to a
//! handler, and honor the handler's [`Outcome`].
//!
//! - [`Outcome::Continue`]: keep going.
//! - [`Outcome::Stop`]: terminate the pass immediately; later entries are not
//!   visited.
//!
//! The stop signal is a dedicated enum rather than a boolean so that a
//! handler cannot consume a pass by accident with a truthy-but-unrelated
//! return value.
//!
//! The walk operates on a slice the caller owns. Callers that allow handlers
//! to mutate the underlying sequence (for example, observers that register
//! further observers) should pass a snapshot taken when the pass begins, as
//! `bracken_property` does.
//!
//! ## Minimal example
//!
//! ```
//! use bracken_dispatch::{Outcome, run};
//!
//! let seq = [1, 2, 3, 4];
//! let mut seen = Vec::new();
//! let stopped = run(&seq, &mut seen, |entry, seen| {
//!     seen.push(*entry);
//!     if *entry == 3 { Outcome::Stop } else { Outcome::Continue }
//! });
//!
//! assert!(stopped);
//! assert_eq!(seen, vec![1, 2, 3]);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Control value returned by a dispatch handler.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome {
    /// Proceed to the next entry in the sequence.
    Continue,
    /// Terminate the pass; no further entries are visited.
    Stop,
}

/// Runs a handler over a sequence and honors early-stop outcomes.
///
/// Entries are visited strictly in order, from first to last. The `event`
/// value is threaded mutably through every handler call, so handlers can
/// accumulate state or mutate a shared payload across the pass.
///
/// Returns `true` if a handler returned [`Outcome::Stop`], `false` if the
/// whole sequence was visited.
///
/// A handler that panics propagates the panic to the caller; entries after
/// the panicking one are not visited.
pub fn run<T, E>(
    seq: &[T],
    event: &mut E,
    mut handler: impl FnMut(&T, &mut E) -> Outcome,
) -> bool {
    for entry in seq {
        match handler(entry, event) {
            Outcome::Continue => {}
            Outcome::Stop => return true,
        }
    }
    false
}
