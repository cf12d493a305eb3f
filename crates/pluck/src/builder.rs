//! The mutable accumulator behind the extraction scans.

use crate::error::{ExtractError, Result};
use crate::option::FixedOption;

/// A one-way accumulator holding at most one value.
///
/// Created per extraction call and consumed by
/// [`into_option`](OptionBuilder::into_option). Once a value has been set the
/// builder never returns to the unset state; whether a second set is allowed
/// depends on which method is used:
///
/// - [`set_value`](OptionBuilder::set_value) always overwrites (used by
///   `first`/`last`/`element_at` scans, where multiplicity is not an error).
/// - [`add_value_if_absent`](OptionBuilder::add_value_if_absent) fails if a
///   value is already present (used by `single`, which must enforce the
///   at-most-one invariant).
#[derive(Debug, Clone)]
pub struct OptionBuilder<T> {
    slot: Slot<T>,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Unset,
    Set(T),
}

impl<T> OptionBuilder<T> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        OptionBuilder { slot: Slot::Unset }
    }

    /// Returns `true` if a value has been set.
    pub fn has_value(&self) -> bool {
        matches!(self.slot, Slot::Set(_))
    }

    /// Sets the value unconditionally, overwriting any previous one.
    pub fn set_value(&mut self, value: T) {
        self.slot = Slot::Set(value);
    }

    /// Sets the value only if none is present.
    ///
    /// Fails with the more-than-one condition when a value was already set;
    /// `filtered` selects the "matching element" wording for scans running
    /// under a predicate.
    pub fn add_value_if_absent(&mut self, value: T, filtered: bool) -> Result<()> {
        match self.slot {
            Slot::Unset => {
                self.slot = Slot::Set(value);
                Ok(())
            }
            Slot::Set(_) => Err(ExtractError::more_than_one(filtered)),
        }
    }

    /// Snapshots the builder into a [`FixedOption`].
    pub fn into_option(self) -> FixedOption<T> {
        match self.slot {
            Slot::Unset => FixedOption::empty(),
            Slot::Set(v) => FixedOption::full(v),
        }
    }
}

impl<T> Default for OptionBuilder<T> {
    fn default() -> Self {
        OptionBuilder::new()
    }
}
