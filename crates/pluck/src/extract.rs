//! Core extraction scans.
//!
//! Each operation reduces a sequence to zero or one values. Two algorithm
//! paths exist, selected at compile time:
//!
//! - `*_iter`: a forward scan over any [`IntoIterator`] (the cursor path).
//!   Consuming a one-shot cursor is destructive; the scan runs to completion
//!   or until it can short-circuit.
//! - `*_indexed`: fast paths over a [`RandomAccess`] source that decide from
//!   `len()` and direct indexing without scanning values.
//!
//! Only `single` enforces multiplicity and so only `single` can fail. An
//! out-of-range `element_at` index is a valid "no element" outcome, never an
//! error.

use crate::builder::OptionBuilder;
use crate::error::{ExtractError, Result};
use crate::option::FixedOption;
use crate::seq::RandomAccess;

// ============================================================================
// Cursor path
// ============================================================================

/// Extracts the only element of `source`.
///
/// Empty when the source is empty; fails with
/// [`MoreThanOneElement`](ExtractError::MoreThanOneElement) when a second
/// element is seen.
pub fn single_iter<I>(source: I) -> Result<FixedOption<I::Item>>
where
    I: IntoIterator,
{
    let mut builder = OptionBuilder::new();
    for item in source {
        builder.add_value_if_absent(item, false)?;
    }
    Ok(builder.into_option())
}

/// Extracts the only element of `source` matching `pred`.
///
/// Empty when nothing matches; fails with
/// [`MoreThanOneMatch`](ExtractError::MoreThanOneMatch) when a second match
/// is seen.
pub fn single_iter_where<I, P>(source: I, mut pred: P) -> Result<FixedOption<I::Item>>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut builder = OptionBuilder::new();
    for item in source {
        if pred(&item) {
            builder.add_value_if_absent(item, true)?;
        }
    }
    Ok(builder.into_option())
}

/// Extracts the first element of `source`, stopping immediately.
pub fn first_iter<I>(source: I) -> FixedOption<I::Item>
where
    I: IntoIterator,
{
    FixedOption::from(source.into_iter().next())
}

/// Extracts the first element of `source` matching `pred`, stopping at the
/// first match.
pub fn first_iter_where<I, P>(source: I, mut pred: P) -> FixedOption<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    FixedOption::from(source.into_iter().find(|item| pred(item)))
}

/// Extracts the last element of `source`, scanning everything and keeping
/// the most recent one.
pub fn last_iter<I>(source: I) -> FixedOption<I::Item>
where
    I: IntoIterator,
{
    let mut builder = OptionBuilder::new();
    for item in source {
        builder.set_value(item);
    }
    builder.into_option()
}

/// Extracts the last element of `source` matching `pred`.
pub fn last_iter_where<I, P>(source: I, mut pred: P) -> FixedOption<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut builder = OptionBuilder::new();
    for item in source {
        if pred(&item) {
            builder.set_value(item);
        }
    }
    builder.into_option()
}

/// Extracts the element at `index`, walking the cursor forward.
///
/// Empty when the source has `index` or fewer elements.
pub fn element_at_iter<I>(source: I, index: usize) -> FixedOption<I::Item>
where
    I: IntoIterator,
{
    FixedOption::from(source.into_iter().nth(index))
}

// ============================================================================
// Random-access fast paths
// ============================================================================

/// `single` over a random-access source: decided from `len()` alone,
/// without scanning values.
pub fn single_indexed<S>(source: &S) -> Result<FixedOption<&S::Item>>
where
    S: RandomAccess + ?Sized,
{
    match source.len() {
        0 => Ok(FixedOption::empty()),
        1 => Ok(FixedOption::from(source.get(0))),
        _ => Err(ExtractError::MoreThanOneElement),
    }
}

/// `first` over a random-access source: index 0 when non-empty.
pub fn first_indexed<S>(source: &S) -> FixedOption<&S::Item>
where
    S: RandomAccess + ?Sized,
{
    FixedOption::from(source.get(0))
}

/// `last` over a random-access source: the final index when non-empty.
pub fn last_indexed<S>(source: &S) -> FixedOption<&S::Item>
where
    S: RandomAccess + ?Sized,
{
    FixedOption::from(source.len().checked_sub(1).and_then(|i| source.get(i)))
}

/// `element_at` over a random-access source: bounds-checked direct index.
/// Index 0 is a valid index like any other.
pub fn element_at_indexed<S>(source: &S, index: usize) -> FixedOption<&S::Item>
where
    S: RandomAccess + ?Sized,
{
    FixedOption::from(source.get(index))
}
