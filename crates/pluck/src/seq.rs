//! Sequence adapters: the capability trait and the two extension surfaces.
//!
//! [`RandomAccess`] is the capability test "does this sequence support O(1)
//! length and indexed access?", expressed as a trait so the fast paths are
//! selected at compile time rather than by a runtime type check.
//!
//! [`SequenceExt`] hangs the full adapter surface off every random-access
//! source: eager `*_fixed` extraction, deferred `*_opt` extraction,
//! boolean-returning `try_get_*` queries, and `*_or_value` / `*_or_else`
//! fallback substitution.
//!
//! [`IteratorExt`] is the cursor-path equivalent for one-shot iterators.
//! Because consuming a cursor is destructive, it offers no deferred forms:
//! a scan that cannot be replayed cannot be re-evaluated.

use crate::deferred::DeferredOption;
use crate::error::Result;
use crate::extract;
use crate::option::FixedOption;

// ============================================================================
// Capability trait
// ============================================================================

/// A sequence exposing O(1) length and indexed element access.
///
/// # Manual Implementation
///
/// ```
/// use pluck::{RandomAccess, SequenceExt};
///
/// struct Pair(i32, i32);
///
/// impl RandomAccess for Pair {
///     type Item = i32;
///
///     fn len(&self) -> usize {
///         2
///     }
///
///     fn get(&self, index: usize) -> Option<&i32> {
///         match index {
///             0 => Some(&self.0),
///             1 => Some(&self.1),
///             _ => None,
///         }
///     }
/// }
///
/// let pair = Pair(3, 4);
/// assert_eq!(pair.last_fixed().into_option(), Some(4));
/// ```
pub trait RandomAccess {
    /// The element type.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a forward iterator over the elements, in index order.
    fn items(&self) -> Items<'_, Self> {
        Items {
            source: self,
            index: 0,
        }
    }
}

/// Iterator over a [`RandomAccess`] source, in index order.
#[derive(Debug)]
pub struct Items<'a, S: ?Sized> {
    source: &'a S,
    index: usize,
}

impl<'a, S> Iterator for Items<'a, S>
where
    S: RandomAccess + ?Sized,
{
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<&'a S::Item> {
        let item = self.source.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> RandomAccess for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T, const N: usize> RandomAccess for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

/// A [`FixedOption`] is itself a 0-or-1-element random-access sequence.
impl<T> RandomAccess for FixedOption<T> {
    type Item = T;

    fn len(&self) -> usize {
        if self.has_value() {
            1
        } else {
            0
        }
    }

    fn get(&self, index: usize) -> Option<&T> {
        if index == 0 {
            self.as_ref()
        } else {
            None
        }
    }
}

// ============================================================================
// Random-access adapter surface
// ============================================================================

/// Extraction adapters for every [`RandomAccess`] source.
///
/// Eager methods (`*_fixed`) run the scan once and return a
/// [`FixedOption`]; `single_*` methods return a [`Result`] because `single`
/// alone can fail on multiplicity. Values are cloned out of the source so
/// the result does not borrow it.
///
/// Deferred methods (`*_opt`) return a [`DeferredOption`] borrowing the
/// source; every [`fix`](DeferredOption::fix) re-runs the scan.
///
/// # Example
///
/// ```
/// use pluck::SequenceExt;
///
/// let items = vec![10, 20, 30];
///
/// assert_eq!(items.first_fixed().into_option(), Some(10));
/// assert_eq!(items.element_at_fixed(1).into_option(), Some(20));
/// assert_eq!(items.element_at_fixed(5).into_option(), None);
/// assert_eq!(items.single_fixed_where(|&x| x > 25)?.into_option(), Some(30));
/// assert_eq!(items.last_or_value(0), 30);
/// # Ok::<(), pluck::ExtractError>(())
/// ```
pub trait SequenceExt: RandomAccess {
    // ========================================================================
    // Eager extraction
    // ========================================================================

    /// Extracts the only element. Decided from `len()` alone.
    fn single_fixed(&self) -> Result<FixedOption<Self::Item>>
    where
        Self::Item: Clone,
    {
        Ok(extract::single_indexed(self)?.map(Clone::clone))
    }

    /// Extracts the only element matching `pred`.
    fn single_fixed_where<P>(&self, mut pred: P) -> Result<FixedOption<Self::Item>>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        Ok(extract::single_iter_where(self.items(), |item| pred(*item))?.map(Clone::clone))
    }

    /// Extracts the first element.
    fn first_fixed(&self) -> FixedOption<Self::Item>
    where
        Self::Item: Clone,
    {
        extract::first_indexed(self).map(Clone::clone)
    }

    /// Extracts the first element matching `pred`, stopping at the first
    /// match.
    fn first_fixed_where<P>(&self, mut pred: P) -> FixedOption<Self::Item>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        extract::first_iter_where(self.items(), |item| pred(*item)).map(Clone::clone)
    }

    /// Extracts the last element. Reads the final index directly.
    fn last_fixed(&self) -> FixedOption<Self::Item>
    where
        Self::Item: Clone,
    {
        extract::last_indexed(self).map(Clone::clone)
    }

    /// Extracts the last element matching `pred`.
    fn last_fixed_where<P>(&self, mut pred: P) -> FixedOption<Self::Item>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        extract::last_iter_where(self.items(), |item| pred(*item)).map(Clone::clone)
    }

    /// Extracts the element at `index`; empty when out of range.
    fn element_at_fixed(&self, index: usize) -> FixedOption<Self::Item>
    where
        Self::Item: Clone,
    {
        extract::element_at_indexed(self, index).map(Clone::clone)
    }

    // ========================================================================
    // Deferred extraction
    // ========================================================================

    /// Deferred [`single_fixed`](Self::single_fixed): the scan re-runs on
    /// every read, so it reflects later mutation of the source.
    fn single_opt(&self) -> DeferredOption<impl Fn() -> Result<FixedOption<Self::Item>> + '_>
    where
        Self::Item: Clone,
    {
        DeferredOption::new(move || self.single_fixed())
    }

    /// Deferred [`single_fixed_where`](Self::single_fixed_where).
    fn single_opt_where<'a, P>(
        &'a self,
        pred: P,
    ) -> DeferredOption<impl Fn() -> Result<FixedOption<Self::Item>> + 'a>
    where
        Self::Item: Clone,
        P: Fn(&Self::Item) -> bool + 'a,
    {
        DeferredOption::new(move || self.single_fixed_where(&pred))
    }

    /// Deferred [`first_fixed`](Self::first_fixed).
    fn first_opt(&self) -> DeferredOption<impl Fn() -> Result<FixedOption<Self::Item>> + '_>
    where
        Self::Item: Clone,
    {
        DeferredOption::new(move || Ok(self.first_fixed()))
    }

    /// Deferred [`first_fixed_where`](Self::first_fixed_where).
    fn first_opt_where<'a, P>(
        &'a self,
        pred: P,
    ) -> DeferredOption<impl Fn() -> Result<FixedOption<Self::Item>> + 'a>
    where
        Self::Item: Clone,
        P: Fn(&Self::Item) -> bool + 'a,
    {
        DeferredOption::new(move || Ok(self.first_fixed_where(&pred)))
    }

    /// Deferred [`last_fixed`](Self::last_fixed).
    fn last_opt(&self) -> DeferredOption<impl Fn() -> Result<FixedOption<Self::Item>> + '_>
    where
        Self::Item: Clone,
    {
        DeferredOption::new(move || Ok(self.last_fixed()))
    }

    /// Deferred [`last_fixed_where`](Self::last_fixed_where).
    fn last_opt_where<'a, P>(
        &'a self,
        pred: P,
    ) -> DeferredOption<impl Fn() -> Result<FixedOption<Self::Item>> + 'a>
    where
        Self::Item: Clone,
        P: Fn(&Self::Item) -> bool + 'a,
    {
        DeferredOption::new(move || Ok(self.last_fixed_where(&pred)))
    }

    /// Deferred [`element_at_fixed`](Self::element_at_fixed).
    fn element_at_opt(
        &self,
        index: usize,
    ) -> DeferredOption<impl Fn() -> Result<FixedOption<Self::Item>> + '_>
    where
        Self::Item: Clone,
    {
        DeferredOption::new(move || Ok(self.element_at_fixed(index)))
    }

    // ========================================================================
    // Boolean queries
    // ========================================================================

    /// `(true, value)` if exactly one element exists, `(false, default)` if
    /// none; fails when more than one exists.
    fn try_get_single(&self) -> Result<(bool, Self::Item)>
    where
        Self::Item: Clone + Default,
    {
        Ok(self.single_fixed()?.try_single())
    }

    /// `(true, value)` for the first element, else `(false, default)`.
    fn try_get_first(&self) -> (bool, Self::Item)
    where
        Self::Item: Clone + Default,
    {
        self.first_fixed().try_single()
    }

    /// `(true, value)` for the last element, else `(false, default)`.
    fn try_get_last(&self) -> (bool, Self::Item)
    where
        Self::Item: Clone + Default,
    {
        self.last_fixed().try_single()
    }

    /// `(true, value)` for the element at `index`, else `(false, default)`.
    fn try_get_element_at(&self, index: usize) -> (bool, Self::Item)
    where
        Self::Item: Clone + Default,
    {
        self.element_at_fixed(index).try_single()
    }

    // ========================================================================
    // Fallback substitution
    // ========================================================================

    /// The only element, or `fallback` when the sequence is empty.
    fn single_or_value(&self, fallback: Self::Item) -> Result<Self::Item>
    where
        Self::Item: Clone,
    {
        Ok(self.single_fixed()?.or_value(fallback))
    }

    /// The only element, or `fallback()` when the sequence is empty.
    fn single_or_else<F>(&self, fallback: F) -> Result<Self::Item>
    where
        Self::Item: Clone,
        F: FnOnce() -> Self::Item,
    {
        Ok(self.single_fixed()?.or_else(fallback))
    }

    /// The first element, or `fallback`.
    fn first_or_value(&self, fallback: Self::Item) -> Self::Item
    where
        Self::Item: Clone,
    {
        self.first_fixed().or_value(fallback)
    }

    /// The first element, or `fallback()`.
    fn first_or_else<F>(&self, fallback: F) -> Self::Item
    where
        Self::Item: Clone,
        F: FnOnce() -> Self::Item,
    {
        self.first_fixed().or_else(fallback)
    }

    /// The last element, or `fallback`.
    fn last_or_value(&self, fallback: Self::Item) -> Self::Item
    where
        Self::Item: Clone,
    {
        self.last_fixed().or_value(fallback)
    }

    /// The last element, or `fallback()`.
    fn last_or_else<F>(&self, fallback: F) -> Self::Item
    where
        Self::Item: Clone,
        F: FnOnce() -> Self::Item,
    {
        self.last_fixed().or_else(fallback)
    }

    /// The element at `index`, or `fallback` when out of range.
    fn element_at_or_value(&self, index: usize, fallback: Self::Item) -> Self::Item
    where
        Self::Item: Clone,
    {
        self.element_at_fixed(index).or_value(fallback)
    }

    /// The element at `index`, or `fallback()` when out of range.
    fn element_at_or_else<F>(&self, index: usize, fallback: F) -> Self::Item
    where
        Self::Item: Clone,
        F: FnOnce() -> Self::Item,
    {
        self.element_at_fixed(index).or_else(fallback)
    }
}

impl<S> SequenceExt for S where S: RandomAccess + ?Sized {}

// ============================================================================
// Cursor adapter surface
// ============================================================================

/// Extraction adapters for one-shot cursors.
///
/// Every method consumes the iterator; after an extraction the cursor
/// cannot be replayed, so there are no deferred forms here.
///
/// # Example
///
/// ```
/// use pluck::IteratorExt;
///
/// let lone = (1..10).single_fixed_where(|&x| x == 7)?;
/// assert_eq!(lone.into_option(), Some(7));
///
/// assert_eq!((1..10).element_at_fixed(3).into_option(), Some(4));
/// assert_eq!(std::iter::empty::<i32>().first_or_value(-1), -1);
/// # Ok::<(), pluck::ExtractError>(())
/// ```
pub trait IteratorExt: Iterator + Sized {
    /// Extracts the only element of the cursor.
    fn single_fixed(self) -> Result<FixedOption<Self::Item>> {
        extract::single_iter(self)
    }

    /// Extracts the only element matching `pred`.
    fn single_fixed_where<P>(self, pred: P) -> Result<FixedOption<Self::Item>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        extract::single_iter_where(self, pred)
    }

    /// Extracts the first element, stopping immediately.
    fn first_fixed(self) -> FixedOption<Self::Item> {
        extract::first_iter(self)
    }

    /// Extracts the first element matching `pred`, stopping at the first
    /// match.
    fn first_fixed_where<P>(self, pred: P) -> FixedOption<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        extract::first_iter_where(self, pred)
    }

    /// Extracts the last element, consuming the whole cursor.
    fn last_fixed(self) -> FixedOption<Self::Item> {
        extract::last_iter(self)
    }

    /// Extracts the last element matching `pred`.
    fn last_fixed_where<P>(self, pred: P) -> FixedOption<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        extract::last_iter_where(self, pred)
    }

    /// Extracts the element at `index`, walking the cursor forward.
    fn element_at_fixed(self, index: usize) -> FixedOption<Self::Item> {
        extract::element_at_iter(self, index)
    }

    /// `(true, value)` if exactly one element exists, `(false, default)` if
    /// none; fails when more than one exists.
    fn try_get_single(self) -> Result<(bool, Self::Item)>
    where
        Self::Item: Default,
    {
        Ok(self.single_fixed()?.try_single())
    }

    /// `(true, value)` for the first element, else `(false, default)`.
    fn try_get_first(self) -> (bool, Self::Item)
    where
        Self::Item: Default,
    {
        self.first_fixed().try_single()
    }

    /// `(true, value)` for the last element, else `(false, default)`.
    fn try_get_last(self) -> (bool, Self::Item)
    where
        Self::Item: Default,
    {
        self.last_fixed().try_single()
    }

    /// `(true, value)` for the element at `index`, else `(false, default)`.
    fn try_get_element_at(self, index: usize) -> (bool, Self::Item)
    where
        Self::Item: Default,
    {
        self.element_at_fixed(index).try_single()
    }

    /// The only element, or `fallback` when the cursor is empty.
    fn single_or_value(self, fallback: Self::Item) -> Result<Self::Item> {
        Ok(self.single_fixed()?.or_value(fallback))
    }

    /// The only element, or `fallback()` when the cursor is empty.
    fn single_or_else<F>(self, fallback: F) -> Result<Self::Item>
    where
        F: FnOnce() -> Self::Item,
    {
        Ok(self.single_fixed()?.or_else(fallback))
    }

    /// The first element, or `fallback`.
    fn first_or_value(self, fallback: Self::Item) -> Self::Item {
        self.first_fixed().or_value(fallback)
    }

    /// The first element, or `fallback()`.
    fn first_or_else<F>(self, fallback: F) -> Self::Item
    where
        F: FnOnce() -> Self::Item,
    {
        self.first_fixed().or_else(fallback)
    }

    /// The last element, or `fallback`.
    fn last_or_value(self, fallback: Self::Item) -> Self::Item {
        self.last_fixed().or_value(fallback)
    }

    /// The last element, or `fallback()`.
    fn last_or_else<F>(self, fallback: F) -> Self::Item
    where
        F: FnOnce() -> Self::Item,
    {
        self.last_fixed().or_else(fallback)
    }

    /// The element at `index`, or `fallback` when the cursor is shorter.
    fn element_at_or_value(self, index: usize, fallback: Self::Item) -> Self::Item {
        self.element_at_fixed(index).or_value(fallback)
    }

    /// The element at `index`, or `fallback()` when the cursor is shorter.
    fn element_at_or_else<F>(self, index: usize, fallback: F) -> Self::Item
    where
        F: FnOnce() -> Self::Item,
    {
        self.element_at_fixed(index).or_else(fallback)
    }
}

impl<I: Iterator> IteratorExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    #[test]
    fn random_access_impls() {
        let slice: &[i32] = &[1, 2, 3];
        assert_eq!(RandomAccess::len(slice), 3);
        assert_eq!(RandomAccess::get(slice, 2), Some(&3));
        assert_eq!(RandomAccess::get(slice, 3), None);

        let vec = vec![1, 2];
        assert_eq!(RandomAccess::len(&vec), 2);
        assert!(!RandomAccess::is_empty(&vec));

        let array = [9; 4];
        assert_eq!(RandomAccess::len(&array), 4);
        assert_eq!(RandomAccess::get(&array, 0), Some(&9));

        let full = FixedOption::full(5);
        assert_eq!(RandomAccess::len(&full), 1);
        assert_eq!(RandomAccess::get(&full, 0), Some(&5));
        assert_eq!(RandomAccess::get(&full, 1), None);

        let empty = FixedOption::<i32>::empty();
        assert_eq!(RandomAccess::len(&empty), 0);
        assert!(RandomAccess::is_empty(&empty));
    }

    #[test]
    fn items_walks_in_index_order() {
        let vec = vec![4, 5, 6];
        let collected: Vec<i32> = vec.items().copied().collect();
        assert_eq!(collected, vec![4, 5, 6]);
        assert_eq!(vec.items().size_hint(), (3, Some(3)));
    }

    #[test]
    fn eager_surface_on_vec() {
        let items = vec![10, 20, 30];

        assert_eq!(items.first_fixed(), FixedOption::full(10));
        assert_eq!(items.last_fixed(), FixedOption::full(30));
        assert_eq!(items.element_at_fixed(1), FixedOption::full(20));
        assert_eq!(items.element_at_fixed(5), FixedOption::empty());
        assert_eq!(items.single_fixed(), Err(ExtractError::MoreThanOneElement));
        assert_eq!(
            items.single_fixed_where(|&x| x > 25),
            Ok(FixedOption::full(30))
        );
        assert_eq!(
            items.single_fixed_where(|&x| x > 15),
            Err(ExtractError::MoreThanOneMatch)
        );
        assert_eq!(
            items.first_fixed_where(|&x| x > 15),
            FixedOption::full(20)
        );
        assert_eq!(
            items.last_fixed_where(|&x| x < 25),
            FixedOption::full(20)
        );
    }

    #[test]
    fn eager_surface_on_slice_and_array() {
        let slice: &[i32] = &[7];
        assert_eq!(slice.single_fixed(), Ok(FixedOption::full(7)));

        let array = [1, 2, 3];
        assert_eq!(array.last_fixed(), FixedOption::full(3));
    }

    #[test]
    fn fixed_option_is_a_sequence() {
        let opt = FixedOption::full(5);
        assert_eq!(opt.single_fixed(), Ok(FixedOption::full(5)));
        assert_eq!(opt.first_fixed(), opt.last_fixed());

        let none = FixedOption::<i32>::empty();
        assert_eq!(none.single_fixed(), Ok(FixedOption::empty()));
    }

    #[test]
    fn deferred_surface_reevaluates() {
        let items = vec![1, 2, 3];

        let first = items.first_opt();
        assert_eq!(first.fix().unwrap(), FixedOption::full(1));
        assert_eq!(first.fix().unwrap(), FixedOption::full(1));

        let lone_even = items.single_opt_where(|&x| x % 2 == 0);
        assert_eq!(lone_even.fix().unwrap(), FixedOption::full(2));

        let at = items.element_at_opt(2);
        assert_eq!(at.fix().unwrap(), FixedOption::full(3));

        let last_small = items.last_opt_where(|&x| x < 3);
        assert_eq!(last_small.fix().unwrap(), FixedOption::full(2));
    }

    #[test]
    fn deferred_single_fails_at_read_not_construction() {
        let items = vec![1, 2];
        let deferred = items.single_opt();
        // Constructing the deferred option did not fail; reading does.
        assert_eq!(deferred.fix(), Err(ExtractError::MoreThanOneElement));
    }

    #[test]
    fn try_get_surface() {
        let items = vec![5];
        assert_eq!(items.try_get_single(), Ok((true, 5)));
        assert_eq!(items.try_get_first(), (true, 5));
        assert_eq!(items.try_get_last(), (true, 5));
        assert_eq!(items.try_get_element_at(0), (true, 5));
        assert_eq!(items.try_get_element_at(1), (false, 0));

        let empty: Vec<i32> = vec![];
        assert_eq!(empty.try_get_single(), Ok((false, 0)));
        assert_eq!(empty.try_get_first(), (false, 0));

        let many = vec![1, 2];
        assert_eq!(
            many.try_get_single(),
            Err(ExtractError::MoreThanOneElement)
        );
    }

    #[test]
    fn fallback_surface() {
        let items = vec![10, 20, 30];
        assert_eq!(items.first_or_value(0), 10);
        assert_eq!(items.last_or_else(|| 0), 30);
        assert_eq!(items.element_at_or_value(9, -1), -1);
        assert_eq!(items.element_at_or_else(1, || -1), 20);

        let empty: Vec<i32> = vec![];
        assert_eq!(empty.first_or_value(42), 42);
        assert_eq!(empty.single_or_value(42), Ok(42));
        assert_eq!(empty.single_or_else(|| 42), Ok(42));
        assert_eq!(
            items.single_or_value(0),
            Err(ExtractError::MoreThanOneElement)
        );
    }

    #[test]
    fn iterator_surface() {
        assert_eq!((1..2).single_fixed(), Ok(FixedOption::full(1)));
        assert_eq!((1..3).single_fixed(), Err(ExtractError::MoreThanOneElement));
        assert_eq!(
            (1..10).single_fixed_where(|&x| x % 7 == 0),
            Ok(FixedOption::full(7))
        );
        assert_eq!((1..10).first_fixed(), FixedOption::full(1));
        assert_eq!((1..10).last_fixed(), FixedOption::full(9));
        assert_eq!((1..10).element_at_fixed(4), FixedOption::full(5));
        assert_eq!((1..10).element_at_fixed(100), FixedOption::empty());

        assert_eq!((1..2).try_get_single(), Ok((true, 1)));
        assert_eq!((1..10).try_get_element_at(100), (false, 0));
        assert_eq!((1..10).first_or_value(0), 1);
        assert_eq!(std::iter::empty::<i32>().last_or_else(|| 8), 8);
        assert_eq!((1..10).element_at_or_value(100, -1), -1);
        assert_eq!(std::iter::empty::<i32>().single_or_value(3), Ok(3));
    }
}
