//! The lazily-recomputed option type.
//!
//! A [`DeferredOption`] stores a zero-argument closure and invokes it on
//! every read. Nothing is cached: two reads may observe different answers if
//! the underlying source mutates between them. That is the point — a
//! deferred option over a live collection always reflects its current
//! contents.

use crate::error::Result;
use crate::option::FixedOption;

/// An option whose value is recomputed from a stored closure on every read.
///
/// Construction never fails; the closure runs (and any extraction error
/// surfaces) only when the value is observed via [`fix`](DeferredOption::fix)
/// or one of the convenience reads.
///
/// The closure may borrow its source, in which case the borrow checker
/// guarantees the option does not outlive it, or it may own/share the source
/// (for example through `Rc<RefCell<_>>`) when re-reads must observe
/// mutation.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use pluck::{DeferredOption, IteratorExt};
///
/// let items = Rc::new(RefCell::new(Vec::<i32>::new()));
///
/// let source = Rc::clone(&items);
/// let deferred = DeferredOption::new(move || source.borrow().iter().copied().single_fixed());
///
/// assert!(!deferred.fix()?.has_value());
///
/// items.borrow_mut().push(11);
/// assert_eq!(deferred.fix()?.as_ref(), Some(&11));
/// # Ok::<(), pluck::ExtractError>(())
/// ```
#[derive(Clone)]
pub struct DeferredOption<F> {
    recompute: F,
}

impl<F> DeferredOption<F> {
    /// Wraps a recompute closure. The closure is not invoked here.
    pub fn new(recompute: F) -> Self {
        DeferredOption { recompute }
    }
}

impl<T, F> DeferredOption<F>
where
    F: Fn() -> Result<FixedOption<T>>,
{
    /// Evaluates the closure, pinning the current answer into a
    /// [`FixedOption`].
    pub fn fix(&self) -> Result<FixedOption<T>> {
        (self.recompute)()
    }

    /// Re-evaluates and resolves to the value if present, else `fallback`.
    pub fn or_value(&self, fallback: T) -> Result<T> {
        Ok(self.fix()?.or_value(fallback))
    }

    /// Re-evaluates and resolves to the value if present, else `fallback()`.
    pub fn or_else<G>(&self, fallback: G) -> Result<T>
    where
        G: FnOnce() -> T,
    {
        Ok(self.fix()?.or_else(fallback))
    }

    /// Re-evaluates and returns `(true, value)` if present, else
    /// `(false, T::default())`.
    pub fn try_single(&self) -> Result<(bool, T)>
    where
        T: Default,
    {
        Ok(self.fix()?.try_single())
    }
}

impl<F> std::fmt::Debug for DeferredOption<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredOption").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn construction_does_not_evaluate() {
        let calls = Cell::new(0u32);
        let deferred = DeferredOption::new(|| {
            calls.set(calls.get() + 1);
            Ok(FixedOption::full(1))
        });
        assert_eq!(calls.get(), 0);

        deferred.fix().unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn every_read_reinvokes() {
        let calls = Cell::new(0u32);
        let deferred = DeferredOption::new(|| {
            calls.set(calls.get() + 1);
            Ok(FixedOption::full(calls.get()))
        });

        assert_eq!(deferred.fix().unwrap(), FixedOption::full(1));
        assert_eq!(deferred.fix().unwrap(), FixedOption::full(2));
        assert_eq!(deferred.try_single().unwrap(), (true, 3));
        assert_eq!(deferred.or_value(0).unwrap(), 4);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn stable_source_reads_agree() {
        let deferred = DeferredOption::new(|| Ok(FixedOption::full("x")));
        assert_eq!(deferred.fix().unwrap(), deferred.fix().unwrap());
    }

    #[test]
    fn borrowed_source_reflects_state() {
        let items = vec![10, 20];
        let deferred = DeferredOption::new(|| Ok(FixedOption::from(items.first().copied())));
        assert_eq!(deferred.fix().unwrap(), FixedOption::full(10));
    }

    #[test]
    fn errors_surface_at_read_time() {
        use crate::error::ExtractError;

        let deferred =
            DeferredOption::new(|| Err::<FixedOption<i32>, _>(ExtractError::MoreThanOneElement));
        assert_eq!(deferred.fix(), Err(ExtractError::MoreThanOneElement));
        assert_eq!(deferred.or_value(0), Err(ExtractError::MoreThanOneElement));
    }

    #[test]
    fn or_else_skipped_when_full() {
        let deferred = DeferredOption::new(|| Ok(FixedOption::full(5)));
        let v = deferred.or_else(|| unreachable!());
        assert_eq!(v.unwrap(), 5);
    }
}
