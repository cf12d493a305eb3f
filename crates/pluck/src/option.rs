//! The eagerly-fixed option type.
//!
//! A [`FixedOption`] holds zero or one value, computed once and stored
//! immutably. It doubles as a 0-or-1-element sequence: it iterates, and it
//! implements [`RandomAccess`](crate::RandomAccess), so it can be fed back
//! into any extraction operation.

/// An immutable container holding zero or one value.
///
/// Unlike [`DeferredOption`](crate::DeferredOption), the value (or its
/// absence) is fixed at construction time; reading a `FixedOption` twice
/// always yields the same answer.
///
/// # Example
///
/// ```
/// use pluck::FixedOption;
///
/// let some = FixedOption::full(5);
/// let none = FixedOption::<i32>::empty();
///
/// assert_eq!(some.try_single(), (true, 5));
/// assert_eq!(none.try_single(), (false, 0));
///
/// // A FixedOption is a 0-or-1-element sequence.
/// let collected: Vec<i32> = FixedOption::full(7).into_iter().collect();
/// assert_eq!(collected, vec![7]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedOption<T> {
    value: Option<T>,
}

impl<T> FixedOption<T> {
    /// Creates an option containing `value`.
    pub fn full(value: T) -> Self {
        FixedOption { value: Some(value) }
    }

    /// Creates an option containing nothing.
    pub fn empty() -> Self {
        FixedOption { value: None }
    }

    /// Creates [`full`](Self::full)`(value)` if `has_value`, else
    /// [`empty`](Self::empty) (dropping `value`).
    pub fn create(has_value: bool, value: T) -> Self {
        if has_value {
            FixedOption::full(value)
        } else {
            FixedOption::empty()
        }
    }

    /// Returns `true` if a value is present.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns a reference to the contained value, if present.
    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Converts into a standard [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Maps the contained value, preserving emptiness.
    pub fn map<U, F>(self, f: F) -> FixedOption<U>
    where
        F: FnOnce(T) -> U,
    {
        FixedOption {
            value: self.value.map(f),
        }
    }

    /// Resolves to the contained value if present, else `fallback`.
    pub fn or_value(self, fallback: T) -> T {
        match self.value {
            Some(v) => v,
            None => fallback,
        }
    }

    /// Resolves to the contained value if present, else `fallback()`.
    ///
    /// `fallback` is not invoked when a value is present.
    pub fn or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.value {
            Some(v) => v,
            None => fallback(),
        }
    }

    /// Returns an iterator over the 0 or 1 contained values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.value.as_ref(),
        }
    }
}

impl<T: Default> FixedOption<T> {
    /// Pure boolean query: `(true, value)` if present, else
    /// `(false, T::default())`. Never fails.
    pub fn try_single(self) -> (bool, T) {
        match self.value {
            Some(v) => (true, v),
            None => (false, T::default()),
        }
    }
}

impl<T> Default for FixedOption<T> {
    fn default() -> Self {
        FixedOption::empty()
    }
}

impl<T> From<Option<T>> for FixedOption<T> {
    fn from(value: Option<T>) -> Self {
        FixedOption { value }
    }
}

impl<T> From<FixedOption<T>> for Option<T> {
    fn from(opt: FixedOption<T>) -> Option<T> {
        opt.value
    }
}

impl<T> IntoIterator for FixedOption<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self.value }
    }
}

impl<'a, T> IntoIterator for &'a FixedOption<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator over a [`FixedOption`], yielding at most one value.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.inner.is_some() { 1 } else { 0 };
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// Borrowing iterator over a [`FixedOption`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.inner.is_some() { 1 } else { 0 };
        (n, Some(n))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
