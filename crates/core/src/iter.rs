//! Single-pass sequence views over an Outcome's value.
//!
//! A `Success` yields its value exactly once; a `Failure` yields nothing.
//! A view is consumed by traversal. Ask the Outcome for a new one to
//! traverse again.

use std::iter::FusedIterator;

/// Borrowing view, created by [`Outcome::iter`](crate::Outcome::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    pub(crate) next: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.next.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning view, created by `Outcome::into_iter`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    pub(crate) next: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.next.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
