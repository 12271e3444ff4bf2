//! Immutable input views.
//!
//! A [`ParseInput`] borrows the caller's element sequence and tracks how far
//! into it the view starts. Advancing produces a new view; the backing slice
//! is never touched, so any number of views may alias the same storage.

use std::fmt;

/// A suffix view over a borrowed sequence of elements.
///
/// This is 24 bytes: a fat slice pointer plus the absolute offset of the
/// first element within the sequence the caller originally handed in.
pub struct ParseInput<'a, E> {
    elements: &'a [E],
    offset: usize,
}

impl<'a, E> ParseInput<'a, E> {
    /// Create a view over the whole sequence, starting at offset 0.
    #[inline]
    pub fn new(elements: &'a [E]) -> Self {
        Self { elements, offset: 0 }
    }

    /// The first element of the view, if any.
    #[inline]
    pub fn first(&self) -> Option<&'a E> {
        self.elements.first()
    }

    /// Split off the first element, returning it and the view after it.
    #[inline]
    pub fn split_first(&self) -> Option<(&'a E, Self)> {
        let (head, _) = self.elements.split_first()?;
        Some((head, self.advance(1)))
    }

    /// View starting `n` elements further on. Clamps at the end of input.
    #[inline]
    pub fn advance(&self, n: usize) -> Self {
        let n = n.min(self.elements.len());
        Self {
            elements: &self.elements[n..],
            offset: self.offset + n,
        }
    }

    /// Number of elements left in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if nothing is left to parse.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Absolute position of this view within the original sequence.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The remaining elements.
    #[inline]
    pub fn as_slice(&self) -> &'a [E] {
        self.elements
    }

    /// Elements consumed between `earlier` and this view.
    ///
    /// Returns 0 if `earlier` is not actually behind this view.
    #[inline]
    pub fn consumed_since(&self, earlier: &Self) -> usize {
        self.offset.saturating_sub(earlier.offset)
    }
}

impl<E> Clone for ParseInput<'_, E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ParseInput<'_, E> {}

impl<E: PartialEq> PartialEq for ParseInput<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.elements == other.elements
    }
}

impl<E: Eq> Eq for ParseInput<'_, E> {}

impl<E: fmt::Debug> fmt::Debug for ParseInput<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseInput")
            .field("offset", &self.offset)
            .field("rest", &self.elements)
            .finish()
    }
}

impl<'a, E> From<&'a [E]> for ParseInput<'a, E> {
    #[inline]
    fn from(elements: &'a [E]) -> Self {
        Self::new(elements)
    }
}

impl<'a, E> From<&'a Vec<E>> for ParseInput<'a, E> {
    #[inline]
    fn from(elements: &'a Vec<E>) -> Self {
        Self::new(elements.as_slice())
    }
}

impl<'a, E, const N: usize> From<&'a [E; N]> for ParseInput<'a, E> {
    #[inline]
    fn from(elements: &'a [E; N]) -> Self {
        Self::new(elements.as_slice())
    }
}
