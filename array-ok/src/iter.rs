use crate::OneOrMany;

/// Collecting always produces `Many`, even for zero or one items.
impl<T> FromIterator<T> for OneOrMany<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Many(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for OneOrMany<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

#[allow(clippy::module_name_repetitions)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<T> OneOrMany<T> {
    /// Returns an iterator over the values in the `OneOrMany`.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_slice().iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A consuming iterator over the values in a `OneOrMany`.
#[allow(clippy::module_name_repetitions)]
pub struct IntoIter<T> {
    inner_iter: InnerIntoIter<T>,
}

enum InnerIntoIter<T> {
    One(Option<T>),
    Many(std::vec::IntoIter<T>),
}

impl<T> IntoIterator for OneOrMany<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let inner_iter = match self {
            Self::One(t) => InnerIntoIter::One(Some(t)),
            Self::Many(v) => InnerIntoIter::Many(v.into_iter()),
            Self::None => InnerIntoIter::One(None),
        };

        IntoIter { inner_iter }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.inner_iter {
            InnerIntoIter::One(ref mut t) => t.take(),
            InnerIntoIter::Many(ref mut v) => v.next(),
        }
    }
}
