//! A container for figure attributes that accept either a single value or a list of values.
//!
//! Charting schemas commonly mark an attribute as "array ok": `marker.color` may be one color for
//! the whole trace, or one color per point. [`OneOrMany`] models that field and, with the `serde`
//! feature, encodes and decodes it while preserving whichever shape was present:
//!
//! - `OneOrMany::One(v)` encodes as a bare `v`, never as a one-element array.
//! - `OneOrMany::Many(vs)` encodes as an array, including the empty array.
//! - `OneOrMany::None` encodes as `null`.
//!
//! Decoding branches only on the outer shape of the wire value, so `[12.3]` decodes to
//! `Many(vec![12.3])` and `12.3` decodes to `One(12.3)`.
#![deny(clippy::missing_inline_in_public_items)]

mod iter;
pub use iter::{IntoIter, Iter};

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
pub mod error;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "serde")]
mod ser;

#[cfg(feature = "serde")]
pub use error::DecodeError;
#[cfg(feature = "json")]
pub use error::Error;

use std::{
    cmp::Ordering,
    collections::HashSet,
    hash::Hash,
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

/// A type that can be either one value, many values, or no value at all.
///
/// The variant is the source of truth for the wire shape: a `Many` holding a single element is
/// still a list, and a `One` holding a zero value is still a value.
///
/// To be useful outside of (de)serialization, it implements many of the same traits and functions
/// as `Vec<T>` and `Option<T>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
    #[default]
    None,
}

/// The name charting schemas use for attributes that take a value or an array of values.
pub type ArrayOk<T> = OneOrMany<T>;

impl<T> OneOrMany<T> {
    /// Returns the number of elements in the `OneOrMany`.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(t) => t.len(),
            Self::None => 0,
        }
    }

    /// Returns `true` if the `OneOrMany` holds no elements.
    ///
    /// Note that `Many(vec![])` is empty but is not `None`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at the given index, or `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        match self {
            Self::One(t) if index == 0 => Some(t),
            Self::One(_) | Self::None => None,
            Self::Many(t) => t.get(index),
        }
    }

    /// Returns the first value, or `None` if the `OneOrMany` is empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last value, or `None` if the `OneOrMany` is empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns `true` if the `OneOrMany` contains the given value.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Pushes a new value onto the end of the `OneOrMany`.
    ///
    /// `None` becomes `One`, `One` becomes `Many`, and `Many` grows.
    #[inline]
    pub fn push(&mut self, new: T) {
        *self = match std::mem::take(self) {
            Self::One(t) => Self::Many(vec![t, new]),
            Self::Many(mut t) => {
                t.push(new);
                Self::Many(t)
            }
            Self::None => Self::One(new),
        };
    }

    /// Pops a value from the end of the `OneOrMany`.
    ///
    /// Popping from `One` leaves `None`. Popping from `Many` leaves a (possibly empty) `Many`.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::One(t) => Some(t),
            Self::Many(mut t) => {
                let old = t.pop();
                *self = Self::Many(t);
                old
            }
            Self::None => None,
        }
    }

    /// Checks if the `OneOrMany` is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Checks if the `OneOrMany` is `One`.
    #[inline]
    pub const fn is_one(&self) -> bool {
        matches!(self, Self::One(_))
    }

    /// Checks if the `OneOrMany` is `Many`.
    #[inline]
    pub const fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// Checks if the `OneOrMany` is `One` or `Many`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.is_one() || self.is_many()
    }

    /// Gets a slice of the `OneOrMany`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(t) => std::slice::from_ref(t),
            Self::Many(t) => t,
            Self::None => &[],
        }
    }

    /// Gets a mutable slice of the `OneOrMany`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Self::One(t) => std::slice::from_mut(t),
            Self::Many(t) => t,
            Self::None => &mut [],
        }
    }

    /// Convert a `&OneOrMany<T>` to an `OneOrMany<&T>`
    ///
    /// Note, this will unfortunately cause an allocation if the `OneOrMany` is `Many`
    #[inline]
    pub fn as_ref(&self) -> OneOrMany<&T> {
        match *self {
            Self::One(ref x) => OneOrMany::One(x),
            Self::Many(ref v) => OneOrMany::Many(v.iter().collect()),
            Self::None => OneOrMany::None,
        }
    }

    /// Applies `f` to every element, keeping the shape.
    #[inline]
    pub fn map<U, F>(self, mut f: F) -> OneOrMany<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Self::One(t) => OneOrMany::One(f(t)),
            Self::Many(v) => OneOrMany::Many(v.into_iter().map(f).collect()),
            Self::None => OneOrMany::None,
        }
    }

    /// Converts into a `Vec`, forgetting the shape.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the shortest form holding the same elements.
    ///
    /// `Many(vec![])` becomes `None` and `Many(vec![x])` becomes `One(x)`. This changes the wire
    /// shape, so it is never applied implicitly.
    #[inline]
    #[must_use]
    pub fn compact(self) -> Self {
        match self {
            Self::Many(v) if v.len() <= 1 => v.into_iter().next().map_or(Self::None, Self::One),
            other => other,
        }
    }

    /// remove duplicates from the `OneOrMany`, keeping the first occurrence of each value
    #[inline]
    pub fn dedup(&mut self)
    where
        T: Clone + Eq + Hash,
    {
        self.dedup_by_key(T::clone);
    }

    /// remove duplicates from the `OneOrMany` by some key, keeping the first occurrence
    #[inline]
    pub fn dedup_by_key<F, K>(&mut self, mut key: F)
    where
        F: FnMut(&T) -> K,
        K: Eq + Hash,
    {
        if let Self::Many(v) = self {
            let mut set = HashSet::new();
            v.retain(|t| set.insert(key(t)));
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    #[inline]
    fn from(t: T) -> Self {
        Self::One(t)
    }
}

impl<T> From<Option<T>> for OneOrMany<T> {
    #[inline]
    fn from(t: Option<T>) -> Self {
        t.map_or(Self::None, Self::One)
    }
}

impl<T> From<Option<Vec<T>>> for OneOrMany<T> {
    #[inline]
    fn from(t: Option<Vec<T>>) -> Self {
        t.map_or(Self::None, Self::Many)
    }
}

impl<T> From<Option<Self>> for OneOrMany<T> {
    #[inline]
    fn from(t: Option<Self>) -> Self {
        t.unwrap_or_default()
    }
}

impl<T: Clone> From<&[T]> for OneOrMany<T> {
    #[inline]
    fn from(t: &[T]) -> Self {
        Self::Many(t.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for OneOrMany<T> {
    #[inline]
    fn from(t: [T; N]) -> Self {
        Self::Many(t.into())
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    #[inline]
    fn from(t: Vec<T>) -> Self {
        Self::Many(t)
    }
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    #[inline]
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::One(one) => vec![one],
            OneOrMany::Many(many) => many,
            OneOrMany::None => vec![],
        }
    }
}

// implement index traits by delegating to the slice
impl<T, I: SliceIndex<[T]>> Index<I> for OneOrMany<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}
impl<T, I: SliceIndex<[T]>> IndexMut<I> for OneOrMany<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

// None < One < Many
impl<T> PartialOrd<Self> for OneOrMany<T>
where
    T: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::One(t1), Self::One(t2)) => t1.partial_cmp(t2),
            (Self::Many(t1), Self::Many(t2)) => t1.partial_cmp(t2),
            (Self::None, Self::None) => Some(Ordering::Equal),
            (Self::None, _) => Some(Ordering::Less),
            (_, Self::None) => Some(Ordering::Greater),
            (Self::One(_), _) => Some(Ordering::Less),
            (_, Self::One(_)) => Some(Ordering::Greater),
        }
    }
}

// None < One < Many
impl<T> Ord for OneOrMany<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::One(t1), Self::One(t2)) => t1.cmp(t2),
            (Self::Many(t1), Self::Many(t2)) => t1.cmp(t2),
            (Self::None, Self::None) => Ordering::Equal,
            (Self::None, _) => Ordering::Less,
            (_, Self::None) => Ordering::Greater,
            (Self::One(_), _) => Ordering::Less,
            (_, Self::One(_)) => Ordering::Greater,
        }
    }
}
