// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two-state mandatory container.
//!
//! [`Mandatory<T>`] is [`Maybe<T>`](crate::Maybe) with the acceptable-absence
//! case removed at the type level: if the value is not there, that is a
//! defect, full stop. Construction from a plain `Option` records the
//! expected type on the missing path, and promotion into `Maybe` is lossless
//! (`Missing` stays `Missing`).

use core::fmt;

use crate::canonical::{AsMaybe, FromOption};
use crate::maybe::Maybe;
use crate::tag::TypeTag;

/// A value that must be justified when missing.
///
/// Equality ignores the `Missing` tag, same as [`Maybe`](crate::Maybe).
#[derive(Debug, Clone, Copy)]
pub enum Mandatory<T> {
    /// A value.
    Present(T),
    /// No value, but one was required.
    Missing(TypeTag),
}

impl<T> Mandatory<T> {
    /// Wraps a value.
    #[inline]
    pub fn new(value: T) -> Self {
        Mandatory::Present(value)
    }

    /// The missing container for `T`, with the tag filled in.
    #[inline]
    pub fn missing() -> Self {
        Mandatory::Missing(TypeTag::of::<T>())
    }

    /// Borrowed view of the container.
    #[inline]
    pub fn as_ref(&self) -> Mandatory<&T> {
        match self {
            Mandatory::Present(value) => Mandatory::Present(value),
            Mandatory::Missing(tag) => Mandatory::Missing(*tag),
        }
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Mandatory::Present(_))
    }

    /// Transforms a present value; `Missing` passes through, tag preserved.
    pub fn map<U, F>(self, f: F) -> Mandatory<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Mandatory::Present(value) => Mandatory::Present(f(value)),
            Mandatory::Missing(tag) => Mandatory::Missing(tag),
        }
    }

    /// Monadic bind within the mandatory kind.
    pub fn and_then<U, F>(self, f: F) -> Mandatory<U>
    where
        F: FnOnce(T) -> Mandatory<U>,
    {
        match self {
            Mandatory::Present(value) => f(value),
            Mandatory::Missing(tag) => Mandatory::Missing(tag),
        }
    }

    /// Looks up a value that must exist. A fresh empty lookup becomes
    /// `Missing` tagged with `U`; an existing `Missing` passes through.
    pub fn require<U, F>(self, f: F) -> Mandatory<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Mandatory::Present(value) => Mandatory::from(f(value)),
            Mandatory::Missing(tag) => Mandatory::Missing(tag),
        }
    }

    /// Looks up a value that is allowed not to exist.
    ///
    /// The one kind-changing operator: a fresh acceptable absence is not
    /// representable in `Mandatory`, so the result is the three-state
    /// [`Maybe<U>`]. An existing `Missing` passes through as `Missing`.
    pub fn suppose<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Mandatory::Present(value) => f(value).into_maybe(),
            Mandatory::Missing(tag) => Maybe::Missing(tag),
        }
    }
}

/// The construction bridge: an absent input is a defect by definition here,
/// and the tag records what was expected.
impl<T> From<Option<T>> for Mandatory<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Mandatory::Present(value),
            None => Mandatory::missing(),
        }
    }
}

impl<T> FromOption for Mandatory<T> {
    type Value = T;

    fn from_option(opt: Option<T>) -> Self {
        Mandatory::from(opt)
    }
}

/// Lossless promotion into the canonical container.
impl<T> From<Mandatory<T>> for Maybe<T> {
    fn from(mandatory: Mandatory<T>) -> Self {
        match mandatory {
            Mandatory::Present(value) => Maybe::Present(value),
            Mandatory::Missing(tag) => Maybe::Missing(tag),
        }
    }
}

/// Error from demoting a [`Maybe`](crate::Maybe) that turned out to be
/// acceptably absent: there is no mandatory classification for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsentError;

impl fmt::Display for AbsentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "acceptable absence has no mandatory form")
    }
}

impl std::error::Error for AbsentError {}

/// Fallible demotion. `Present` and `Missing` convert exactly (tag
/// preserved); `Absent` has no mandatory counterpart and is rejected.
impl<T> TryFrom<Maybe<T>> for Mandatory<T> {
    type Error = AbsentError;

    fn try_from(maybe: Maybe<T>) -> Result<Self, AbsentError> {
        match maybe {
            Maybe::Present(value) => Ok(Mandatory::Present(value)),
            Maybe::Missing(tag) => Ok(Mandatory::Missing(tag)),
            Maybe::Absent => Err(AbsentError),
        }
    }
}

/// State-wise equality, tag ignored.
impl<T: PartialEq> PartialEq for Mandatory<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Mandatory::Present(a), Mandatory::Present(b)) => a == b,
            (Mandatory::Missing(_), Mandatory::Missing(_)) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Mandatory<T> {}

impl<T: fmt::Display> fmt::Display for Mandatory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mandatory::Present(value) => write!(f, "Mandatory({})", value),
            Mandatory::Missing(tag) => write!(f, "Mandatory(missing: {})", tag),
        }
    }
}
