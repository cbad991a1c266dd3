// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three-state canonical container.
//!
//! `Option<T>` collapses "not present" into one case. [`Maybe<T>`] splits it
//! into two: absence that is acceptable ([`Maybe::Absent`]) and absence that
//! is a defect ([`Maybe::Missing`]). Every absence-aware type in this crate
//! converts to a `Maybe` view, which makes it the common currency for
//! composition and equality.
//!
//! # Invariants
//!
//! - Exactly one state holds; containers are immutable. Every combinator
//!   returns a new container.
//! - An existing absence always passes through a combinator unchanged.
//!   [`require`](Maybe::require) and [`suppose`](Maybe::suppose) classify
//!   only the absence they compute themselves.
//! - The tag carried by `Missing` is preserved verbatim across `map` and
//!   `and_then`; the value it names was never produced, so it is not retyped.

use core::fmt;

use crate::canonical::AsMaybe;
use crate::mandatory::Mandatory;
use crate::tag::TypeTag;

/// A value that is present, acceptably absent, or missing.
///
/// `Missing` records the type the value would have had, for diagnostics.
/// The tag takes no part in equality: any two `Missing` values compare
/// equal, and neither ever equals `Absent`.
#[derive(Debug, Clone, Copy)]
pub enum Maybe<T> {
    /// A value.
    Present(T),
    /// No value, and none was required.
    Absent,
    /// No value, but one was required.
    Missing(TypeTag),
}

impl<T> Maybe<T> {
    /// The missing container for `T`, with the tag filled in.
    #[inline]
    pub fn missing() -> Self {
        Maybe::Missing(TypeTag::of::<T>())
    }

    /// Borrowed view of the container, mirroring [`Option::as_ref`].
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
            Maybe::Missing(tag) => Maybe::Missing(*tag),
        }
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Transforms a present value. Both absences pass through unchanged,
    /// tag and all.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
            Maybe::Missing(tag) => Maybe::Missing(tag),
        }
    }

    /// Monadic bind: applies `f` to a present value, passes both absences
    /// through unchanged.
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
            Maybe::Missing(tag) => Maybe::Missing(tag),
        }
    }

    /// Looks up a value that must exist.
    ///
    /// Given `Present(v)`, the result is `Present(f(v))` or, when `f` comes
    /// back empty, `Missing` tagged with `U`: a lookup that was required to
    /// succeed did not. An absence that existed before the call passes
    /// through unchanged; in particular an upstream `Absent` stays
    /// acceptable.
    pub fn require<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Maybe::Present(value) => Mandatory::from(f(value)).into_maybe(),
            Maybe::Absent => Maybe::Absent,
            Maybe::Missing(tag) => Maybe::Missing(tag),
        }
    }

    /// Looks up a value that is allowed not to exist.
    ///
    /// Given `Present(v)`, the result is `Present(f(v))` or, when `f` comes
    /// back empty, `Absent`. An absence that existed before the call passes
    /// through unchanged; in particular an upstream `Missing` stays a
    /// defect.
    pub fn suppose<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Maybe::Present(value) => f(value).into_maybe(),
            Maybe::Absent => Maybe::Absent,
            Maybe::Missing(tag) => Maybe::Missing(tag),
        }
    }
}

/// State-wise equality. The `Missing` tag is diagnostic and deliberately
/// ignored: two missing containers are equal even when they expected
/// different types.
impl<T: PartialEq> PartialEq for Maybe<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => a == b,
            (Maybe::Absent, Maybe::Absent) => true,
            (Maybe::Missing(_), Maybe::Missing(_)) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(value) => write!(f, "Maybe({})", value),
            Maybe::Absent => write!(f, "Maybe(absent)"),
            Maybe::Missing(tag) => write!(f, "Maybe(missing: {})", tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(key: String) -> Option<String> {
        match key.as_str() {
            "hello" => Some("HELLO".to_string()),
            _ => None,
        }
    }

    #[test]
    fn map_transforms_present() {
        let maybe = Maybe::Present("hello".to_string());
        assert_eq!(maybe.map(|s| s.len()), Maybe::Present(5));
    }

    #[test]
    fn map_passes_absences_through() {
        let absent: Maybe<String> = Maybe::Absent;
        assert_eq!(absent.map(|s| s.len()), Maybe::Absent);

        let missing: Maybe<String> = Maybe::missing();
        let mapped = missing.map(|s| s.len());
        // The tag still names the type that was expected upstream.
        match mapped {
            Maybe::Missing(tag) => assert_eq!(tag, TypeTag::of::<String>()),
            other => panic!("expected missing, got {:?}", other),
        }
    }

    #[test]
    fn and_then_binds_present() {
        let maybe = Maybe::Present("hello".to_string());
        assert_eq!(maybe.and_then(|s| Maybe::Present(s.len())), Maybe::Present(5));
    }

    #[test]
    fn and_then_passes_absences_through() {
        let absent: Maybe<String> = Maybe::Absent;
        assert_eq!(absent.and_then(|s| Maybe::Present(s.len())), Maybe::Absent);

        let missing: Maybe<String> = Maybe::missing();
        assert_eq!(missing.and_then(|s| Maybe::Present(s.len())), Maybe::missing());
    }

    #[test]
    fn require_present_hit() {
        let maybe = Maybe::Present("hello".to_string());
        assert_eq!(maybe.require(lookup), Maybe::Present("HELLO".to_string()));
    }

    #[test]
    fn require_present_miss_is_missing() {
        let maybe = Maybe::Present("world".to_string());
        let result = maybe.require(lookup);
        match result {
            Maybe::Missing(tag) => assert_eq!(tag, TypeTag::of::<String>()),
            other => panic!("expected missing, got {:?}", other),
        }
    }

    #[test]
    fn require_leaves_upstream_absent_acceptable() {
        let absent: Maybe<String> = Maybe::Absent;
        assert_eq!(absent.require(lookup), Maybe::Absent);
    }

    #[test]
    fn suppose_present_hit() {
        let maybe = Maybe::Present("hello".to_string());
        assert_eq!(maybe.suppose(lookup), Maybe::Present("HELLO".to_string()));
    }

    #[test]
    fn suppose_present_miss_is_absent() {
        let maybe = Maybe::Present("world".to_string());
        assert_eq!(maybe.suppose(lookup), Maybe::Absent);
    }

    #[test]
    fn suppose_leaves_upstream_missing_defective() {
        let missing: Maybe<String> = Maybe::missing();
        assert_eq!(missing.suppose(lookup), Maybe::missing());
    }

    #[test]
    fn equality_matrix() {
        assert_eq!(Maybe::Present(1), Maybe::Present(1));
        assert_ne!(Maybe::Present(1), Maybe::Present(2));
        assert_eq!(Maybe::<i32>::Absent, Maybe::Absent);
        assert_eq!(Maybe::<i32>::missing(), Maybe::missing());

        assert_ne!(Maybe::Present(1), Maybe::Absent);
        assert_ne!(Maybe::Present(1), Maybe::missing());
        assert_ne!(Maybe::<i32>::Absent, Maybe::missing());
    }

    #[test]
    fn missing_equality_ignores_the_tag() {
        let a: Maybe<i32> = Maybe::Missing(TypeTag::of::<i32>());
        let b: Maybe<i32> = Maybe::Missing(TypeTag::of::<String>());
        assert_eq!(a, b);
    }

    #[test]
    fn display_renders_each_state() {
        assert_eq!(Maybe::Present(3).to_string(), "Maybe(3)");
        assert_eq!(Maybe::<i32>::Absent.to_string(), "Maybe(absent)");
        assert_eq!(Maybe::<i32>::missing().to_string(), "Maybe(missing: i32)");
    }
}
