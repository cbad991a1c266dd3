//! The canonical-conversion contract.
//!
//! Anything absence-aware can be viewed as a [`Maybe`]: present, acceptably
//! absent, or missing. [`AsMaybe`] is that capability, and everything else
//! here is derived from it - the `is_missing` / `missing_type` / `value`
//! views and [`canonical_eq`], the one equality definition shared by every
//! implementor. There are no per-pair equality rules; a `Mandatory`, a
//! `Maybe`, and a plain `Option` all compare through the same three-state
//! view.
//!
//! The asymmetry to keep in mind: `Option::None` canonicalizes to `Absent`,
//! so a missing `Mandatory` is **never** equal to an empty `Option`. A
//! defect does not quietly become ordinary absence by changing the type you
//! compare it against.

use crate::mandatory::Mandatory;
use crate::maybe::Maybe;
use crate::tag::TypeTag;

/// Capability of being viewed as the canonical three-state container.
///
/// Both forms of the view are pure and total: [`as_maybe`](Self::as_maybe)
/// borrows, [`into_maybe`](Self::into_maybe) consumes. The provided views
/// are all derived from the borrowed form.
pub trait AsMaybe {
    /// The wrapped value type.
    type Value;

    /// Borrowed canonical view.
    fn as_maybe(&self) -> Maybe<&Self::Value>;

    /// Consuming canonical view.
    fn into_maybe(self) -> Maybe<Self::Value>
    where
        Self: Sized;

    /// True iff the container should have a value but does not.
    fn is_missing(&self) -> bool {
        matches!(self.as_maybe(), Maybe::Missing(_))
    }

    /// The type that is missing, or [`TypeTag::void`] when nothing is.
    fn missing_type(&self) -> TypeTag {
        match self.as_maybe() {
            Maybe::Missing(tag) => tag,
            _ => TypeTag::void(),
        }
    }

    /// The present value, if any.
    fn value(&self) -> Option<&Self::Value> {
        match self.as_maybe() {
            Maybe::Present(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> AsMaybe for Maybe<T> {
    type Value = T;

    fn as_maybe(&self) -> Maybe<&T> {
        self.as_ref()
    }

    fn into_maybe(self) -> Maybe<T> {
        self
    }
}

impl<T> AsMaybe for Mandatory<T> {
    type Value = T;

    fn as_maybe(&self) -> Maybe<&T> {
        match self {
            Mandatory::Present(value) => Maybe::Present(value),
            Mandatory::Missing(tag) => Maybe::Missing(*tag),
        }
    }

    fn into_maybe(self) -> Maybe<T> {
        self.into()
    }
}

/// A bare optional is always an acceptable absence: with no richer context
/// there is nothing to justify calling it a defect.
impl<T> AsMaybe for Option<T> {
    type Value = T;

    fn as_maybe(&self) -> Maybe<&T> {
        match self {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }

    fn into_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

/// Capability of being constructed from a plain optional, choosing the
/// absence classification at the point of construction.
///
/// [`Mandatory`] classifies an absent input as a defect; `Option` keeps it
/// acceptable. [`Maybe`] deliberately does not implement this: a bare absent
/// input carries no intent, so callers reach `Maybe` through `Mandatory` or
/// by writing the absence case explicitly.
pub trait FromOption {
    /// The wrapped value type.
    type Value;

    fn from_option(opt: Option<Self::Value>) -> Self;
}

impl<T> FromOption for Option<T> {
    type Value = T;

    fn from_option(opt: Option<T>) -> Self {
        opt
    }
}

/// Equality over canonical views, for any two absence-aware types wrapping
/// the same value type.
///
/// Present values compare by `==`; same-kind absences are equal (the
/// `Missing` tag carries no weight); `Absent` and `Missing` are never equal
/// to each other.
pub fn canonical_eq<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: AsMaybe,
    B: AsMaybe<Value = A::Value>,
    A::Value: PartialEq,
{
    match (lhs.as_maybe(), rhs.as_maybe()) {
        (Maybe::Present(a), Maybe::Present(b)) => a == b,
        (Maybe::Absent, Maybe::Absent) => true,
        (Maybe::Missing(_), Maybe::Missing(_)) => true,
        _ => false,
    }
}

impl<T: PartialEq> PartialEq<Mandatory<T>> for Maybe<T> {
    fn eq(&self, other: &Mandatory<T>) -> bool {
        canonical_eq(self, other)
    }
}

impl<T: PartialEq> PartialEq<Maybe<T>> for Mandatory<T> {
    fn eq(&self, other: &Maybe<T>) -> bool {
        canonical_eq(self, other)
    }
}

impl<T: PartialEq> PartialEq<Option<T>> for Maybe<T> {
    fn eq(&self, other: &Option<T>) -> bool {
        canonical_eq(self, other)
    }
}

impl<T: PartialEq> PartialEq<Maybe<T>> for Option<T> {
    fn eq(&self, other: &Maybe<T>) -> bool {
        canonical_eq(self, other)
    }
}

impl<T: PartialEq> PartialEq<Option<T>> for Mandatory<T> {
    fn eq(&self, other: &Option<T>) -> bool {
        canonical_eq(self, other)
    }
}

impl<T: PartialEq> PartialEq<Mandatory<T>> for Option<T> {
    fn eq(&self, other: &Mandatory<T>) -> bool {
        canonical_eq(self, other)
    }
}
