// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime type identity for the missing path.
//!
//! When a container records that a value is missing, the value itself is gone;
//! the only thing left to report is *what type* it would have had. `TypeTag`
//! is that report: an opaque, comparable handle built from the compiler's type
//! name. It is diagnostic only. Nothing in the algebra branches on it, and
//! container equality ignores it entirely.

use core::fmt;

/// Opaque handle identifying the type a missing value should have had.
///
/// Built from [`core::any::type_name`], so it carries no `'static` bound and
/// fits in an enum payload next to payload-free cases. Two tags compare equal
/// when they name the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    name: &'static str,
}

impl TypeTag {
    /// The tag for type `T`.
    #[inline]
    pub fn of<T: ?Sized>() -> Self {
        TypeTag {
            name: core::any::type_name::<T>(),
        }
    }

    /// The sentinel tag reported when nothing is missing.
    #[inline]
    pub fn void() -> Self {
        Self::of::<()>()
    }

    /// The recorded type name. Compiler-generated and unstable across
    /// toolchains; print it, don't parse it.
    #[inline]
    pub fn name(self) -> &'static str {
        self.name
    }

    /// Whether this is the sentinel tag.
    #[inline]
    pub fn is_void(self) -> bool {
        self == Self::void()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
