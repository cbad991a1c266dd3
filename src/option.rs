//! `require` and `suppose` for plain optionals.
//!
//! A pipeline often starts from a bare `Option` before any absence
//! classification exists. [`OptionExt`] lets it declare one at the first
//! composition step: `require` turns a failed lookup into a defect,
//! `suppose` keeps it ordinary absence. Either way an input `None` stays
//! acceptable; only the newly computed absence is classified.

use crate::canonical::AsMaybe;
use crate::mandatory::Mandatory;
use crate::maybe::Maybe;

/// Extends `Option` with the two classifying composition operators.
pub trait OptionExt {
    /// The wrapped value type.
    type Value;

    /// Looks up a value that must exist.
    ///
    /// `Some(v)` becomes `Present(f(v))`, or `Missing` tagged with `U` when
    /// `f` comes back empty. An input `None` stays `Absent`: the upstream
    /// absence was acceptable and `require` does not rewrite history.
    fn require<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(Self::Value) -> Option<U>;

    /// Looks up a value that is allowed not to exist. Equivalent to
    /// [`Option::and_then`]; named for symmetry with
    /// [`require`](Self::require).
    fn suppose<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(Self::Value) -> Option<U>;
}

impl<T> OptionExt for Option<T> {
    type Value = T;

    fn require<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Some(value) => Mandatory::from(f(value)).into_maybe(),
            None => Maybe::Absent,
        }
    }

    fn suppose<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.and_then(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TypeTag;

    fn lookup(key: String) -> Option<String> {
        match key.as_str() {
            "hello" => Some("HELLO".to_string()),
            _ => None,
        }
    }

    #[test]
    fn require_hit() {
        let result = Some("hello".to_string()).require(lookup);
        assert_eq!(result, Maybe::Present("HELLO".to_string()));
    }

    #[test]
    fn require_miss_is_a_defect() {
        let result = Some("world".to_string()).require(lookup);
        match result {
            Maybe::Missing(tag) => assert_eq!(tag, TypeTag::of::<String>()),
            other => panic!("expected missing, got {:?}", other),
        }
    }

    #[test]
    fn require_keeps_an_input_none_acceptable() {
        let result = None::<String>.require(lookup);
        assert_eq!(result, Maybe::Absent);
    }

    #[test]
    fn suppose_is_and_then() {
        assert_eq!(
            Some("hello".to_string()).suppose(lookup),
            Some("HELLO".to_string())
        );
        assert_eq!(Some("world".to_string()).suppose(lookup), None);
        assert_eq!(None::<String>.suppose(lookup), None);
    }
}
