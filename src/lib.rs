//! A generalized optional that distinguishes *why* a value is absent.
//!
//! `Option<T>` collapses "not present" into one case. This crate splits it
//! into two: absence that is acceptable and absence that is a defect. The
//! type system then tracks which outcome resulted as values flow through a
//! pipeline of lookups.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │   tag.rs    │────▶│    maybe.rs      │◀────│ mandatory.rs │
//! │  (TypeTag)  │     │ (Maybe: Present/ │     │ (Mandatory:  │
//! │             │     │  Absent/Missing) │     │  no Absent)  │
//! └─────────────┘     └──────────────────┘     └──────────────┘
//!                              ▲                       ▲
//!                              │                       │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       canonical.rs                          │
//! │  (AsMaybe - every absence-aware type, Option included,      │
//! │   viewed as a Maybe; canonical_eq built on that view)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! | Module      | Exports                                 | Purpose                       |
//! |-------------|-----------------------------------------|-------------------------------|
//! | `tag`       | `TypeTag`                               | Diagnostic type identity      |
//! | `maybe`     | `Maybe`                                 | Three-state container         |
//! | `mandatory` | `Mandatory`, `AbsentError`              | Two-state specialization      |
//! | `canonical` | `AsMaybe`, `FromOption`, `canonical_eq` | Cross-type view and equality  |
//! | `option`    | `OptionExt`                             | `require`/`suppose` on Option |
//!
//! # Usage
//!
//! The two classifying operators are `require` (a failed lookup is a defect)
//! and `suppose` (a failed lookup is fine). Each classifies only the absence
//! it computes itself; an absence that already exists passes through every
//! operator unchanged.
//!
//! ```
//! use maybe_required::{AsMaybe, Maybe, Mandatory, OptionExt};
//! use std::collections::HashMap;
//!
//! let store: HashMap<&str, &str> = [("hello", "HELLO")].into();
//!
//! // The key is optional, but if it is there the store must contain it.
//! let found = Some("hello").require(|k| store.get(k).copied());
//! assert_eq!(found, Maybe::Present("HELLO"));
//!
//! // A key that is allowed to be absent stays acceptable...
//! let none: Option<&str> = None;
//! assert_eq!(none.require(|k| store.get(k).copied()), Maybe::Absent);
//!
//! // ...while a required key that the store lacks is a defect.
//! let broken = Mandatory::new("world").require(|k| store.get(k).copied());
//! assert!(broken.is_missing());
//! ```

// Module declarations
mod canonical;
mod mandatory;
mod maybe;
mod option;
mod tag;

// Re-exports for public API
pub use canonical::{canonical_eq, AsMaybe, FromOption};
pub use mandatory::{AbsentError, Mandatory};
pub use maybe::Maybe;
pub use option::OptionExt;
pub use tag::TypeTag;
