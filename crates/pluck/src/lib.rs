//! Pluck - Zero-or-one sequence extraction with eager and deferred options.
//!
//! Pluck reduces a sequence to at most one value. It provides:
//!
//! - [`FixedOption`]: an immutable container of zero or one values, itself
//!   usable as a 0-or-1-element sequence
//! - [`DeferredOption`]: an option recomputed from a closure on every read,
//!   so it tracks a mutating source
//! - Extraction operators: `single`, `first`, `last`, `element_at`, each
//!   with an optional predicate, enforcing "at most one match" where
//!   `single` semantics require it
//! - Adapters on both random-access sources ([`SequenceExt`]) and one-shot
//!   iterators ([`IteratorExt`]), with boolean `try_get_*` queries and
//!   `*_or_value` / `*_or_else` fallback substitution
//!
//! # Quick Start
//!
//! ```rust
//! use pluck::{ExtractError, IteratorExt, SequenceExt};
//!
//! let items = vec![10, 20, 30];
//!
//! // Eager extraction: computed now, fixed forever.
//! assert_eq!(items.first_fixed().into_option(), Some(10));
//! assert_eq!(items.element_at_fixed(5).into_option(), None);
//! assert_eq!(items.single_fixed_where(|&x| x > 25)?.into_option(), Some(30));
//!
//! // `single` enforces multiplicity; the wording tells you whether a
//! // predicate was in effect.
//! assert_eq!(items.single_fixed(), Err(ExtractError::MoreThanOneElement));
//! assert_eq!(
//!     items.single_fixed_where(|&x| x > 15),
//!     Err(ExtractError::MoreThanOneMatch),
//! );
//!
//! // Deferred extraction: re-scanned on every read.
//! let last = items.last_opt();
//! assert_eq!(last.fix()?.into_option(), Some(30));
//!
//! // One-shot cursors get the same eager surface.
//! assert_eq!((1..=9).last_fixed().into_option(), Some(9));
//! assert_eq!(std::iter::empty::<i32>().first_or_value(-1), -1);
//! # Ok::<(), pluck::ExtractError>(())
//! ```
//!
//! # Evaluation Modes
//!
//! | Mode | Entry points | Behavior |
//! |------|--------------|----------|
//! | Eager | `*_fixed` | Scan runs once; result is immutable |
//! | Deferred | `*_opt` | Scan re-runs on every `fix()` |
//!
//! Deferred options over externally-mutable state may observe a different
//! answer on each read; that is intentional and unsynchronized. Nothing in
//! this crate is thread-safe beyond what the captured source provides.
//!
//! # Failure Semantics
//!
//! Only `single` can fail, and only on multiplicity. Everything else maps
//! "no such element" (empty source, no predicate match, out-of-range index)
//! to an empty option. Eager calls fail at call time; deferred options fail
//! at the moment of evaluation, never at construction.

mod builder;
mod deferred;
mod error;
pub mod extract;
mod option;
mod seq;

// Re-export public API
pub use builder::OptionBuilder;
pub use deferred::DeferredOption;
pub use error::{ExtractError, Result};
pub use option::{FixedOption, IntoIter, Iter};
pub use seq::{Items, IteratorExt, RandomAccess, SequenceExt};
