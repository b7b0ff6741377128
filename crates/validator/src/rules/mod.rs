//! Built-in rules
//!
//! A closed set of ready-to-use rules. Implement
//! [`Rule`](crate::foundation::Rule) directly, or use [`Predicate`], for
//! anything else.
//!
//! # Categories
//!
//! - **Equality**: [`Equal`], [`NotEqual`]
//! - **Presence / length**: [`Required`], [`NotEmpty`], [`MinLength`],
//!   [`MaxLength`], [`ExactLength`], [`LengthRange`]
//! - **Substrings / character classes**: [`Contains`], [`NotContains`],
//!   [`StartsWith`], [`EndsWith`], [`Numeric`], [`Alphabetic`],
//!   [`Alphanumeric`], [`Uppercase`], [`Lowercase`]
//! - **Patterns**: [`Matches`], [`Email`]
//! - **Custom**: [`Predicate`]

pub mod content;
pub mod custom;
pub mod equality;
pub mod length;
pub mod pattern;

pub use content::{Email, Matches, email, matches};
pub use custom::{Predicate, predicate};
pub use equality::{Equal, NotEqual, equal, not_equal};
pub use length::{
    ExactLength, LengthRange, MaxLength, MinLength, NotEmpty, Required, exact_length,
    length_range, max_length, min_length, not_empty, required,
};
pub use pattern::{
    Alphabetic, Alphanumeric, Contains, EndsWith, Lowercase, NotContains, Numeric, StartsWith,
    Uppercase, alphabetic, alphanumeric, contains, ends_with, lowercase, not_contains, numeric,
    starts_with, uppercase,
};
