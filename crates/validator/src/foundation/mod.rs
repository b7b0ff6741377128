//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Rule`] plus the collaborator seams [`TextInput`],
//!   [`ErrorDisplay`], [`ResourceResolver`] and [`ValidationListener`]
//! - **Messages**: [`ErrorMessage`], [`ResourceId`]
//! - **Errors**: [`ValidatorError`], [`ConfigError`]
//!
//! # Two failure taxonomies
//!
//! A rule returning `Ok(false)` is a validation failure: expected, data
//! driven, reported through the error display and the batch listener.
//! A [`ValidatorError`] is a contract violation (a rule without any error
//! output, a comparison rule handed no value) and aborts evaluation.
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let rule = Equal::new("secret");
//! assert_eq!(rule.validate(Some("secret")), Ok(true));
//! assert_eq!(rule.validate(Some("guess")), Ok(false));
//! assert!(rule.validate(None).is_err());
//! ```

pub mod error;
pub mod message;
pub mod traits;

pub use error::{ConfigError, ValidatorError};
pub use message::{DEFAULT_ERROR_TEXT, ErrorMessage, ResourceId};
pub use traits::{
    ErrorDisplay, FnListener, ResourceResolver, Rule, TextInput, ValidationListener, listener,
};

/// A rule evaluation result.
pub type RuleResult = Result<bool, ValidatorError>;
