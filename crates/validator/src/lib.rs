//! # fieldcheck-validator
//!
//! A declarative field validation engine: bind input values to ordered rule
//! stages, evaluate a batch of bindings, show the first failing rule's
//! message per field, and hear one aggregated outcome.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let board = ErrorBoard::new();
//! let validator = Validator::new(NoResources, &board);
//!
//! let bindings = [
//!     Validation::new("username")
//!         .with_text("alice")
//!         .with_sink("username")
//!         .rule(not_empty())
//!         .and_rule(min_length(3)),
//!     Validation::new("email")
//!         .with_text("alice@example.com")
//!         .with_sink("email")
//!         .rule(email()),
//! ];
//!
//! let mut on_done = listener(
//!     |values| println!("accepted {values:?}"),
//!     || println!("form has errors"),
//! );
//! validator.validate(&mut on_done, &bindings)?;
//! ```
//!
//! ## Building blocks
//!
//! - [`foundation`]: the [`Rule`](foundation::Rule) trait, error messages,
//!   collaborator traits and error types
//! - [`rules`]: built-in rules, declared with the [`rule!`] macro
//! - [`validation`]: [`Validation`](validation::Validation) bindings and
//!   [`Stage`](validation::Stage)s
//! - [`engine`]: the [`Validator`](engine::Validator) and its configuration
//! - [`adapters`]: in-memory error display, resource table and live input

pub mod adapters;
pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validation;
