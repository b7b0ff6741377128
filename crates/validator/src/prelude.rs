//! Convenient re-exports for common use.
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//! ```

// Core traits, messages and errors
pub use crate::foundation::{
    ConfigError, ErrorDisplay, ErrorMessage, ResourceId, ResourceResolver, Rule, RuleResult,
    TextInput, ValidationListener, ValidatorError, listener,
};

// Engine
pub use crate::engine::{AbortNotice, BatchOutcome, Mode, OrPolicy, Validator, ValidatorConfig};

// Bindings
pub use crate::validation::{Stage, Validation};

// Adapters
pub use crate::adapters::{ErrorBoard, LiveText, NoResources, SinkState, StringTable};

// Rules
pub use crate::rules::*;

// Macros
pub use crate::rule;
