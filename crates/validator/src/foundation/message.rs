//! Error message carried by every rule
//!
//! A rule fails with either a fixed text or an indirection to a localized
//! resource. The engine asks the message which form is available and resolves
//! it when the rule fails.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Text used when a rule is built without an explicit message.
pub const DEFAULT_ERROR_TEXT: &str = "Invalid input";

/// Identifier of a localized string, resolved through a
/// [`ResourceResolver`](crate::foundation::ResourceResolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// The message a rule reports when it rejects a value.
///
/// Either form may be absent. When both are present the resource id wins.
/// A message with neither form is a configuration error the engine reports
/// at the moment the owning rule fails.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::foundation::{ErrorMessage, ResourceId};
///
/// let text = ErrorMessage::text("Too short");
/// assert!(text.has_text_message());
///
/// let localized = ErrorMessage::resource(ResourceId(42)).with_text("fallback");
/// assert_eq!(localized.resource_id(), Some(ResourceId(42)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorMessage {
    resource_id: Option<ResourceId>,
    text: Option<Cow<'static, str>>,
}

impl ErrorMessage {
    /// A message with a fixed text.
    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            resource_id: None,
            text: Some(text.into()),
        }
    }

    /// A message that resolves to a localized resource.
    pub fn resource(id: impl Into<ResourceId>) -> Self {
        Self {
            resource_id: Some(id.into()),
            text: None,
        }
    }

    /// A message with no output configured.
    ///
    /// Rules carrying this message make the engine fail with
    /// [`ValidatorError::NoErrorOutput`](crate::foundation::ValidatorError::NoErrorOutput)
    /// once they reject a value.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            resource_id: None,
            text: None,
        }
    }

    /// Adds or replaces the fixed text.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Adds or replaces the resource id.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_resource(mut self, id: impl Into<ResourceId>) -> Self {
        self.resource_id = Some(id.into());
        self
    }

    /// Returns true if any form of output is configured.
    #[must_use]
    pub fn has_message(&self) -> bool {
        self.has_resource_message() || self.has_text_message()
    }

    /// Returns true if a resource id is configured.
    #[must_use]
    pub fn has_resource_message(&self) -> bool {
        self.resource_id.is_some()
    }

    /// Returns true if a fixed text is configured.
    #[must_use]
    pub fn has_text_message(&self) -> bool {
        self.text.is_some()
    }

    /// The configured resource id, if any.
    #[must_use]
    pub fn resource_id(&self) -> Option<ResourceId> {
        self.resource_id
    }

    /// The configured fixed text, if any.
    #[must_use]
    pub fn text_message(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Default for ErrorMessage {
    fn default() -> Self {
        Self::text(DEFAULT_ERROR_TEXT)
    }
}

impl From<&'static str> for ErrorMessage {
    fn from(text: &'static str) -> Self {
        Self::text(text)
    }
}

impl From<String> for ErrorMessage {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<ResourceId> for ErrorMessage {
    fn from(id: ResourceId) -> Self {
        Self::resource(id)
    }
}
