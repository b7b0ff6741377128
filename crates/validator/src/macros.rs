//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: declare a complete rule (struct + `Rule` impl + message
//!   overrides + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::rule;
//!
//! // Unit rule (no parameters)
//! rule! {
//!     pub NoSpaces;
//!     check(input) { !input.contains(' ') }
//!     message { "Must not contain spaces" }
//!     fn no_spaces();
//! }
//!
//! // Rule with parameters
//! rule! {
//!     pub MinLength { min: usize };
//!     check(self, input) { input.chars().count() >= self.min }
//!     message { format!("Must be at least {min} characters") }
//!     new(min: usize) { min: min }
//!     fn min_length(min: usize);
//! }
//! ```

/// Declares a rule: struct definition, [`Rule`](crate::foundation::Rule)
/// implementation, constructor, message overrides and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`.
///
/// Every generated rule carries an [`ErrorMessage`](crate::foundation::ErrorMessage)
/// initialised from the `message` block and treats an absent value as
/// [`ValidatorError::MissingValue`](crate::foundation::ValidatorError::MissingValue).
/// Inside the `message` block each parameter is bound by reference under its
/// field name.
///
/// # Variants
///
/// **Unit rule** (only the message):
/// ```rust,ignore
/// rule! {
///     pub NotEmpty;
///     check(input) { !input.is_empty() }
///     message { "Value must not be empty" }
///     fn not_empty();
/// }
/// ```
///
/// **Rule with parameters** (`new` lists field initialisers):
/// ```rust,ignore
/// rule! {
///     #[derive(PartialEq, Eq)]
///     pub Equal { keyword: String };
///     check(self, input) { input == self.keyword }
///     message { format!("Value does not equal to '{keyword}'") }
///     new(keyword: impl Into<String>) { keyword: keyword.into() }
///     fn equal(keyword: impl Into<String>);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Internal: message override builders ─────────────────────────────
    (@message_builders $name:ident) => {
        impl $name {
            /// Replaces the message reported when this rule fails.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_message(mut self, message: impl Into<$crate::foundation::ErrorMessage>) -> Self {
                self.message = message.into();
                self
            }

            /// Reports a fixed text when this rule fails.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_text(self, text: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.with_message($crate::foundation::ErrorMessage::text(text))
            }

            /// Reports a localized resource when this rule fails.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_resource(self, id: impl Into<$crate::foundation::ResourceId>) -> Self {
                self.with_message($crate::foundation::ErrorMessage::resource(id))
            }
        }
    };

    // ── Variant 1: Unit rule + factory fn ────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($inp:ident) $check:block
        message $msg:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            message: $crate::foundation::ErrorMessage,
        }

        impl $name {
            /// Creates the rule with its default message.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    message: $crate::foundation::ErrorMessage::text($msg),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        $crate::rule!(@message_builders $name);

        impl $crate::foundation::Rule for $name {
            fn validate(&self, value: Option<&str>) -> $crate::foundation::RuleResult {
                let Some($inp) = value else {
                    return Err($crate::foundation::ValidatorError::missing_value(stringify!($name)));
                };
                Ok($check)
            }

            fn message(&self) -> &$crate::foundation::ErrorMessage {
                &self.message
            }

            fn name(&self) -> &str {
                stringify!($name)
            }
        }

        #[must_use]
        $vis fn $factory() -> $name {
            $name::new()
        }
    };

    // ── Variant 2: Rule with parameters + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        message $msg:block
        new($($narg:ident: $naty:ty),* $(,)?) { $($ifield:ident: $init:expr),+ $(,)? }
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
            message: $crate::foundation::ErrorMessage,
        }

        impl $name {
            /// Creates the rule with its default message.
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self {
                let mut rule = Self {
                    $($ifield: $init,)+
                    message: $crate::foundation::ErrorMessage::none(),
                };
                rule.message = rule.default_message();
                rule
            }

            #[allow(unused_variables)]
            fn default_message(&self) -> $crate::foundation::ErrorMessage {
                let Self { $($field,)+ .. } = self;
                $crate::foundation::ErrorMessage::text($msg)
            }
        }

        $crate::rule!(@message_builders $name);

        impl $crate::foundation::Rule for $name {
            fn validate(&$self_, value: Option<&str>) -> $crate::foundation::RuleResult {
                let Some($inp) = value else {
                    return Err($crate::foundation::ValidatorError::missing_value(stringify!($name)));
                };
                Ok($check)
            }

            fn message(&self) -> &$crate::foundation::ErrorMessage {
                &self.message
            }

            fn name(&self) -> &str {
                stringify!($name)
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}
