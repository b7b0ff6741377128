//! Substring and character-class rules

crate::rule! {
    /// Validates that a value contains a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { needle: String };
    check(self, input) { input.contains(self.needle.as_str()) }
    message { format!("Must contain '{needle}'") }
    new(needle: impl Into<String>) { needle: needle.into() }
    fn contains(needle: impl Into<String>);
}

crate::rule! {
    /// Validates that a value does not contain a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub NotContains { needle: String };
    check(self, input) { !input.contains(self.needle.as_str()) }
    message { format!("Must not contain '{needle}'") }
    new(needle: impl Into<String>) { needle: needle.into() }
    fn not_contains(needle: impl Into<String>);
}

crate::rule! {
    /// Validates that a value starts with a prefix.
    #[derive(PartialEq, Eq, Hash)]
    pub StartsWith { prefix: String };
    check(self, input) { input.starts_with(self.prefix.as_str()) }
    message { format!("Must start with '{prefix}'") }
    new(prefix: impl Into<String>) { prefix: prefix.into() }
    fn starts_with(prefix: impl Into<String>);
}

crate::rule! {
    /// Validates that a value ends with a suffix.
    #[derive(PartialEq, Eq, Hash)]
    pub EndsWith { suffix: String };
    check(self, input) { input.ends_with(self.suffix.as_str()) }
    message { format!("Must end with '{suffix}'") }
    new(suffix: impl Into<String>) { suffix: suffix.into() }
    fn ends_with(suffix: impl Into<String>);
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::rule! {
    /// Validates that a value is a non-empty run of ASCII digits.
    pub Numeric;
    check(input) { !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) }
    message { "Must contain only digits" }
    fn numeric();
}

crate::rule! {
    /// Validates that a value is a non-empty run of letters.
    pub Alphabetic;
    check(input) { !input.is_empty() && input.chars().all(char::is_alphabetic) }
    message { "Must contain only letters" }
    fn alphabetic();
}

crate::rule! {
    /// Validates that a value is a non-empty run of letters and digits.
    pub Alphanumeric;
    check(input) { !input.is_empty() && input.chars().all(char::is_alphanumeric) }
    message { "Must contain only letters and digits" }
    fn alphanumeric();
}

crate::rule! {
    /// Validates that a value has no lowercase characters.
    pub Uppercase;
    check(input) { !input.chars().any(char::is_lowercase) }
    message { "Must be uppercase" }
    fn uppercase();
}

crate::rule! {
    /// Validates that a value has no uppercase characters.
    pub Lowercase;
    check(input) { !input.chars().any(char::is_uppercase) }
    message { "Must be lowercase" }
    fn lowercase();
}
