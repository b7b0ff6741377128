//! Equality rules
//!
//! Compare the value against a fixed keyword. Both rules treat an absent
//! value as a programmer error rather than a mismatch.

crate::rule! {
    /// Validates that the value equals a keyword.
    #[derive(PartialEq, Eq, Hash)]
    pub Equal { keyword: String };
    check(self, input) { input == self.keyword }
    message { format!("Value does not equal to '{keyword}'") }
    new(keyword: impl Into<String>) { keyword: keyword.into() }
    fn equal(keyword: impl Into<String>);
}

crate::rule! {
    /// Validates that the value differs from a keyword.
    #[derive(PartialEq, Eq, Hash)]
    pub NotEqual { keyword: String };
    check(self, input) { input != self.keyword }
    message { format!("Value must not equal to '{keyword}'") }
    new(keyword: impl Into<String>) { keyword: keyword.into() }
    fn not_equal(keyword: impl Into<String>);
}
