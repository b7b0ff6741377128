//! In-memory collaborators
//!
//! Ready-made implementations of the collaborator traits for headless use
//! (services, CLIs, tests). UI layers implement the traits themselves.

use std::collections::{BTreeMap, HashMap};

use parking_lot::{Mutex, RwLock};

use crate::foundation::{ErrorDisplay, ResourceId, ResourceResolver, TextInput};

// ============================================================================
// ERROR BOARD
// ============================================================================

/// Display state of one sink.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SinkState {
    /// Whether error display is enabled.
    pub enabled: bool,
    /// The error text shown, if any.
    pub error: Option<String>,
}

/// An [`ErrorDisplay`] that records sink state in memory.
///
/// Shareable through `&` or `Arc`; the engine only needs `&self`.
///
/// # Examples
///
/// ```rust,ignore
/// let board = ErrorBoard::new();
/// let validator = Validator::new(NoResources, &board);
/// validator.validate(&mut (), &bindings)?;
/// assert_eq!(board.error("email").as_deref(), Some("Invalid email address"));
/// ```
#[derive(Debug, Default)]
pub struct ErrorBoard {
    sinks: Mutex<BTreeMap<String, SinkState>>,
}

impl ErrorBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The error currently shown on `sink`.
    pub fn error(&self, sink: &str) -> Option<String> {
        self.sinks.lock().get(sink).and_then(|s| s.error.clone())
    }

    /// State of `sink`, or `None` if it was never touched.
    pub fn state(&self, sink: &str) -> Option<SinkState> {
        self.sinks.lock().get(sink).cloned()
    }

    /// All shown errors keyed by sink.
    pub fn errors(&self) -> BTreeMap<String, String> {
        self.sinks
            .lock()
            .iter()
            .filter_map(|(sink, state)| state.error.clone().map(|e| (sink.clone(), e)))
            .collect()
    }

    /// Returns true if no sink shows an error.
    pub fn is_clean(&self) -> bool {
        self.sinks.lock().values().all(|s| s.error.is_none())
    }

    /// Forgets every sink.
    pub fn reset(&self) {
        self.sinks.lock().clear();
    }
}

impl ErrorDisplay for ErrorBoard {
    fn clear_error(&self, sink: &str) {
        self.sinks
            .lock()
            .insert(sink.to_owned(), SinkState::default());
    }

    fn show_error(&self, sink: &str, text: &str) {
        self.sinks.lock().insert(
            sink.to_owned(),
            SinkState {
                enabled: true,
                error: Some(text.to_owned()),
            },
        );
    }
}

// ============================================================================
// RESOURCES
// ============================================================================

/// A resolver that knows no resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceResolver for NoResources {
    fn resolve(&self, _id: ResourceId) -> Option<String> {
        None
    }
}

/// A fixed table of localized strings.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    strings: HashMap<ResourceId, String>,
}

impl StringTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a string, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, id: impl Into<ResourceId>, text: impl Into<String>) -> Self {
        self.insert(id, text);
        self
    }

    /// Adds or replaces a string.
    pub fn insert(&mut self, id: impl Into<ResourceId>, text: impl Into<String>) {
        self.strings.insert(id.into(), text.into());
    }

    /// Number of strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl ResourceResolver for StringTable {
    fn resolve(&self, id: ResourceId) -> Option<String> {
        self.strings.get(&id).cloned()
    }
}

impl<I, S> FromIterator<(I, S)> for StringTable
where
    I: Into<ResourceId>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (I, S)>>(iter: T) -> Self {
        Self {
            strings: iter
                .into_iter()
                .map(|(id, text)| (id.into(), text.into()))
                .collect(),
        }
    }
}

// ============================================================================
// LIVE TEXT
// ============================================================================

/// A mutable text cell implementing [`TextInput`].
///
/// Stands in for a text field: the engine reads it lazily, so edits between
/// calls are picked up.
#[derive(Debug, Default)]
pub struct LiveText {
    text: RwLock<Option<String>>,
}

impl LiveText {
    /// Creates a cell holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RwLock::new(Some(text.into())),
        }
    }

    /// Creates a cell holding nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replaces the text.
    pub fn set(&self, text: impl Into<String>) {
        *self.text.write() = Some(text.into());
    }

    /// Removes the text.
    pub fn clear(&self) {
        *self.text.write() = None;
    }
}

impl TextInput for LiveText {
    fn current_text(&self) -> Option<String> {
        self.text.read().clone()
    }
}
