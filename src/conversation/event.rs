//! Events that drive conversation transitions

use crate::directory::Business;

/// Events that trigger state transitions
///
/// Inbound text is one event; every directory lookup outcome comes back as
/// another, so the transition function never performs I/O itself.
#[derive(Debug, Clone)]
pub enum Event {
    /// Trimmed, lower-cased message text from the user
    MessageReceived { text: String },

    /// A by-name search finished
    NameResults { businesses: Vec<Business> },

    /// The category listing finished
    CategoriesLoaded {
        source: CategorySource,
        categories: Vec<String>,
    },

    /// A by-category search finished
    CategoryResults {
        category: String,
        businesses: Vec<Business>,
    },

    /// A lookup failed; the payload names which one
    LookupFailed { lookup: FailedLookup },
}

/// Why a category listing was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySource {
    /// User picked option 2 from the menu
    MainMenu,
    /// A name search came back empty
    NameFallback,
}

/// Which lookup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedLookup {
    NameSearch,
    CategoryList(CategorySource),
    CategorySearch,
}
