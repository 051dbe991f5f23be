//! Session state types

use crate::directory::Business;

/// Where a user currently is in the menu flow
///
/// Absence of a session is itself meaningful: the next message is greeted
/// with the welcome menu. Each variant carries exactly the payload its step
/// needs, so a selection step always has candidates to pick from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// Welcome sent, waiting for option 1 or 2
    Menu,

    /// Waiting for a business name to search for
    SearchByName,

    /// Waiting for a pick from the stored category page
    Categories { categories: Vec<String> },

    /// Waiting for a pick from the stored candidate list
    SelectBusiness { candidates: Vec<Business> },
}
