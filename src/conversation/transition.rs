//! Pure state transition function

use super::{CategorySource, Effect, Event, FailedLookup, Session};
use crate::messages;
use thiserror::Error;

/// Categories shown per page; anything beyond is silently truncated
pub const CATEGORY_PAGE_SIZE: usize = 5;

/// Filename attached to a business image send
const PROFILE_IMAGE_FILENAME: &str = "empresa.jpg";

/// Result of a state transition
///
/// `new_session` replaces the stored session wholesale; `None` clears it.
#[derive(Debug)]
pub struct TransitionResult {
    pub new_session: Option<Session>,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            new_session: session,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("no transition for this session/event pair: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// Given the same session and event, always produces the same result, with
/// no I/O. The `text` of a `MessageReceived` event must already be trimmed
/// and lower-cased by the caller.
pub fn transition(
    session: Option<&Session>,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    // "menu" resets from anywhere, stored lists included
    if let Event::MessageReceived { text } = &event {
        if text == "menu" {
            return Ok(welcome());
        }
    }

    match (session, event) {
        // A user without a session gets the welcome menu, whatever they said
        (None, Event::MessageReceived { .. }) => Ok(welcome()),

        (Some(Session::Menu), Event::MessageReceived { text }) => {
            if text.contains('1') {
                Ok(TransitionResult::new(Some(Session::SearchByName))
                    .with_effect(Effect::send_text(messages::ASK_NAME)))
            } else if text.contains('2') {
                Ok(TransitionResult::new(Some(Session::Menu)).with_effect(
                    Effect::ListCategories {
                        source: CategorySource::MainMenu,
                    },
                ))
            } else {
                Ok(TransitionResult::new(Some(Session::Menu))
                    .with_effect(Effect::send_text(messages::INVALID_OPTION)))
            }
        }

        // Whatever the user typed here is the search query
        (Some(Session::SearchByName), Event::MessageReceived { text }) => {
            Ok(TransitionResult::new(Some(Session::SearchByName))
                .with_effect(Effect::SearchByName { query: text }))
        }

        (Some(Session::SearchByName), Event::NameResults { businesses }) => {
            if businesses.is_empty() {
                // Steer the user towards browsing instead of a dead end
                Ok(TransitionResult::new(Some(Session::SearchByName)).with_effect(
                    Effect::ListCategories {
                        source: CategorySource::NameFallback,
                    },
                ))
            } else {
                let text = messages::name_results(&businesses);
                Ok(TransitionResult::new(Some(Session::SelectBusiness {
                    candidates: businesses,
                }))
                .with_effect(Effect::send_text(text)))
            }
        }

        (
            Some(Session::Menu),
            Event::CategoriesLoaded {
                source: CategorySource::MainMenu,
                categories,
            },
        ) => {
            let page = first_page(categories);
            let text = messages::category_menu(&page);
            Ok(
                TransitionResult::new(Some(Session::Categories { categories: page }))
                    .with_effect(Effect::send_text(text)),
            )
        }

        (
            Some(Session::SearchByName),
            Event::CategoriesLoaded {
                source: CategorySource::NameFallback,
                categories,
            },
        ) => {
            let page = first_page(categories);
            let text = messages::category_fallback(&page);
            Ok(
                TransitionResult::new(Some(Session::Categories { categories: page }))
                    .with_effect(Effect::send_text(text)),
            )
        }

        (Some(Session::Categories { categories }), Event::MessageReceived { text }) => {
            let kept = Session::Categories {
                categories: categories.clone(),
            };
            match resolve(&text, categories, String::as_str) {
                Some(category) => Ok(TransitionResult::new(Some(kept)).with_effect(
                    Effect::SearchByCategory {
                        category: category.clone(),
                    },
                )),
                None => Ok(TransitionResult::new(Some(kept))
                    .with_effect(Effect::send_text(messages::INVALID_CATEGORY))),
            }
        }

        (
            Some(Session::Categories { .. }),
            Event::CategoryResults {
                category,
                businesses,
            },
        ) => {
            if businesses.is_empty() {
                Ok(TransitionResult::new(None)
                    .with_effect(Effect::send_text(messages::EMPTY_CATEGORY)))
            } else {
                let text = messages::category_results(&category, &businesses);
                Ok(TransitionResult::new(Some(Session::SelectBusiness {
                    candidates: businesses,
                }))
                .with_effect(Effect::send_text(text)))
            }
        }

        (Some(Session::SelectBusiness { candidates }), Event::MessageReceived { text }) => {
            match resolve(&text, candidates, |b| b.name.as_str()) {
                Some(business) => {
                    let mut result = TransitionResult::new(None);
                    if let Some(image) = business.image.as_deref().filter(|i| !i.is_empty()) {
                        result = result.with_effect(Effect::SendImage {
                            image: image.to_string(),
                            filename: PROFILE_IMAGE_FILENAME.to_string(),
                            caption: String::new(),
                        });
                    }
                    Ok(result
                        .with_effect(Effect::send_text(messages::profile(business)))
                        .with_effect(Effect::send_text(messages::THANKS)))
                }
                None => Ok(TransitionResult::new(Some(Session::SelectBusiness {
                    candidates: candidates.clone(),
                }))
                .with_effect(Effect::send_text(messages::INVALID_SELECTION))),
            }
        }

        // Lookup failures: apologize once, keep the session where it was
        (
            Some(Session::SearchByName),
            Event::LookupFailed {
                lookup:
                    FailedLookup::NameSearch
                    | FailedLookup::CategoryList(CategorySource::NameFallback),
            },
        ) => Ok(TransitionResult::new(Some(Session::SearchByName))
            .with_effect(Effect::send_text(messages::NAME_SEARCH_ERROR))),

        (
            Some(Session::Menu),
            Event::LookupFailed {
                lookup: FailedLookup::CategoryList(CategorySource::MainMenu),
            },
        ) => Ok(TransitionResult::new(Some(Session::Menu))
            .with_effect(Effect::send_text(messages::CATEGORY_LIST_ERROR))),

        (
            Some(Session::Categories { categories }),
            Event::LookupFailed {
                lookup: FailedLookup::CategorySearch,
            },
        ) => Ok(TransitionResult::new(Some(Session::Categories {
            categories: categories.clone(),
        }))
        .with_effect(Effect::send_text(messages::CATEGORY_SEARCH_ERROR))),

        (session, event) => Err(TransitionError::InvalidTransition(format!(
            "{session:?} on {event:?}"
        ))),
    }
}

fn welcome() -> TransitionResult {
    TransitionResult::new(Some(Session::Menu)).with_effect(Effect::send_text(messages::WELCOME))
}

fn first_page(mut categories: Vec<String>) -> Vec<String> {
    categories.truncate(CATEGORY_PAGE_SIZE);
    categories
}

/// Resolve a pick: 1-based index first, then case-insensitive exact name
///
/// An out-of-range number falls through to name matching, never clamps.
fn resolve<'a, T>(input: &str, items: &'a [T], name: impl Fn(&T) -> &str) -> Option<&'a T> {
    if let Ok(choice) = input.parse::<usize>() {
        if (1..=items.len()).contains(&choice) {
            return items.get(choice - 1);
        }
    }
    items.iter().find(|item| name(item).to_lowercase() == input)
}
