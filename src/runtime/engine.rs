//! Effect execution around the pure transition function

use crate::conversation::{transition, Effect, Event, FailedLookup};
use crate::directory::DirectoryClient;
use crate::store::SessionStore;
use crate::wpp::OutboundDispatcher;
use std::sync::Arc;

/// Drives one user's conversation
///
/// Looks up the session, runs transitions, executes effects, commits the
/// resulting session. Lookup effects feed their outcome back in as the next
/// event, so one inbound message may walk through several transitions before
/// the final session is committed.
pub struct Engine {
    store: Arc<SessionStore>,
    directory: Arc<dyn DirectoryClient>,
    outbound: Arc<dyn OutboundDispatcher>,
}

impl Engine {
    pub fn new(
        store: Arc<SessionStore>,
        directory: Arc<dyn DirectoryClient>,
        outbound: Arc<dyn OutboundDispatcher>,
    ) -> Self {
        Self {
            store,
            directory,
            outbound,
        }
    }

    /// Handle one inbound message; the store is written once, at the end
    pub async fn handle_message(&self, user: &str, body: &str) {
        let text = body.trim().to_lowercase();
        let mut session = self.store.get(user);

        let mut events = vec![Event::MessageReceived { text }];
        while let Some(event) = events.pop() {
            let result = match transition(session.as_ref(), event) {
                Ok(result) => result,
                Err(e) => {
                    // Unreachable through normal flow; drop without committing
                    tracing::error!(user = %user, error = %e, "Dropping event");
                    return;
                }
            };

            session = result.new_session;
            for effect in result.effects {
                if let Some(follow_up) = self.execute_effect(user, effect).await {
                    events.push(follow_up);
                }
            }
        }

        match session {
            Some(session) => self.store.set(user, session),
            None => self.store.clear(user),
        }
    }

    /// Run one effect; lookups return the event to feed back in
    async fn execute_effect(&self, user: &str, effect: Effect) -> Option<Event> {
        match effect {
            Effect::SendText { text } => {
                if let Err(e) = self.outbound.send_text(user, &text).await {
                    tracing::error!(user = %user, error = %e, "Failed to send text");
                }
                None
            }

            Effect::SendImage {
                image,
                filename,
                caption,
            } => {
                // Best-effort: the profile text still follows
                if let Err(e) = self
                    .outbound
                    .send_image(user, &image, &filename, &caption)
                    .await
                {
                    tracing::warn!(user = %user, error = %e, "Failed to send image");
                }
                None
            }

            Effect::SearchByName { query } => match self.directory.search_by_name(&query).await {
                Ok(businesses) => Some(Event::NameResults { businesses }),
                Err(e) => {
                    tracing::error!(user = %user, error = %e, "Name search failed");
                    Some(Event::LookupFailed {
                        lookup: FailedLookup::NameSearch,
                    })
                }
            },

            Effect::SearchByCategory { category } => {
                match self.directory.search_by_category(&category).await {
                    Ok(businesses) => Some(Event::CategoryResults {
                        category,
                        businesses,
                    }),
                    Err(e) => {
                        tracing::error!(user = %user, category = %category, error = %e, "Category search failed");
                        Some(Event::LookupFailed {
                            lookup: FailedLookup::CategorySearch,
                        })
                    }
                }
            }

            Effect::ListCategories { source } => match self.directory.list_categories().await {
                Ok(categories) => Some(Event::CategoriesLoaded { source, categories }),
                Err(e) => {
                    tracing::error!(user = %user, error = %e, "Category listing failed");
                    Some(Event::LookupFailed {
                        lookup: FailedLookup::CategoryList(source),
                    })
                }
            },
        }
    }
}
