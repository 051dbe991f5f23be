//! Property-based tests for the conversation state machine
//!
//! These verify the selection and reset invariants across arbitrary inputs.

use super::*;
use crate::directory::Business;
use crate::messages;
use proptest::prelude::*;

fn test_business(name: &str) -> Business {
    Business {
        name: name.to_string(),
        address: None,
        phone: None,
        whatsapp: None,
        instagram: None,
        website: None,
        description: None,
        image: None,
    }
}

fn received(text: &str) -> Event {
    Event::MessageReceived {
        text: text.to_string(),
    }
}

/// Lower-case names only, so they are distinct, never numeric, and already
/// in the normalized form the engine feeds to `transition`
fn unique_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set("[a-z]{1,10}", 1..=5).prop_map(|set| set.into_iter().collect())
}

fn arb_session() -> impl Strategy<Value = Option<Session>> {
    prop_oneof![
        Just(None),
        Just(Some(Session::Menu)),
        Just(Some(Session::SearchByName)),
        proptest::collection::vec("[a-z]{1,10}", 0..5)
            .prop_map(|categories| Some(Session::Categories { categories })),
        proptest::collection::vec("[a-z ]{1,12}", 0..4).prop_map(|names| {
            Some(Session::SelectBusiness {
                candidates: names.iter().map(|n| test_business(n)).collect(),
            })
        }),
    ]
}

proptest! {
    #[test]
    fn prop_menu_resets_any_session(session in arb_session()) {
        let result = transition(session.as_ref(), received("menu")).unwrap();

        prop_assert_eq!(result.new_session, Some(Session::Menu));
        prop_assert_eq!(result.effects, vec![Effect::send_text(messages::WELCOME)]);
    }

    #[test]
    fn prop_first_contact_matches_explicit_reset(text in "[a-z0-9 ?!]{1,20}") {
        let first = transition(None, received(&text)).unwrap();
        let reset = transition(Some(&Session::SearchByName), received("menu")).unwrap();

        prop_assert_eq!(first.new_session, reset.new_session);
        prop_assert_eq!(first.effects, reset.effects);
    }

    #[test]
    fn prop_index_and_name_pick_the_same_category(names in unique_names()) {
        let session = Session::Categories { categories: names.clone() };

        for (i, name) in names.iter().enumerate() {
            let by_index = transition(Some(&session), received(&(i + 1).to_string())).unwrap();
            let by_name = transition(Some(&session), received(name)).unwrap();

            let expected = vec![Effect::SearchByCategory { category: name.clone() }];
            prop_assert_eq!(&by_index.effects, &expected);
            prop_assert_eq!(&by_name.effects, &expected);
        }
    }

    #[test]
    fn prop_out_of_range_number_never_selects(
        names in proptest::collection::vec("[a-z ]{1,12}", 1..5),
        excess in 1usize..50,
    ) {
        let session = Session::SelectBusiness {
            candidates: names.iter().map(|n| test_business(n)).collect(),
        };

        let input = (names.len() + excess).to_string();
        let result = transition(Some(&session), received(&input)).unwrap();

        prop_assert_eq!(result.new_session, Some(session.clone()));
        prop_assert_eq!(
            result.effects,
            vec![Effect::send_text(messages::INVALID_SELECTION)]
        );

        let zero = transition(Some(&session), received("0")).unwrap();
        prop_assert_eq!(
            zero.effects,
            vec![Effect::send_text(messages::INVALID_SELECTION)]
        );
    }

    #[test]
    fn prop_category_page_never_exceeds_cap(
        names in proptest::collection::vec("[a-z]{1,10}", 0..12),
    ) {
        let result = transition(
            Some(&Session::Menu),
            Event::CategoriesLoaded {
                source: CategorySource::MainMenu,
                categories: names,
            },
        )
        .unwrap();

        match result.new_session {
            Some(Session::Categories { categories }) => {
                prop_assert!(categories.len() <= CATEGORY_PAGE_SIZE);
            }
            other => prop_assert!(false, "expected Categories session, got {other:?}"),
        }
    }
}
