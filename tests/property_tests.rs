mod common;

#[cfg(test)]
pub mod property_tests {
    use proptest::prelude::*;

    use super::common::*;

    use inkpress::app::*;
    use inkpress::models::*;
    use inkpress::router::*;
    use inkpress::services::editor::{slugify, word_count};

    fn any_page() -> impl Strategy<Value = PageId> {
        prop::sample::select(PageId::ALL.to_vec())
    }

    fn any_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            any_page().prop_map(Action::navigate),
            "[1-6]".prop_map(Action::OpenPost),
            "[ a-z]{0,8}".prop_map(Action::Search),
            Just(Action::Login),
            Just(Action::Logout),
            "[a-z]{1,8}".prop_map(Action::SocialLogin),
            Just(Action::ToggleTheme),
        ]
    }

    proptest! {
        #[test]
        fn test_parse_lossy_never_fails(input in ".*") {
            let page = PageId::parse_lossy(&input);
            match input.parse::<PageId>() {
                Ok(parsed) => prop_assert_eq!(page, parsed),
                Err(_) => prop_assert_eq!(page, PageId::Home),
            }
        }

        #[test]
        fn test_page_id_display_parses_back(page in any_page()) {
            prop_assert_eq!(page.to_string().parse::<PageId>(), Ok(page));
        }

        #[test]
        fn test_slug_shape(title in ".{0,64}") {
            let slug = slugify(&title);
            prop_assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            );
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn test_word_count_matches_whitespace_split(text in "[a-z \\t\\n]{0,64}") {
            prop_assert_eq!(word_count(&text), text.split_whitespace().count());
        }

        #[test]
        fn test_gated_provider_never_runs(page in any_page(), signed_in in any::<bool>()) {
            let (router, log) = full_router();
            let session = if signed_in {
                SessionState::authenticated()
            } else {
                SessionState::new()
            };

            let (resolution, view) = router.render(&nav_to(page), &session);

            let calls = log.borrow().clone();
            prop_assert_eq!(calls.as_slice(), &[view]);
            if page.is_protected() && !signed_in {
                prop_assert_eq!(resolution.page, PageId::Login);
                prop_assert!(!calls.contains(&page));
            } else {
                prop_assert_eq!(resolution, Resolution::direct(page));
            }
        }

        #[test]
        fn test_continuous_view_never_shows_protected_page_anonymously(
            actions in prop::collection::vec(any_action(), 0..24),
            bare_logout_at in 0usize..24,
        ) {
            let mut state = AppState::new();
            for (i, action) in actions.into_iter().enumerate() {
                if i == bare_logout_at {
                    state.logout();
                }
                state.dispatch(action);

                let view = state.current_view();
                if !state.session().is_authenticated() {
                    prop_assert!(!view.page.is_protected());
                }
                prop_assert_eq!(view, router_view(&state));
            }
        }
    }

    fn router_view(state: &AppState) -> Resolution {
        resolve(&AllPages, state.navigation(), state.session())
    }
}
