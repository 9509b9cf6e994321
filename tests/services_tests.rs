mod common;

#[cfg(test)]
pub mod services_tests {
    use super::common::*;

    use inkpress::models::*;
    use inkpress::services::auth::*;
    use inkpress::services::editor::*;
    use inkpress::services::listing::*;
    use inkpress::services::search::*;
    use inkpress::types::AuthRequest;

    fn titles(posts: &[&PostSummary]) -> Vec<String> {
        posts.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_login_form_validate_sign_in_success() {
        let form = LoginForm::new("reader@example.com", "123456");
        let request = form.validate().unwrap();

        assert!(matches!(request, AuthRequest::SignIn(_)));
        assert_eq!(request.email(), "reader@example.com");
    }

    #[test]
    fn test_login_form_validate_sign_up_carries_trimmed_name() {
        let mut form = LoginForm::new("new@example.org", "longpassword");
        form.toggle_mode();
        form.set_name("  Ada  ");

        match form.validate().unwrap() {
            AuthRequest::SignUp(req) => assert_eq!(req.username.as_deref(), Some("Ada")),
            other => panic!("expected sign-up, got {other:?}"),
        }
    }

    #[test]
    fn test_login_form_validate_fails_on_short_password() {
        let errors = LoginForm::new("reader@example.com", "12345").validate().unwrap_err();

        assert_eq!(errors.email, None);
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_ERROR));
    }

    #[test]
    fn test_login_form_validate_fails_on_bad_email() {
        for email in ["", "reader", "reader@example", "@example.com", "a b@example.com"] {
            let errors = LoginForm::new(email, "123456").validate().unwrap_err();
            assert_eq!(errors.email.as_deref(), Some(EMAIL_ERROR), "{email:?}");
        }
    }

    #[test]
    fn test_login_form_editing_clears_only_that_field() {
        let mut form = LoginForm::new("bad", "1");
        let _ = form.submit();

        form.set_email("good@example.com");
        assert!(form.errors().email.is_none());
        assert!(form.errors().password.is_some());
    }

    #[test]
    fn test_login_form_password_counts_utf16_units() {
        assert!(LoginForm::new("reader@example.com", "😀😀😀").validate().is_ok());
        let errors = LoginForm::new("reader@example.com", "😀😀").validate().unwrap_err();
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_ERROR));
    }

    #[test]
    fn test_word_count_uses_browser_whitespace() {
        assert_eq!(word_count("a\u{FEFF}b"), 2);
        assert_eq!(word_count("a\u{85}b"), 1);
    }

    #[test]
    fn test_slugify_success() {
        assert_eq!(
            slugify("Mastering TypeScript: Advanced Techniques!"),
            "mastering-typescript-advanced-techniques"
        );
        assert_eq!(slugify("  Rust -- and WASM  "), "rust-and-wasm");
    }

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("  Hello   world  "), 2);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("one\ntwo\tthree"), 3);
    }

    #[test]
    fn test_editor_draft_tags_dedupe_and_remove() {
        let mut draft = EditorDraft::new();

        draft.set_tag_input(" rust ");
        assert!(draft.commit_tag());
        draft.set_tag_input("rust");
        assert!(!draft.commit_tag());
        assert_eq!(draft.tag_input(), "");

        draft.set_tag_input("   ");
        assert!(!draft.commit_tag());
        assert_eq!(draft.tag_input(), "   ");

        assert_eq!(draft.tags(), ["rust".to_string()]);

        draft.remove_tag("rust");
        assert!(draft.tags().is_empty());
    }

    #[test]
    fn test_editor_draft_category_starts_unset() {
        let mut draft = EditorDraft::new();
        assert_eq!(draft.category(), "");

        let (value, _) = CATEGORIES[2];
        draft.set_category(value);
        assert_eq!(draft.category(), "design");
    }

    #[test]
    fn test_editor_categories_success() {
        let values: Vec<&str> = CATEGORIES.iter().map(|(value, _)| *value).collect();
        assert_eq!(
            values,
            vec!["technology", "development", "design", "writing", "performance"]
        );
    }

    #[test]
    fn test_editor_draft_title_drives_slug() {
        let mut draft = EditorDraft::new();
        draft.set_title("Hello World");
        assert_eq!(draft.slug(), "hello-world");

        draft.set_slug("custom");
        draft.set_title("");
        assert_eq!(draft.slug(), "custom");
    }

    #[test]
    fn test_editor_draft_publish_opens_dashboard() {
        let mut draft = EditorDraft::new();
        let at = chrono::Utc::now();
        draft.save_at(at);

        assert_eq!(draft.last_saved(), Some(at));
        assert_eq!(draft.publish(), PageId::Dashboard);
    }

    #[test]
    fn test_filter_posts_by_query_case_insensitive() {
        let posts = greek_posts();
        assert_eq!(
            titles(&filter_posts(&posts, "A", StatusFilter::All)),
            vec!["Alpha", "beta", "Gamma"]
        );
        assert_eq!(titles(&filter_posts(&posts, "ph", StatusFilter::All)), vec!["Alpha"]);
    }

    #[test]
    fn test_filter_posts_by_status() {
        let posts = greek_posts();
        assert_eq!(titles(&filter_posts(&posts, "", StatusFilter::Draft)), vec!["beta"]);
        assert_eq!(
            titles(&filter_posts(&posts, "", StatusFilter::Published)),
            vec!["Alpha", "Gamma"]
        );
    }

    #[test]
    fn test_filter_posts_fails_on_absent_status() {
        let posts = vec![
            post_titled("a", "Alpha", PostStatus::Published),
            post_titled("b", "beta", PostStatus::Published),
            post_titled("g", "Gamma", PostStatus::Published),
        ];
        let drafts = filter_posts(&posts, "a", StatusFilter::Draft);
        assert!(drafts.is_empty());

        let mut selection = Selection::new();
        selection.toggle_all(drafts.iter().copied());
        assert!(selection.is_empty());
        assert!(!selection.all_selected(drafts.len()));
    }

    #[test]
    fn test_selection_toggle_all_over_filtered_rows() {
        let posts = greek_posts();
        let mut selection = Selection::new();

        let published = filter_posts(&posts, "", StatusFilter::Published);
        selection.toggle_all(published.iter().copied());
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec!["a", "g"]);
        assert!(selection.all_selected(published.len()));

        selection.toggle_all(published.iter().copied());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_toggle_all_compares_sizes_only() {
        let posts = greek_posts();
        let mut selection = Selection::new();
        selection.toggle("b");
        selection.toggle("g");

        // Two checked rows against a two-row filter clears even though
        // only one of them is visible.
        let published = filter_posts(&posts, "", StatusFilter::Published);
        selection.toggle_all(published.iter().copied());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_toggle_single_row() {
        let mut selection = Selection::new();
        selection.toggle("3");
        assert!(selection.contains("3"));
        selection.toggle("3");
        assert!(!selection.contains("3"));
        assert!(!selection.all_selected(0));
    }

    #[test]
    fn test_highlight_marks_matches() {
        let segments = highlight("Rust and rust", "RUST");
        let marked: Vec<&str> = segments.iter().filter(|s| s.highlighted).map(|s| s.text).collect();

        assert_eq!(marked, vec!["Rust", "rust"]);
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn test_search_posts_on_catalog() {
        let posts = catalog::posts();
        let found = search_posts(&posts, "typescript");

        assert!(!found.is_empty());
        assert!(found.iter().all(|p| p.title.to_lowercase().contains("typescript")));
    }

    #[test]
    fn test_catalog_post_or_first_fails_over_to_first() {
        assert_eq!(catalog::post_or_first("4").id, "4");
        assert_eq!(catalog::post_or_first("").id, "1");
        assert_eq!(catalog::post_or_first("missing").id, "1");
    }
}
