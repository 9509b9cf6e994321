mod common;

#[cfg(test)]
pub mod harness_tests {
    use super::common::*;

    use inkpress::app::*;
    use inkpress::common::ScriptError;
    use inkpress::harness::*;
    use inkpress::models::*;
    use inkpress::router::*;

    #[test]
    fn test_parse_script_skips_blank_and_comment_lines() {
        let script = parse_script("# warm up\n\nnavigate blog\n   \nview\n").unwrap();

        let lines: Vec<usize> = script.iter().map(|l| l.line).collect();
        assert_eq!(lines, vec![3, 5]);
        assert_eq!(script[0].step, Step::Dispatch(Action::navigate(PageId::Blog)));
        assert_eq!(script[1].step, Step::View);
    }

    #[test]
    fn test_parse_step_navigate_with_params_success() {
        let step = parse_step(1, "go post post=3 query=rust").unwrap();

        let params = TransitionParams {
            selected_post_id: Some("3".into()),
            search_query: Some("rust".into()),
        };
        assert_eq!(step, Step::Dispatch(Action::navigate_with(PageId::Post, params)));
    }

    #[test]
    fn test_parse_step_unknown_page_parses_as_home() {
        let step = parse_step(1, "navigate nowhere").unwrap();
        assert_eq!(step, Step::Dispatch(Action::navigate(PageId::Home)));
    }

    #[test]
    fn test_parse_step_search_keeps_inner_spacing() {
        let step = parse_step(1, "search rust  async").unwrap();
        assert_eq!(step, Step::Dispatch(Action::Search("rust  async".into())));
    }

    #[test]
    fn test_parse_step_fails_on_unknown_action() {
        let err = parse_step(7, "fly away").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownAction {
                line: 7,
                verb: "fly".into()
            }
        );
    }

    #[test]
    fn test_parse_step_fails_on_missing_argument() {
        let err = parse_step(2, "open").unwrap_err();
        assert!(matches!(err, ScriptError::MissingArgument { line: 2, verb: "open", .. }));

        let err = parse_step(3, "submit-login reader@example.com").unwrap_err();
        assert!(matches!(err, ScriptError::MissingArgument { line: 3, verb: "submit-login", .. }));
    }

    #[test]
    fn test_parse_step_fails_on_unexpected_argument() {
        let err = parse_step(4, "logout now").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnexpectedArgument {
                line: 4,
                arg: "now".into()
            }
        );

        let err = parse_step(5, "navigate blog page=2").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnexpectedArgument {
                line: 5,
                arg: "page=2".into()
            }
        );
    }

    #[test]
    fn test_parse_script_reports_first_bad_line() {
        let err = parse_script("navigate blog\n\nbogus\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3: unknown action \"bogus\"");
    }

    #[test]
    fn test_run_script_editor_round_trip() {
        let mut state = AppState::new();
        let outcomes = replay(
            &mut state,
            "navigate editor\nsubmit-login writer@example.com secret1\nnavigate editor\nlogout\n",
        );

        let pages: Vec<PageId> = outcomes.iter().map(|o| o.view.page).collect();
        assert_eq!(
            pages,
            vec![PageId::Login, PageId::Dashboard, PageId::Editor, PageId::Home]
        );
        assert!(outcomes[0].view.substitution == Some(Substitution::AuthGate));
        assert!(!outcomes[3].view.authenticated);
    }

    #[test]
    fn test_run_script_records_login_errors() {
        let mut state = AppState::new();
        let outcomes = replay(&mut state, "go login\nsubmit-login nope 12\n");

        let errors = outcomes[1].errors.as_ref().expect("form should be rejected");
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
        assert_eq!(outcomes[1].view.page, PageId::Login);
        assert!(!outcomes[1].view.authenticated);
    }

    #[test]
    fn test_run_script_session_logout_follows_policy() {
        let script = "social-login github\nnavigate settings\nsession-logout\n";

        let mut continuous = AppState::new();
        let outcomes = replay(&mut continuous, script);
        assert_eq!(outcomes[2].view.page, PageId::Login);

        let mut on_transition = AppState::new().with_policy(GatePolicy::OnTransition);
        let outcomes = replay(&mut on_transition, script);
        assert_eq!(outcomes[2].view.page, PageId::Settings);
    }

    #[test]
    fn test_describe_marks_gated_view() {
        let mut state = AppState::new();
        let outcomes = replay(&mut state, "navigate dashboard\n");

        let line = describe(&outcomes[0]);
        assert!(line.contains("-> login"));
        assert!(line.contains("(requested dashboard, auth-gate)"));
        assert!(line.ends_with("[anonymous]"));
    }

    #[test]
    fn test_step_outcome_json_omits_absent_errors() {
        let mut state = AppState::new();
        let outcomes = replay(&mut state, "view\n");

        let json = serde_json::to_value(&outcomes[0]).unwrap();
        assert_eq!(json["view"]["page"], "home");
        assert!(json.get("errors").is_none());
    }
}
