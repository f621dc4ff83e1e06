#[cfg(test)]
mod tests {
    use worklog::libs::parser::{parse_task_id, parse_tasks, parse_tasks_with_project, parse_time, ParseError, ParseErrorReason};
    use worklog::libs::task::Task;

    fn error(token: &str, reason: ParseErrorReason) -> ParseError {
        ParseError {
            token: token.to_string(),
            reason,
        }
    }

    #[test]
    fn test_bare_id_gets_default_project() {
        assert_eq!(parse_task_id("622", "LP"), Some("LP-622".to_string()));
    }

    #[test]
    fn test_prefixed_id_kept_verbatim() {
        assert_eq!(parse_task_id("LP-622", "LP"), Some("LP-622".to_string()));
        assert_eq!(parse_task_id("OPS-7", "LP"), Some("OPS-7".to_string()));
    }

    #[test]
    fn test_invalid_ids_rejected() {
        assert_eq!(parse_task_id("lp-622", "LP"), None);
        assert_eq!(parse_task_id("LP622", "LP"), None);
        assert_eq!(parse_task_id("LP-", "LP"), None);
        assert_eq!(parse_task_id("-622", "LP"), None);
        assert_eq!(parse_task_id("", "LP"), None);
    }

    #[test]
    fn test_parse_time_units() {
        assert_eq!(parse_time("3h30m"), Some(210));
        assert_eq!(parse_time("3h"), Some(180));
        assert_eq!(parse_time("30m"), Some(30));
        assert_eq!(parse_time("0m"), Some(0));
        assert_eq!(parse_time("90m"), Some(90));
    }

    #[test]
    fn test_parse_time_rejects_other_shapes() {
        assert_eq!(parse_time("30"), None);
        assert_eq!(parse_time("3h30"), None);
        assert_eq!(parse_time("30m3h"), None);
        assert_eq!(parse_time("1.5h"), None);
        assert_eq!(parse_time("h"), None);
        assert_eq!(parse_time("3H"), None);
    }

    #[test]
    fn test_parse_time_overflow_is_not_a_duration() {
        assert_eq!(parse_time("99999999999h"), None);
        assert_eq!(parse_time("4294967295h"), None);
    }

    #[test]
    fn test_tasks_with_and_without_time() {
        let tasks = parse_tasks(&["622", "3h30m", "623"]).unwrap();

        assert_eq!(tasks, vec![Task::with_minutes("LP-622", 210), Task::new("LP-623")]);
    }

    #[test]
    fn test_order_is_preserved() {
        let tasks = parse_tasks(&["3", "LP-1", "2", "1h", "OPS-9"]).unwrap();
        let ids: Vec<&str> = tasks.iter().map(|task| task.id.as_str()).collect();

        assert_eq!(ids, vec!["LP-3", "LP-1", "LP-2", "OPS-9"]);
        assert_eq!(tasks[2].minutes, Some(60));
    }

    #[test]
    fn test_repeated_task_id_creates_separate_entries() {
        let tasks = parse_tasks(&["622", "1h", "622", "2h"]).unwrap();

        assert_eq!(tasks, vec![Task::with_minutes("LP-622", 60), Task::with_minutes("LP-622", 120)]);
    }

    #[test]
    fn test_empty_input() {
        let tokens: [&str; 0] = [];
        assert_eq!(parse_tasks(&tokens), Ok(vec![]));
    }

    #[test]
    fn test_non_ascii_digits_are_unparseable() {
        assert_eq!(parse_task_id("٦٢٢", "LP"), None);
        assert_eq!(parse_task_id("LP-６２２", "LP"), None);
        assert_eq!(parse_time("٣h"), None);

        let errors = parse_tasks(&["٦٢٢", "LP-６２２", "622", "٣h"]).unwrap_err();

        assert_eq!(
            errors,
            vec![
                error("٦٢٢", ParseErrorReason::Unparseable),
                error("LP-６２２", ParseErrorReason::Unparseable),
                error("٣h", ParseErrorReason::Unparseable),
            ]
        );
    }

    #[test]
    fn test_time_as_first_argument() {
        let errors = parse_tasks(&["3h", "622"]).unwrap_err();

        assert_eq!(errors, vec![error("3h", ParseErrorReason::TimeAsFirstArgument)]);
    }

    #[test]
    fn test_duplicate_duration() {
        let errors = parse_tasks(&["622", "3h", "3h"]).unwrap_err();

        assert_eq!(errors, vec![error("3h", ParseErrorReason::TimeWithoutTask)]);
    }

    #[test]
    fn test_unparseable_token() {
        let errors = parse_tasks(&["622", "tomorrow"]).unwrap_err();

        assert_eq!(errors, vec![error("tomorrow", ParseErrorReason::Unparseable)]);
    }

    #[test]
    fn test_all_errors_reported_in_order() {
        let errors = parse_tasks(&["1h", "foo", "622", "2h", "30m", "bar"]).unwrap_err();

        assert_eq!(
            errors,
            vec![
                error("1h", ParseErrorReason::TimeAsFirstArgument),
                error("foo", ParseErrorReason::Unparseable),
                error("30m", ParseErrorReason::TimeWithoutTask),
                error("bar", ParseErrorReason::Unparseable),
            ]
        );
    }

    #[test]
    fn test_every_leading_duration_is_an_error() {
        let errors = parse_tasks(&["1h", "2h"]).unwrap_err();

        assert_eq!(
            errors,
            vec![
                error("1h", ParseErrorReason::TimeAsFirstArgument),
                error("2h", ParseErrorReason::TimeAsFirstArgument),
            ]
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(error("3h", ParseErrorReason::TimeAsFirstArgument).to_string(), "time as a first argument (token: 3h)");
        assert_eq!(error("3h", ParseErrorReason::TimeWithoutTask).to_string(), "time without a task (token: 3h)");
        assert_eq!(error("x", ParseErrorReason::Unparseable).to_string(), "couldn't parse (token: x)");
    }

    #[test]
    fn test_custom_project() {
        let tasks = parse_tasks_with_project(&["12", "LP-13"], "OPS").unwrap();

        assert_eq!(tasks[0].id, "OPS-12");
        assert_eq!(tasks[1].id, "LP-13");
    }

    #[test]
    fn test_accepts_owned_strings() {
        let tokens = vec!["622".to_string(), "8h".to_string()];
        let tasks = parse_tasks(&tokens).unwrap();

        assert_eq!(tasks, vec![Task::with_minutes("LP-622", 480)]);
    }
}
