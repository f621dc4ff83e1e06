#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use worklog::libs::cell::{format_cell, format_row};
    use worklog::libs::task::Task;

    fn names() -> HashMap<String, String> {
        HashMap::from([
            ("LP-642".to_string(), "Add rate limiting to member enrollments".to_string()),
            ("LP-622".to_string(), "Enhance Create Profile screen UI".to_string()),
        ])
    }

    #[test]
    fn test_cell_lists_tasks_in_order() {
        let tasks = vec![Task::with_minutes("LP-642", 240), Task::with_minutes("LP-622", 240)];

        assert_eq!(
            format_cell(&tasks, &names()),
            "[LP-642] Add rate limiting to member enrollments\n[LP-622] Enhance Create Profile screen UI"
        );
    }

    #[test]
    fn test_cell_without_name() {
        let tasks = vec![Task::with_minutes("OPS-1", 480)];

        assert_eq!(format_cell(&tasks, &names()), "[OPS-1]");
    }

    #[test]
    fn test_row_has_quoted_cell_and_hours() {
        let tasks = vec![Task::with_minutes("LP-642", 240), Task::with_minutes("LP-622", 240)];

        assert_eq!(
            format_row(&tasks, &names()),
            "\"[LP-642] Add rate limiting to member enrollments\n[LP-622] Enhance Create Profile screen UI\"\t8"
        );
    }

    #[test]
    fn test_row_escapes_quotes() {
        let tasks = vec![Task::with_minutes("LP-1", 450)];
        let names = HashMap::from([("LP-1".to_string(), "Fix \"Save\" button".to_string())]);

        assert_eq!(format_row(&tasks, &names), "\"[LP-1] Fix \"\"Save\"\" button\"\t7.5");
    }

    #[test]
    fn test_empty_row() {
        assert_eq!(format_row(&[], &HashMap::new()), "\"\"\t0");
    }
}
