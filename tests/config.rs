#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worklog::api::jira::JiraConfig;
    use worklog::libs::config::{Config, CONFIG_FILE_NAME};
    use worklog::libs::data_storage::DataStorage;

    /// Gives every test its own config file location.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("config.json");
            ConfigTestContext { _temp_dir: temp_dir, path }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.jira.is_none());
        assert_eq!(config.jira_or_default(), JiraConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            jira: Some(JiraConfig {
                binary: "jira-cli".to_string(),
                project: "OPS".to_string(),
                started_at: "09:30:00".to_string(),
            }),
        };

        config.save_to(&ctx.path).unwrap();
        let loaded = Config::read_from(&ctx.path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_module_is_omitted(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.path).unwrap();

        let contents = fs::read_to_string(&ctx.path).unwrap();
        assert_eq!(contents.trim(), "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_jira_module_uses_defaults(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, r#"{ "jira": { "project": "OPS" } }"#).unwrap();

        let jira = Config::read_from(&ctx.path).unwrap().jira_or_default();

        assert_eq!(jira.project, "OPS");
        assert_eq!(jira.binary, "jira");
        assert_eq!(jira.started_at, "10:00:00");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_json_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, "{ not json").unwrap();

        assert!(Config::read_from(&ctx.path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_start_time_fails_only_when_used(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, r#"{ "jira": { "started_at": "25:00" } }"#).unwrap();

        let jira = Config::read_from(&ctx.path).unwrap().jira_or_default();

        assert_eq!(jira.project, "LP");
        assert!(jira.started_at_time().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_project_key_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, r#"{ "jira": { "project": "lp" } }"#).unwrap();

        assert!(Config::read_from(&ctx.path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_reading_does_not_create_data_directory(ctx: &mut ConfigTestContext) {
        let base = ctx.path.with_file_name("data");
        let storage = DataStorage::with_base_path(base.clone());

        let path = storage.file_path(CONFIG_FILE_NAME);
        let config = Config::read_from(&path).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(path, base.join(CONFIG_FILE_NAME));
        assert!(!base.exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_saving_creates_data_directory(ctx: &mut ConfigTestContext) {
        let base = ctx.path.with_file_name("data");
        let storage = DataStorage::with_base_path(base.clone());

        let path = storage.get_path(CONFIG_FILE_NAME).unwrap();
        Config::default().save_to(&path).unwrap();

        assert!(base.is_dir());
        assert!(path.exists());
    }
}
