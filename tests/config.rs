#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taskdesk::db::db::DB_FILE_NAME;
    use taskdesk::libs::config::{Config, CONFIG_FILE_NAME};
    use taskdesk::libs::data_storage::{DataStorage, APP_NAME};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { temp_dir }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.db_file, PathBuf::from(DB_FILE_NAME));
        assert!(config.confirm_deletes);
        assert_eq!(config.db_path(None), PathBuf::from(DB_FILE_NAME));
        assert_eq!(config.db_path(Some("other.db".into())), PathBuf::from("other.db"));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = serde_json::from_str(r#"{ "db_file": "/tmp/tasks.db" }"#).unwrap();
        assert_eq!(config.db_file, PathBuf::from("/tmp/tasks.db"));
        assert!(config.confirm_deletes);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_save_round_trip(ctx: &mut ConfigTestContext) {
        assert_eq!(Config::read().unwrap(), Config::default());

        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert!(config_path.starts_with(ctx.temp_dir.path()));
        assert!(config_path.ends_with(PathBuf::from(APP_NAME).join(CONFIG_FILE_NAME)));

        let config = Config {
            db_file: PathBuf::from("work.db"),
            confirm_deletes: false,
        };
        config.save().unwrap();
        assert!(config_path.exists());
        assert_eq!(Config::read().unwrap(), config);
    }
}
