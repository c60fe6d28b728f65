#[cfg(test)]
mod tests {
    use crate::{remove_envs, set_envs};
    use errors::AppError;
    use folio::bootstrap::config::{Config, DEFAULT_EDIT_SECRET};
    use serial_test::serial;
    use std::path::PathBuf;

    const KEYS: &[&str] = &[
        "FOLIO_DATA_DIR",
        "FOLIO_EXPORT_DIR",
        "FOLIO_EDIT_SECRET",
        "FOLIO_KV_PATH",
        "KV_ENABLE_COMPRESSION",
        "KV_MAX_OPEN_FILES",
        "KV_WRITE_BUFFER_SIZE",
    ];

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        remove_envs(KEYS);

        let config = Config::from_env().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.edit_secret, DEFAULT_EDIT_SECRET);
        assert_eq!(config.kv.path, PathBuf::from(".folio/kv"));
        assert!(!config.kv.enable_compression);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        remove_envs(KEYS);
        set_envs(&[
            ("FOLIO_DATA_DIR", "/srv/site/data"),
            ("FOLIO_EDIT_SECRET", "hunter2"),
            ("FOLIO_KV_PATH", "/tmp/folio-kv"),
            ("KV_ENABLE_COMPRESSION", "yes"),
            ("KV_MAX_OPEN_FILES", "not-a-number"),
        ]);

        let config = Config::from_env().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/site/data"));
        assert_eq!(config.edit_secret, "hunter2");
        assert_eq!(config.kv.path, PathBuf::from("/tmp/folio-kv"));
        assert!(config.kv.enable_compression);
        assert_eq!(config.kv.max_open_files, 64);

        remove_envs(KEYS);
    }

    #[test]
    #[serial]
    fn test_blank_secret_is_rejected() {
        remove_envs(KEYS);
        set_envs(&[("FOLIO_EDIT_SECRET", "   ")]);

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        remove_envs(KEYS);
    }
}
