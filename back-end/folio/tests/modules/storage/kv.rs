#[cfg(test)]
mod tests {
    use crate::{portfolio_over, remove_envs, set_envs, TEST_SECRET};
    use entity::prelude::*;
    use folio::modules::content::ScriptedPrompt;
    use folio::modules::storage::{KvConfig, KvStore, RocksDbKvStore};
    use serial_test::serial;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn open(temp: &TempDir) -> Arc<dyn KvStore> {
        let config = KvConfig {
            path: temp.path().join("kv"),
            ..KvConfig::default()
        };
        Arc::new(RocksDbKvStore::open(&config).expect("Failed to open store"))
    }

    #[test]
    fn test_edits_survive_reopen() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("data");

        {
            let portfolio = portfolio_over(open(&temp), &data);
            let mut projects = portfolio.projects().unwrap();
            projects
                .enable_edit_mode(&mut ScriptedPrompt::new().with_secret(TEST_SECRET))
                .unwrap();
            projects.create(&ProjectDraft::titled("Persisted")).unwrap();
        }

        let portfolio = portfolio_over(open(&temp), &data);
        let projects = portfolio.projects().unwrap();
        assert!(projects.is_edit_mode_on().unwrap());
        assert_eq!(projects.view().len(), 1);
        assert_eq!(projects.view()[0].title, "Persisted");
    }

    #[test]
    fn test_second_open_fails_while_locked() {
        let temp = TempDir::new().unwrap();
        let _first = open(&temp);

        let config = KvConfig {
            path: temp.path().join("kv"),
            ..KvConfig::default()
        };
        assert!(RocksDbKvStore::open(&config).is_err());
    }

    #[test]
    #[serial]
    fn test_kv_config_from_env() {
        set_envs(&[
            ("FOLIO_KV_PATH", "/var/lib/folio"),
            ("KV_MAX_OPEN_FILES", "128"),
            ("KV_WRITE_BUFFER_SIZE", "1048576"),
        ]);

        let config = KvConfig::from_env();
        assert_eq!(config.path, PathBuf::from("/var/lib/folio"));
        assert_eq!(config.max_open_files, 128);
        assert_eq!(config.write_buffer_size, 1024 * 1024);

        remove_envs(&["FOLIO_KV_PATH", "KV_MAX_OPEN_FILES", "KV_WRITE_BUFFER_SIZE"]);
    }
}
