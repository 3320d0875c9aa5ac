//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::CONFIG_YAML;
    use std::collections::HashMap;
    use std::io::Write;
    use syncdata_rs::config::Config;
    use syncdata_rs::{BatchOptions, EndpointSelector, LogLevel, SelectionStrategy, SyncError};

    #[tokio::test]
    async fn test_load_config_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG_YAML.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config.bucket, "archive");
        assert_eq!(config.hosts.rs_hosts.len(), 2);
        assert_eq!(config.hosts.weight_of("rs1.example.com:9433"), 3);
        assert_eq!(config.hosts.weight_of("rs2.example.com:9433"), 1);
        assert_eq!(config.batch.selection, SelectionStrategy::Weighted);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(config.logging.json);

        let options = BatchOptions::from(config.batch());
        assert_eq!(options.batch_size, 500);
        assert_eq!(options.batch_concurrency, 8);
        assert_eq!(options.retries, 2);
        assert_eq!(options.max_attempts(), 4);
    }

    #[tokio::test]
    async fn test_config_file_feeds_selector() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG_YAML.as_bytes()).unwrap();
        let config = Config::from_file(file.path()).await.unwrap();

        let selector =
            EndpointSelector::from_config(config.hosts(), config.batch().selection).unwrap();
        assert_eq!(selector.strategy(), SelectionStrategy::Weighted);
        assert_eq!(selector.endpoints()[0].weight, 3);
    }

    #[tokio::test]
    async fn test_invalid_config_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hosts:\n  rs_hosts: []\nbatch:\n  batch_size: 0\n")
            .unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, SyncError::Config(_)));
    }

    #[tokio::test]
    async fn test_yaml_roundtrip_through_file() {
        let original = crate::common::fixtures::config("photos", &["rs1", "rs2"]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("syncdata.yaml");
        std::fs::write(&path, original.to_yaml().unwrap()).unwrap();

        let loaded = Config::from_file(&path).await.unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SYNCDATA_BUCKET", "logs"),
            ("SYNCDATA_RS_HOSTS", "rs1:9433, rs2:9433"),
            ("SYNCDATA_BATCH_SIZE", "250"),
            ("SYNCDATA_RETRIES", "1"),
            ("SYNCDATA_SELECTION", "round-robin"),
        ]);

        let config =
            Config::from_lookup(|name| vars.get(name).map(|value| value.to_string())).unwrap();

        assert_eq!(config.bucket, "logs");
        assert_eq!(config.hosts.rs_hosts, vec!["rs1:9433", "rs2:9433"]);
        assert_eq!(config.batch.batch_size, 250);
        assert_eq!(config.batch.retries, 1);
        assert_eq!(config.batch.selection, SelectionStrategy::RoundRobin);
    }

    #[test]
    fn test_user_agent_carries_app_name() {
        let config = crate::common::fixtures::config("photos", &["rs1"]);
        let agent = config.user_agent();
        assert!(agent.starts_with(&format!("SyncdataRs/{} (", syncdata_rs::VERSION)));
        assert!(agent.ends_with("; integration-tests)"));
    }
}
