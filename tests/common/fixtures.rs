//! Test fixtures and data factories

use syncdata_rs::config::{BatchConfig, Config, HostsConfig};

/// `count` distinct keys in input order
pub fn keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("backup/2024/{:05}.tar", i)).collect()
}

/// Configuration for bucket `bucket` over `hosts` with small batches
pub fn config(bucket: &str, hosts: &[&str]) -> Config {
    Config {
        bucket: bucket.to_string(),
        app_name: "integration-tests".to_string(),
        hosts: HostsConfig::new(hosts.iter().copied()),
        batch: BatchConfig {
            batch_size: 10,
            batch_concurrency: 4,
            retries: 3,
            action_max_retries: 3,
            ..BatchConfig::default()
        },
        ..Config::default()
    }
}

/// Minimal YAML configuration document
pub const CONFIG_YAML: &str = r#"
bucket: archive
app_name: nightly-purge
hosts:
  rs_hosts:
    - rs1.example.com:9433
    - rs2.example.com:9433
  weights:
    rs1.example.com:9433: 3
batch:
  batch_size: 500
  batch_concurrency: 8
  retries: 2
  action_max_retries: 4
  selection: weighted
logging:
  level: debug
  json: true
"#;
