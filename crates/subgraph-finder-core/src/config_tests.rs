//! Tests for layered configuration loading.

use figment::Jail;

use crate::algo::{AlgorithmConfig, SortOrder};
use crate::config::{ConfigError, FinderConfig};

#[test]
fn test_defaults_without_sources() {
    let config = FinderConfig::from_toml_str("").unwrap();
    assert_eq!(config.logging.level, "info");
    assert!(config.algorithm.is_none());
}

#[test]
fn test_algorithm_table_from_toml() {
    let config = FinderConfig::from_toml_str(
        r#"
        [logging]
        level = "debug"

        [algorithm]
        algorithm = "bron_kerbosch"
        bipartite = true
        sort_order = "descending"
        "#,
    )
    .unwrap();

    assert_eq!(config.logging.level, "debug");
    let Some(AlgorithmConfig::BronKerbosch(clique)) = &config.algorithm else {
        panic!("expected a clique config, got {:?}", config.algorithm);
    };
    assert!(clique.bipartite);
    assert_eq!(clique.settings.sort_order, SortOrder::Descending);
}

#[test]
fn test_invalid_algorithm_values_are_rejected() {
    let err = FinderConfig::from_toml_str("[algorithm]\nalgorithm = \"walktrap\"\nsteps = 0")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = FinderConfig::from_toml_str("[logging]\nlevel = \"  \"").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_mistyped_values_fail_to_load() {
    let err = FinderConfig::from_toml_str("[algorithm]\nalgorithm = \"walktrap\"\nsteps = \"many\"")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}

#[test]
fn test_file_then_environment() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "finder.toml",
            r#"
            [logging]
            level = "warn"

            [algorithm]
            algorithm = "kruskal"
            max = true
            "#,
        )?;
        jail.set_env("SUBGRAPH_FINDER_LOGGING__LEVEL", "trace");

        let config = FinderConfig::load(Some(std::path::Path::new("finder.toml")))
            .map_err(|e| e.to_string())?;
        assert_eq!(config.logging.level, "trace");
        let Some(AlgorithmConfig::Kruskal(tree)) = &config.algorithm else {
            return Err(format!("unexpected algorithm {:?}", config.algorithm).into());
        };
        assert!(tree.max);
        Ok(())
    });
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    Jail::expect_with(|_| {
        let config = FinderConfig::load(Some(std::path::Path::new("absent.toml")))
            .map_err(|e| e.to_string())?;
        assert_eq!(config, FinderConfig::default());
        Ok(())
    });
}

#[test]
fn test_rendered_config_loads_back() {
    let config = FinderConfig::from_toml_str(
        "[algorithm]\nalgorithm = \"prim\"\nstartNode = \"B\"\nthreshold = 2.0",
    )
    .unwrap();
    let text = config.to_toml_string().unwrap();
    assert!(text.contains("start_node = \"B\""));
    assert_eq!(FinderConfig::from_toml_str(&text).unwrap(), config);
}
