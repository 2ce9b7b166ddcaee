//! Tests for repository type selection and factory creation.

mod support;

use std::io::Write;

use habits_rust::db::repo_config::RepositoryConfig;
use habits_rust::db::repository::HabitRepository;
use habits_rust::db::{RepositoryFactory, RepositoryType};
use support::with_scoped_env;

#[test]
fn test_type_from_env_explicit() {
    with_scoped_env(&[("REPOSITORY_TYPE", Some("local"))], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[test]
fn test_type_from_env_unset_defaults_to_local() {
    with_scoped_env(&[("REPOSITORY_TYPE", None)], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[test]
fn test_type_from_env_unknown_falls_back_to_local() {
    with_scoped_env(&[("REPOSITORY_TYPE", Some("cassandra"))], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[tokio::test]
async fn test_factory_creates_usable_repository() {
    let repo = RepositoryFactory::create(RepositoryType::Local).unwrap();
    assert!(repo.health_check().await.unwrap());
}

#[test]
fn test_factory_from_env() {
    with_scoped_env(&[("REPOSITORY_TYPE", Some("local"))], || {
        assert!(RepositoryFactory::from_env().is_ok());
    });
}

#[test]
fn test_factory_from_config() {
    let config: RepositoryConfig = toml::from_str(
        r#"
[repository]
type = "local"
"#,
    )
    .unwrap();

    assert!(RepositoryFactory::from_config(&config).is_ok());
}

#[test]
fn test_factory_rejects_unknown_config_backend() {
    let config: RepositoryConfig = toml::from_str(
        r#"
[repository]
type = "postgres"
"#,
    )
    .unwrap();

    assert!(RepositoryFactory::from_config(&config).is_err());
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[repository]\ntype = \"local\"").unwrap();

    let config = RepositoryConfig::from_file(file.path()).unwrap();
    assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
}

#[test]
fn test_config_from_unparseable_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "this is not toml {{").unwrap();

    assert!(RepositoryConfig::from_file(file.path()).is_err());
}
