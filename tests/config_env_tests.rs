use pretty_assertions::assert_eq;
use pyexpert_chat::{
    Error,
    config::{self, API_KEY_ENV, API_KEY_PLACEHOLDER},
};

// Process environment is shared, so every scenario lives in this one test.
#[tokio::test]
async fn test_load_reads_config_path_and_env_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    tokio::fs::write(
        &path,
        format!("server:\n  port: 9191\ninference:\n  api_key: \"{API_KEY_PLACEHOLDER}\"\n"),
    )
    .await
    .unwrap();

    unsafe {
        std::env::set_var("CONFIG_PATH", &path);
        std::env::set_var(API_KEY_ENV, "hf_env_key");
    }

    let loaded = config::load().await.unwrap();
    assert_eq!(loaded.server.port, 9191);
    assert_eq!(loaded.inference.api_key, "hf_env_key");

    unsafe {
        std::env::remove_var(API_KEY_ENV);
    }

    let err = config::load().await.unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    unsafe {
        std::env::remove_var("CONFIG_PATH");
    }
}
