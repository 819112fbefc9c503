use std::collections::BTreeMap;
use std::fs;

use pubset::adapters::{EnvBuildContext, FileResultWriter, HttpConfigurationClient};
use pubset::domain::{ApiConfig, CredentialsConfig};
use pubset::{
    AppContext, InvocationOptions, ListPublishedUrlStep, StepParameters, StepStage,
    list_published_url, run_list_published_url, run_step,
};
use tempfile::TempDir;
use url::Url;

#[test]
fn test_library_step_lifecycle() {
    let temp = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/configurations/123")
        .with_status(200)
        .with_body(
            r#"{"publish_sets":[{"name":"main","publish_set_type":"single_url","desktops_url":"https://x/d"}]}"#,
        )
        .expect(3)
        .create();

    let api = ApiConfig { base_url: Url::parse(&server.url()).unwrap(), timeout_secs: 5 };
    let vars = BTreeMap::from([
        ("SKYTAP_USERNAME".to_string(), "user".to_string()),
        ("SKYTAP_API_KEY".to_string(), "key".to_string()),
    ]);
    let ctx = AppContext::new(
        HttpConfigurationClient::new(&api).unwrap(),
        EnvBuildContext::new(temp.path(), vars, CredentialsConfig::default()),
        FileResultWriter::new(),
        api.base_url.clone(),
    );

    // 1. Successful run writes the URL
    let step = ListPublishedUrlStep::new(StepParameters::new("123", "", "main", "url.txt"));
    assert!(run_step(&step, &ctx));
    assert_eq!(fs::read_to_string(temp.path().join("url.txt")).unwrap(), "https://x/d");

    // 2. Re-running overwrites with the same content
    assert!(run_step(&step, &ctx));
    assert_eq!(fs::read_to_string(temp.path().join("url.txt")).unwrap(), "https://x/d");

    // 3. Unknown name fails without creating the target file
    let missing = ListPublishedUrlStep::new(StepParameters::new("123", "", "other", "x.txt"));
    assert!(!run_step(&missing, &ctx));
    assert!(!temp.path().join("x.txt").exists());

    mock.assert();
}

#[test]
fn test_facade_rejects_invalid_parameters_before_any_io() {
    let temp = TempDir::new().unwrap();
    let options = InvocationOptions::new(temp.path());

    let failure =
        list_published_url(StepParameters::new("123", "conf.json", "main", "out.txt"), &options)
            .unwrap_err();
    assert_eq!(failure.stage, StepStage::Validating);

    assert!(!run_list_published_url(StepParameters::new("", "", "main", "out.txt"), &options));
    assert!(!temp.path().join("out.txt").exists());
}
