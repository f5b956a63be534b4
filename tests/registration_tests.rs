
use okta_cli_client::cli::commands::register::{domain_line, execute_register, registrar};
use okta_cli_client::cli::RegisterArgs;
use okta_cli_client::engine::executor::HttpExecutor;
use okta_cli_client::error::ErrorKind;
use okta_cli_client::interactive::mock::RealInputOutput;
use okta_cli_client::output::Output;
use okta_cli_client::registration::client::{create_organization, poll_once};
use okta_cli_client::registration::{RegistrationEndpoints, Registrar};
use okta_cli_client::resilience::TimeoutConfig;
use serde_json::json;
use std::fs;
use test_helpers::{active, ada, manager_in, ok, status, ScriptedExecutor};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REGISTER_PATH: &str = "/api/v1/registration/reg1/register";
const REDEEM_PATH: &str = "/api/internal/v1/developer/redeem/org123";

fn executor() -> HttpExecutor {
    HttpExecutor::new(&TimeoutConfig::default()).unwrap()
}

async fn mount_creation(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(REGISTER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activationToken": "tok",
            "developerOrgCliToken": "org123"
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_active(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(REDEEM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ACTIVE",
            "apiToken": "secret",
            "orgUrl": "https://ada.example.okta.com"
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_create_organization_sends_user_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REGISTER_PATH))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "userProfile": {
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "company": "",
                "country": "UK",
                "okta_oie": true
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activationToken": "tok",
            "developerOrgCliToken": "org123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let endpoints = RegistrationEndpoints::new(server.uri(), "reg1");
    let created = create_organization(&executor(), &endpoints, &ada())
        .await
        .unwrap();

    assert_eq!(created.activation_token, "tok");
    assert_eq!(created.developer_org_cli_token, "org123");
}

#[tokio::test]
async fn test_create_organization_non_200_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REGISTER_PATH))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"errorSummary": "email taken"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let endpoints = RegistrationEndpoints::new(server.uri(), "reg1");
    let err = create_organization(&executor(), &endpoints, &ada())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::Registration));
    assert!(err.to_string().contains("400"));
    let json = err.to_json();
    assert!(json.message.contains("email taken"));
    assert!(json
        .context
        .unwrap()
        .contains("https://developer.okta.com/signup/"));
}

#[tokio::test]
async fn test_create_organization_unparseable_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REGISTER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let endpoints = RegistrationEndpoints::new(server.uri(), "reg1");
    let err = create_organization(&executor(), &endpoints, &ada())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::Registration));
}

#[tokio::test]
async fn test_create_organization_unreachable_server() {
    let server = MockServer::start().await;
    let endpoints = RegistrationEndpoints::new(server.uri(), "reg1");
    drop(server);

    let err = create_organization(&executor(), &endpoints, &ada())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::Registration));
}

#[tokio::test]
async fn test_poll_once_decodes_verification() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(REDEEM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "PENDING"})))
        .mount(&server)
        .await;

    let endpoints = RegistrationEndpoints::new(server.uri(), "reg1");
    let result = poll_once(&executor(), &endpoints, "org123").await.unwrap();

    assert_eq!(result.status, "PENDING");
    assert!(!result.is_active());
    assert_eq!(result.api_token, "");
}

#[tokio::test]
async fn test_poll_once_non_200_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(REDEEM_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let endpoints = RegistrationEndpoints::new(server.uri(), "reg1");
    let err = poll_once(&executor(), &endpoints, "org123")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Api));
}

#[tokio::test]
async fn test_register_end_to_end() {
    let server = MockServer::start().await;
    mount_creation(&server).await;
    mount_active(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let manager = manager_in(dir.path());
    let executor = executor();

    let outcome = Registrar::new(&executor, &manager)
        .with_endpoints(RegistrationEndpoints::new(server.uri(), "reg1"))
        .register(&ada())
        .await
        .unwrap();

    assert_eq!(outcome.org_url, "https://ada.example.okta.com");
    assert_eq!(outcome.config_path, dir.path().join("okta.yaml"));
    assert!(outcome.backup_path.is_none());

    let written = fs::read_to_string(&outcome.config_path).unwrap();
    assert_eq!(
        written,
        "okta:\n  client:\n    orgUrl: https://ada.example.okta.com\n    token: secret\n"
    );

    let loaded = manager.load().unwrap().unwrap();
    assert_eq!(loaded.org_url(), "https://ada.example.okta.com");
    assert_eq!(loaded.token(), "secret");
}

#[tokio::test(start_paused = true)]
async fn test_register_command_maps_flags_and_reports_domain() {
    let dir = tempfile::tempdir().unwrap();
    let manager = manager_in(dir.path());
    let executor = ScriptedExecutor::new(vec![
        ok(r#"{"activationToken":"tok","developerOrgCliToken":"org123"}"#),
        status("PENDING"),
        active("https://ada.example.okta.com", "secret"),
    ]);
    let output = Output::new(true, false);
    let args = RegisterArgs {
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        email: Some("ada@example.com".to_string()),
        country: Some("UK".to_string()),
        company: None,
        oie: true,
    };

    let registrar = registrar(&executor, &manager, &output)
        .with_endpoints(RegistrationEndpoints::new("https://registration.test", "reg1"));
    let outcome = execute_register(&args, &registrar, &RealInputOutput, &output)
        .await
        .unwrap();

    assert_eq!(
        domain_line(&outcome.org_url),
        "Your Okta Domain: https://ada.example.okta.com"
    );
    assert_eq!(executor.call_count(), 3);

    let calls = executor.calls.lock().unwrap();
    let sent: serde_json::Value =
        serde_json::from_str(calls[0].0.body.as_deref().unwrap()).unwrap();
    assert_eq!(
        sent,
        json!({
            "userProfile": {
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "company": "",
                "country": "UK",
                "okta_oie": true
            }
        })
    );
    drop(calls);

    assert_eq!(
        fs::read_to_string(manager.config_path()).unwrap(),
        "okta:\n  client:\n    orgUrl: https://ada.example.okta.com\n    token: secret\n"
    );
}

#[tokio::test]
async fn test_register_backs_up_existing_config() {
    let server = MockServer::start().await;
    mount_creation(&server).await;
    mount_active(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let manager = manager_in(dir.path());
    let previous = "okta:\n  client:\n    orgUrl: https://old.okta.com\n    token: old\n";
    fs::write(manager.config_path(), previous).unwrap();
    let executor = executor();

    let outcome = Registrar::new(&executor, &manager)
        .with_endpoints(RegistrationEndpoints::new(server.uri(), "reg1"))
        .register(&ada())
        .await
        .unwrap();

    let backup = outcome.backup_path.unwrap();
    assert_eq!(fs::read_to_string(&backup).unwrap(), previous);
    assert!(fs::read_to_string(manager.config_path())
        .unwrap()
        .contains("token: secret"));
}

#[tokio::test]
async fn test_register_creation_failure_leaves_config_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REGISTER_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(REDEEM_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let manager = manager_in(dir.path());
    let previous = "okta:\n  client:\n    orgUrl: https://old.okta.com\n    token: old\n";
    fs::write(manager.config_path(), previous).unwrap();
    let executor = executor();

    let err = Registrar::new(&executor, &manager)
        .with_endpoints(RegistrationEndpoints::new(server.uri(), "reg1"))
        .register(&ada())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::Registration));
    assert_eq!(fs::read_to_string(manager.config_path()).unwrap(), previous);
}
