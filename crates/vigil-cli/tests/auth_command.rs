//! `vigil login` / `vigil register` against a mocked auth API.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[tokio::test]
async fn test_login_success_prints_landing_route() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(body_json(serde_json::json!({
            "user_mail": "a@b.com",
            "password": "longenough1"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("vigil")
        .env("VIGIL_HOME", home.path())
        .env("VIGIL_API_BASE_URL", server.uri())
        .args(["login", "--email", "a@b.com", "--password", "longenough1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful"))
        .stdout(predicate::str::contains("/dashboard"));
}

#[tokio::test]
async fn test_register_reads_password_from_env() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("vigil")
        .env("VIGIL_HOME", home.path())
        .env("VIGIL_API_BASE_URL", server.uri())
        .env("VIGIL_PASSWORD", "longenough1")
        .args(["register", "--email", "a@b.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registration successful"))
        .stdout(predicate::str::contains("/UserDashboard"));
}

#[tokio::test]
async fn test_rejected_login_fails_with_generic_message() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("vigil")
        .env("VIGIL_HOME", home.path())
        .env("VIGIL_API_BASE_URL", server.uri())
        .args(["login", "--email", "a@b.com", "--password", "longenough1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Login failed. Please try again."))
        .stderr(predicate::str::contains("401").not());
}

#[tokio::test]
async fn test_unreachable_server_fails_with_same_generic_message() {
    let home = TempDir::new().unwrap();
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .map(|listener| listener.local_addr().unwrap().port())
        .unwrap_or(9);

    cargo_bin_cmd!("vigil")
        .env("VIGIL_HOME", home.path())
        .env("VIGIL_API_BASE_URL", format!("http://127.0.0.1:{port}"))
        .args(["login", "--email", "a@b.com", "--password", "longenough1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Login failed. Please try again."))
        .stderr(predicate::str::contains("request failed").not());
}

#[tokio::test]
async fn test_invalid_credentials_never_reach_server() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    cargo_bin_cmd!("vigil")
        .env("VIGIL_HOME", home.path())
        .env("VIGIL_API_BASE_URL", server.uri())
        .args(["login", "--email", "a@b.com", "--password", "short"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Password must be at least 8 characters",
        ));
}
