use assert_cmd::Command;
use predicates::str::contains;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("weather").unwrap();
    cmd.env_remove("WEATHER_ENDPOINT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("show"))
        .stdout(contains("health"))
        .stdout(contains("configure"));
}

#[test]
fn empty_latitude_fails_before_any_request() {
    cmd()
        .args(["show", "--lat", "", "--lon", "2.35", "--endpoint", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(contains("Please enter both latitude and longitude"));
}

#[test]
fn unreachable_service_fails() {
    cmd()
        .args(["show", "--lat", "48.85", "--lon", "2.35", "--endpoint", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stdout(predicates::str::is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn show_prints_weather() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "-33.87"))
        .and(query_param("lon", "151.21"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"city":"Sydney","temperature":18.5,"description":"light rain","humidity":82,"windSpeed":5.1}"#,
        ))
        .mount(&server)
        .await;

    cmd()
        .args(["show", "--lat", "-33.87", "--lon", "151.21", "--endpoint", &server.uri()])
        .assert()
        .success()
        .stdout(contains("Sydney"))
        .stdout(contains("18.5°C"))
        .stdout(contains("light rain"))
        .stdout(contains("82%"))
        .stdout(contains("5.1 m/s"));
}

#[tokio::test(flavor = "multi_thread")]
async fn show_reports_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"bad coords"}"#))
        .mount(&server)
        .await;

    cmd()
        .args(["show", "--lat", "abc", "--lon", "def", "--endpoint", &server.uri()])
        .assert()
        .failure()
        .stderr(contains("bad coords"));
}

#[tokio::test(flavor = "multi_thread")]
async fn health_prints_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"healthy"}"#))
        .mount(&server)
        .await;

    cmd()
        .args(["health", "--endpoint", &server.uri()])
        .assert()
        .success()
        .stdout(contains("is healthy"));
}
