use crate::harness::TestContext;
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;

fn expected_body(url: &str, events: &[&str]) -> serde_json::Value {
    json!({
        "config": {
            "url": url,
            "content_type": "json",
            "insecure_ssl": "0",
            "secret": "s3cret"
        },
        "events": events,
        "name": "web"
    })
}

#[test]
fn creates_hook_from_environment() {
    let mut ctx = TestContext::new();
    let mock = ctx
        .server()
        .mock("POST", "/repos/octo/hello/hooks")
        .match_header("authorization", "token test-token")
        .match_body(Matcher::Json(expected_body(
            "https://hooks.example.com/github",
            &["push", "status"],
        )))
        .with_status(201)
        .with_body(r#"{"id": 101, "name": "web", "events": ["push", "status"]}"#)
        .expect(1)
        .create();

    ctx.cli_with_hook_env()
        .assert()
        .success()
        .stdout(predicate::str::contains("Created webhook 101 on octo/hello"));

    mock.assert();
}

#[test]
fn flags_override_environment() {
    let mut ctx = TestContext::new();
    let mock = ctx
        .server()
        .mock("POST", "/repos/acme/widgets/hooks")
        .match_header("authorization", "token flag-token")
        .match_body(Matcher::Json(expected_body("https://other.example.com", &["issues"])))
        .with_status(201)
        .with_body(r#"{"id": 7}"#)
        .expect(1)
        .create();

    ctx.cli_with_hook_env()
        .args(["-o", "acme", "-r", "widgets", "-t", "flag-token"])
        .args(["-h", "https://other.example.com", "-e", "issues"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created webhook 7 on acme/widgets"));

    mock.assert();
}

#[test]
fn infers_owner_and_repository_from_origin() {
    let mut ctx = TestContext::new();
    ctx.git_add_origin("git@github.com:cdaringe/webhookup.git");
    let mock = ctx
        .server()
        .mock("POST", "/repos/cdaringe/webhookup/hooks")
        .with_status(201)
        .with_body(r#"{"id": 3}"#)
        .expect(1)
        .create();

    ctx.cli()
        .args(["-t", "test-token", "-h", "https://hooks.example.com", "-s", "s3cret"])
        .args(["-e", "status,push"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cdaringe/webhookup"));

    mock.assert();
}

#[test]
fn github_error_message_is_reported() {
    let mut ctx = TestContext::new();
    let mock = ctx
        .server()
        .mock("POST", "/repos/octo/hello/hooks")
        .with_status(422)
        .with_body(r#"{"message": "Validation Failed"}"#)
        .expect(1)
        .create();

    ctx.cli_with_hook_env()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: [github error]: Validation Failed"));

    mock.assert();
}

#[test]
fn incomplete_setup_exits_without_request() {
    let mut ctx = TestContext::new();
    let mock = ctx.server().mock("POST", Matcher::Any).expect(0).create();

    ctx.cli_with_hook_env()
        .env_remove("WEBHOOK_SECRET")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("incomplete hook setup received:"))
        .stderr(predicate::str::contains("test-token").not());

    mock.assert();
}

#[test]
fn empty_event_list_is_incomplete() {
    let ctx = TestContext::new();

    ctx.cli_with_hook_env()
        .args(["-e", " , ,"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("\"hook_events\": []"));
}
