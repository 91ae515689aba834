use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn lone_owner_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-o", "octo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("if providing an owner or repo, you must provide both"));
}

#[test]
fn lone_repository_from_env_is_rejected() {
    let ctx = TestContext::new();
    ctx.git_add_origin("git@github.com:octo/hello.git");

    ctx.cli()
        .env("GITHUB_REPOSITORY", "hello")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must provide both"));
}

#[test]
fn missing_git_repository_is_reported() {
    let ctx = TestContext::new();

    ctx.cli_in(ctx.plain_dir())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("unable to read git config"));
}

#[test]
fn repository_without_origin_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no url configured for remote 'origin'"));
}

#[test]
fn help_lists_examples() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Examples:"))
        .stdout(predicate::str::contains("--purge"));
}

#[test]
fn version_is_printed() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
