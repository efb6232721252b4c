mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn a_healthy_project_passes() {
    let ctx = TestContext::new();
    ctx.write_properties("1.2.1", "2024.2");
    ctx.write_versions("1.2.1=20240811\n");

    ctx.cli()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed."));
}

#[test]
fn warnings_pass_by_default_and_fail_under_strict() {
    let ctx = TestContext::new();
    ctx.write_properties("1.2.1", "2024.2");
    ctx.write_versions("1.2.1=20240811\n1.2.1=20240812\n");

    ctx.cli()
        .arg("doctor")
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARN]"))
        .stderr(predicate::str::contains("occurs more than once"));

    ctx.cli().args(["doctor", "--strict"]).assert().code(2);
}

#[test]
fn an_invalid_store_date_fails() {
    let ctx = TestContext::new();
    ctx.write_properties("1.2.1", "2024.2");
    ctx.write_versions("1.2.1=2024-08-11\n");

    ctx.cli()
        .arg("doctor")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid date"))
        .stderr(predicate::str::contains("Check failed"));
}

#[test]
fn a_missing_properties_file_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("doctor")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERROR] gradle.properties: file not found"));
}

#[test]
fn auto_without_a_release_tag_warns() {
    let ctx = TestContext::new();
    ctx.write_properties("auto", "2024.2");
    ctx.init_git_repo(None);

    ctx.cli()
        .arg("doctor")
        .assert()
        .success()
        .stderr(predicate::str::contains("no release tag is reachable"));
}

#[test]
fn a_selector_lookalike_warns() {
    let ctx = TestContext::new();
    ctx.write_properties("1.2.1", "LATEST-EAP");

    ctx.cli()
        .arg("doctor")
        .assert()
        .success()
        .stderr(predicate::str::contains("treated as a pinned build"));
}
