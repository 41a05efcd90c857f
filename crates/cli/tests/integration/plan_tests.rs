//! Plan command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn plan_before_first_sync_lists_everything_as_add() {
    let env = TestEnv::new();
    env.write_resource("index.html", "<html></html>");
    env.write_resource("app.js", "let x = 1;");

    env.plan_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("+ /ui/app.js"))
        .stdout(predicate::str::contains("+ /ui/index.html"))
        .stdout(predicate::str::contains("2 change(s) pending"));
}

#[test]
fn plan_after_sync_reports_up_to_date() {
    let env = TestEnv::new();
    env.write_resource("index.html", "<html></html>");
    env.sync();

    env.plan_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn plan_marks_updates_and_removals() {
    let env = TestEnv::new();
    env.write_resource("index.html", "v1");
    env.write_resource("old.css", "gone soon");
    env.sync();

    env.write_resource("index.html", "v2");
    env.remove_resource("old.css");
    env.write_resource("new.js", "fresh");

    env.plan_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("~ /ui/index.html"))
        .stdout(predicate::str::contains("- /ui/old.css"))
        .stdout(predicate::str::contains("+ /ui/new.js"))
        .stdout(predicate::str::contains("3 change(s) pending"));
}

#[test]
fn plan_does_not_modify_anything() {
    let env = TestEnv::new();
    env.write_resource("index.html", "<html></html>");

    env.plan_cmd().assert().success();

    assert!(!env.install_dir().exists());
}

#[test]
fn plan_json_output_is_parseable() {
    let env = TestEnv::new();
    env.write_resource("index.html", "v1");
    env.sync();
    env.write_resource("index.html", "v2");

    let output = env.plan_cmd().arg("--format").arg("json").output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["first_run"], serde_json::json!(false));
    let changes = parsed["changes"].as_array().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0]["path"], "/ui/index.html");
    assert_eq!(changes[0]["kind"], "update");
}
