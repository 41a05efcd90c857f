//! Sync command integration tests.

use predicates::prelude::*;

use super::common::{TestEnv, read_file};

#[test]
fn first_sync_installs_everything() {
    let env = TestEnv::new();
    env.write_resource("index.html", "<html>home</html>");
    env.write_resource("css/app.css", "body {}");

    env.kiosk_cmd()
        .arg("sync")
        .arg(env.resource_dir())
        .arg("--install-dir")
        .arg(env.install_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sync complete"))
        .stdout(predicate::str::contains("Resources copied: 2"));

    assert_eq!(env.installed_content("index.html"), "<html>home</html>");
    assert_eq!(env.installed_content("css/app.css"), "body {}");
    assert!(env.manifest_path().is_file());
    assert!(env.install_dir().join(".kiosk-marker").is_file());
    assert!(env.install_dir().join("data").is_dir());
    assert!(env.install_dir().join("engine").is_dir());
}

#[test]
fn second_sync_is_noop() {
    let env = TestEnv::new();
    env.write_resource("index.html", "<html></html>");
    env.sync();

    // Tamper with the installed copy; an up-to-date sync must not touch it.
    std::fs::write(env.installed("index.html"), "tampered").unwrap();

    env.kiosk_cmd()
        .arg("sync")
        .arg(env.resource_dir())
        .arg("--install-dir")
        .arg(env.install_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));

    assert_eq!(env.installed_content("index.html"), "tampered");
}

#[test]
fn changed_resource_is_recopied() {
    let env = TestEnv::new();
    env.write_resource("index.html", "v1");
    env.write_resource("app.js", "let x = 1;");
    env.sync();

    env.write_resource("index.html", "v2");
    env.kiosk_cmd()
        .arg("sync")
        .arg(env.resource_dir())
        .arg("--install-dir")
        .arg(env.install_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Resources copied: 1"));

    assert_eq!(env.installed_content("index.html"), "v2");
    assert_eq!(env.installed_content("app.js"), "let x = 1;");
}

#[test]
fn removed_resource_is_deleted() {
    let env = TestEnv::new();
    env.write_resource("index.html", "<html></html>");
    env.write_resource("old.css", "gone soon");
    env.sync();

    env.remove_resource("old.css");
    env.kiosk_cmd()
        .arg("sync")
        .arg(env.resource_dir())
        .arg("--install-dir")
        .arg(env.install_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Resources deleted: 1"));

    assert!(!env.installed("old.css").exists());
    assert!(env.installed("index.html").is_file());

    let manifest = read_file(&env.manifest_path());
    assert!(!manifest.contains("/ui/old.css="));
}

#[test]
fn corrupt_manifest_forces_full_reinstall() {
    let env = TestEnv::new();
    env.write_resource("index.html", "<html></html>");
    env.write_resource("app.js", "let x = 1;");
    env.sync();

    std::fs::write(env.manifest_path(), "garbage without a separator").unwrap();
    std::fs::write(env.installed("index.html"), "tampered").unwrap();

    env.kiosk_cmd()
        .arg("sync")
        .arg(env.resource_dir())
        .arg("--install-dir")
        .arg(env.install_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Resources copied: 2"));

    assert_eq!(env.installed_content("index.html"), "<html></html>");
}

#[test]
fn sync_refuses_foreign_directory() {
    let env = TestEnv::new();
    env.write_resource("index.html", "<html></html>");

    std::fs::create_dir_all(env.install_dir()).unwrap();
    std::fs::write(env.install_dir().join("precious.txt"), "mine").unwrap();

    env.kiosk_cmd()
        .arg("sync")
        .arg(env.resource_dir())
        .arg("--install-dir")
        .arg(env.install_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not empty"));

    assert_eq!(read_file(&env.install_dir().join("precious.txt")), "mine");
}

#[test]
fn sync_writes_sorted_manifest() {
    let env = TestEnv::new();
    env.write_resource("zebra.js", "z");
    env.write_resource("alpha.js", "a");
    env.sync();

    let manifest = read_file(&env.manifest_path());
    let paths: Vec<&str> = manifest
        .lines()
        .map(|line| line.rsplit_once('=').unwrap().0)
        .collect();
    assert_eq!(paths, vec!["/ui/alpha.js", "/ui/zebra.js"]);
}

#[test]
fn sync_with_custom_mount() {
    let env = TestEnv::new();
    env.write_resource("index.html", "<html></html>");

    env.kiosk_cmd()
        .arg("sync")
        .arg(env.resource_dir())
        .arg("--install-dir")
        .arg(env.install_dir())
        .arg("--mount")
        .arg("/web")
        .assert()
        .success();

    assert!(
        env.install_dir()
            .join("resources")
            .join("web")
            .join("index.html")
            .is_file()
    );
}
