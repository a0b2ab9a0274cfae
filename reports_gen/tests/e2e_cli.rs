//! End-to-end CLI tests for reports-gen

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn catalog() -> PathBuf {
    fixtures_path().join("reports.json")
}

/// Command running from an empty directory so no stray reports.toml is read
fn reports_gen(cwd: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("reports-gen");
    cmd.current_dir(cwd.path()).env_remove("RUST_LOG");
    cmd
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let temp = TempDir::new().expect("temp dir");
        reports_gen(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        let temp = TempDir::new().expect("temp dir");
        reports_gen(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Render Tests
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_to_stdout() {
        let temp = TempDir::new().expect("temp dir");
        reports_gen(&temp)
            .args(["render", "--out", "-", "--catalog"])
            .arg(catalog())
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains(r#"href="/foo""#))
            .stdout(predicate::str::contains(r#"src="/graph-2.svg""#))
            .stdout(predicate::str::contains(r#"src="/graph-2-dark.svg""#));
    }

    #[test]
    fn version_flag_rewrites_links() {
        let temp = TempDir::new().expect("temp dir");
        reports_gen(&temp)
            .args(["render", "--out", "-", "--doc-version", "v1", "--catalog"])
            .arg(catalog())
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"href="/foo?version=v1""#))
            .stdout(predicate::str::contains(r#"href="/foo""#).not());
    }

    #[test]
    fn path_strategy_flag() {
        let temp = TempDir::new().expect("temp dir");
        reports_gen(&temp)
            .args([
                "render",
                "--out",
                "-",
                "--doc-version",
                "v1",
                "--strategy",
                "path",
                "--catalog",
            ])
            .arg(catalog())
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"href="/v1/foo""#));
    }

    #[test]
    fn fragment_has_no_document_shell() {
        let temp = TempDir::new().expect("temp dir");
        reports_gen(&temp)
            .args(["render", "--out", "-", "--fragment", "--catalog"])
            .arg(catalog())
            .assert()
            .success()
            .stdout(predicate::str::contains("reports-grid"))
            .stdout(predicate::str::contains("<html").not());
    }

    #[test]
    fn writes_default_index_file() {
        let temp = TempDir::new().expect("temp dir");
        reports_gen(&temp)
            .arg("render")
            .arg("--catalog")
            .arg(catalog())
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("index.html")).expect("index.html");
        assert_eq!(html.matches(r#"class="report-card""#).count(), 3);
    }

    #[test]
    fn config_versions_render_one_page_each() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("reports.toml"),
            "title = \"Nightly\"\nversions = [\"v5\", \"v6\"]\n\n[link]\nstrategy = \"path\"\n",
        )
        .expect("write config");

        reports_gen(&temp)
            .args(["render", "--out", "site", "--catalog"])
            .arg(catalog())
            .assert()
            .success();

        let site = temp.path().join("site");
        let root = std::fs::read_to_string(site.join("index.html")).expect("root page");
        let v5 = std::fs::read_to_string(site.join("v5/index.html")).expect("v5 page");
        let v6 = std::fs::read_to_string(site.join("v6/index.html")).expect("v6 page");

        assert!(root.contains(r#"href="/foo""#));
        assert!(root.contains("Nightly"));
        assert!(v5.contains(r#"href="/v5/foo""#));
        assert!(v6.contains(r#"href="/v6/foo""#));
    }

    #[test]
    fn padded_config_versions_use_trimmed_directories() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("reports.toml"),
            "versions = [\" v5\", \"v6 \"]\n",
        )
        .expect("write config");

        reports_gen(&temp)
            .args(["render", "--out", "site", "--catalog"])
            .arg(catalog())
            .assert()
            .success();

        let site = temp.path().join("site");
        let v5 = std::fs::read_to_string(site.join("v5/index.html")).expect("v5 page");
        assert!(v5.contains(r#"href="/foo?version=v5""#));
        assert!(site.join("v6/index.html").is_file());
        assert!(!site.join(" v5").exists());
        assert!(!site.join("v6 ").exists());
    }

    #[test]
    fn blank_param_flag_keeps_default_name() {
        let temp = TempDir::new().expect("temp dir");
        reports_gen(&temp)
            .args(["render", "--out", "-", "--doc-version", "v1", "--param", "", "--catalog"])
            .arg(catalog())
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"href="/foo?version=v1""#))
            .stdout(predicate::str::contains("?=v1").not());
    }

    #[test]
    fn catalog_shape_error_names_the_field() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("bad.json"),
            r#"{"reports":[{"label":"a","href":"/a"},{"href":"/b"}]}"#,
        )
        .expect("write catalog");

        reports_gen(&temp)
            .args(["render", "--out", "-", "--catalog", "bad.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("index 1"))
            .stderr(predicate::str::contains("`label`"));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        reports_gen(&temp)
            .args(["--config", "nope.toml", "render", "--out", "-", "--catalog"])
            .arg(catalog())
            .assert()
            .failure()
            .stderr(predicate::str::contains("config file not found"));
    }

    #[test]
    fn empty_href_is_rejected() {
        let temp = TempDir::new().expect("temp dir");
        reports_gen(&temp)
            .args(["render", "--out", "-", "--catalog"])
            .arg(fixtures_path().join("empty_href.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("index 1 has an empty href"));
    }

    #[test]
    fn missing_catalog_is_reported() {
        let temp = TempDir::new().expect("temp dir");
        reports_gen(&temp)
            .args(["render", "--catalog", "missing.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing.json"));
    }
}

// ============================================
// Check / List Tests
// ============================================

mod check_and_list {
    use super::*;

    fn write_assets(dir: &std::path::Path, count: usize) {
        for i in 0..count {
            std::fs::write(dir.join(format!("graph-{}.svg", i)), "<svg/>").expect("light");
            std::fs::write(dir.join(format!("graph-{}-dark.svg", i)), "<svg/>").expect("dark");
        }
    }

    #[test]
    fn check_passes_with_all_assets() {
        let temp = TempDir::new().expect("temp dir");
        write_assets(temp.path(), 3);

        reports_gen(&temp)
            .args(["check", "--assets", "."])
            .arg("--catalog")
            .arg(catalog())
            .assert()
            .success()
            .stdout(predicate::str::contains("ok: 3 reports"));
    }

    #[test]
    fn check_lists_missing_assets() {
        let temp = TempDir::new().expect("temp dir");
        write_assets(temp.path(), 2);

        reports_gen(&temp)
            .args(["check", "--assets", "."])
            .arg("--catalog")
            .arg(catalog())
            .assert()
            .failure()
            .stdout(predicate::str::contains("graph-2.svg"))
            .stdout(predicate::str::contains("graph-2-dark.svg"));
    }

    #[test]
    fn list_prints_resolved_targets() {
        let temp = TempDir::new().expect("temp dir");
        reports_gen(&temp)
            .args(["list", "--doc-version", "v3", "--catalog"])
            .arg(catalog())
            .assert()
            .success()
            .stdout(predicate::str::contains("/foo?version=v3"))
            .stdout(predicate::str::contains("/graph-0-dark.svg"));
    }

    #[test]
    fn list_json_is_machine_readable() {
        let temp = TempDir::new().expect("temp dir");
        let output = reports_gen(&temp)
            .args(["list", "--json", "--catalog"])
            .arg(catalog())
            .output()
            .expect("run");
        assert!(output.status.success());

        let cards: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
        let cards = cards.as_array().expect("array");
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2]["href"], "/foo");
        assert_eq!(cards[2]["light_src"], "/graph-2.svg");
        assert_eq!(cards[2]["base_href"], "/foo");
    }
}
