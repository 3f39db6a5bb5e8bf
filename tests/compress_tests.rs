//! Compress command integration tests using the REAL assetpack binary

mod common;

use common::TestWorkspace;
use predicates::prelude::*;
use serde_yaml::Value;

fn strings(value: &Value) -> Vec<&str> {
    value
        .as_sequence()
        .map(|seq| seq.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

#[test]
fn test_compress_single_target_absorbs_everything() {
    let workspace = TestWorkspace::new();
    workspace.write_sources();
    workspace.write_config(
        r"  all:
    basePath: public/assets
    baseUrl: /assets
    js: all.js
    css: all.css
    depends: [admin, app, jquery]
",
    );

    workspace
        .compress_cmd("config/assets-prod.yaml")
        .assert()
        .success();

    assert_eq!(
        workspace.read_file("public/assets/all.js"),
        "var jQuery;\napp();\nforms();\nadmin();\n"
    );
    assert_eq!(
        workspace.read_file("public/assets/all.css"),
        "body{}\n.admin{}\n"
    );

    let manifest = workspace.read_manifest("config/assets-prod.yaml");
    assert_eq!(strings(&manifest["all"]["js"]), vec!["all.js"]);
    assert_eq!(strings(&manifest["all"]["css"]), vec!["all.css"]);
    assert_eq!(manifest["all"]["basePath"].as_str(), Some("public/assets"));
    assert_eq!(manifest["all"]["baseUrl"].as_str(), Some("/assets"));
    assert!(manifest["all"].get("depends").is_none());

    for bundle in ["jquery", "app", "admin"] {
        assert_eq!(strings(&manifest[bundle]["depends"]), vec!["all"]);
        assert!(manifest[bundle].get("js").is_none());
    }
}

#[test]
fn test_compress_manifest_header_and_order() {
    let workspace = TestWorkspace::new();
    workspace.write_sources();
    workspace.write_config(
        r"  all:
    basePath: public/assets
    baseUrl: /assets
    js: all.js
    depends: [app, jquery]
",
    );

    workspace
        .compress_cmd("assets-prod.yaml")
        .assert()
        .success();

    let content = workspace.read_file("assets-prod.yaml");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("# Do not modify this file manually as it is automatically generated by \"assetpack compress\".")
    );
    assert!(lines.next().is_some_and(|line| line.starts_with("# @version ")));

    let all = content.find("\nall:").expect("target entry");
    let jquery = content.find("\njquery:").expect("jquery stub");
    let app = content.find("\napp:").expect("app stub");
    assert!(all < jquery);
    assert!(jquery < app);
}

#[test]
fn test_compress_cross_target_dependencies() {
    let workspace = TestWorkspace::new();
    workspace.write_sources();
    workspace.write_config(
        r"  core:
    basePath: public/assets
    baseUrl: /assets
    js: core.js
    depends: [jquery]
  site:
    basePath: public/assets
    baseUrl: /assets
    js: site.js
    css: site.css
    depends: [app]
  back:
    basePath: public/assets
    baseUrl: /assets
    js: back.js
    depends: [admin]
",
    );

    workspace.compress_cmd("out.yaml").assert().success();

    assert_eq!(
        workspace.read_file("public/assets/core.js"),
        "var jQuery;\n"
    );
    assert_eq!(
        workspace.read_file("public/assets/site.js"),
        "app();\nforms();\n"
    );
    assert_eq!(workspace.read_file("public/assets/back.js"), "admin();\n");
    assert!(!workspace.file_exists("public/assets/back.css"));

    let manifest = workspace.read_manifest("out.yaml");
    assert!(manifest["core"].get("depends").is_none());
    assert_eq!(strings(&manifest["site"]["depends"]), vec!["core"]);
    assert_eq!(strings(&manifest["back"]["depends"]), vec!["site"]);
    assert_eq!(strings(&manifest["jquery"]["depends"]), vec!["core"]);
    assert_eq!(strings(&manifest["app"]["depends"]), vec!["site"]);
    assert_eq!(strings(&manifest["admin"]["depends"]), vec!["back"]);
}

#[test]
fn test_compress_keeps_unowned_dependency() {
    let workspace = TestWorkspace::new();
    workspace.write_sources();
    workspace.write_config(
        r"  site:
    basePath: public/assets
    baseUrl: /assets
    js: site.js
    depends: [app]
",
    );

    workspace.compress_cmd("out.yaml").assert().success();

    assert_eq!(
        workspace.read_file("public/assets/site.js"),
        "app();\nforms();\n"
    );
    let manifest = workspace.read_manifest("out.yaml");
    assert_eq!(strings(&manifest["site"]["depends"]), vec!["jquery"]);
    assert!(manifest.get("jquery").is_none());
    assert!(manifest.get("admin").is_none());
}

#[test]
fn test_compress_expands_timestamp() {
    let workspace = TestWorkspace::new();
    workspace.write_sources();
    workspace.write_config(
        r"  all:
    basePath: public/assets
    baseUrl: /assets
    js: 'all-{ts}.js'
    depends: [jquery]
",
    );

    workspace.compress_cmd("out.yaml").assert().success();

    let manifest = workspace.read_manifest("out.yaml");
    let output = strings(&manifest["all"]["js"])[0].to_string();
    let stamp = output
        .strip_prefix("all-")
        .and_then(|rest| rest.strip_suffix(".js"))
        .expect("output should keep the declared shape");
    assert!(stamp.parse::<u64>().is_ok());
    assert!(workspace.file_exists(&format!("public/assets/{output}")));
}

#[test]
fn test_compress_loads_extension_bundles() {
    let workspace = TestWorkspace::new();
    workspace.write_sources();
    workspace.write_file("ext/widgets/widgets.js", "widgets();\n");
    workspace.write_file(
        "ext/assets.yaml",
        r"
widgets:
  basePath: ext/widgets
  js: [widgets.js]
  depends: [app]
jquery:
  basePath: ext/ignored
  js: [ignored.js]
",
    );
    workspace.write_file(
        "assets.yaml",
        &format!(
            "{}extensions: [ext, missing-ext]\ntargets:\n{}",
            common::BUNDLES,
            r"  all:
    basePath: public/assets
    baseUrl: /assets
    js: all.js
    depends: [widgets, jquery]
"
        ),
    );

    workspace.compress_cmd("out.yaml").assert().success();

    assert_eq!(
        workspace.read_file("public/assets/all.js"),
        "var jQuery;\nwidgets();\n"
    );
    let manifest = workspace.read_manifest("out.yaml");
    assert_eq!(strings(&manifest["all"]["depends"]), vec!["app"]);
    assert_eq!(strings(&manifest["widgets"]["depends"]), vec!["all"]);
}

#[test]
fn test_compress_with_external_compressor() {
    if cfg!(not(unix)) {
        return;
    }

    let workspace = TestWorkspace::new();
    workspace.write_sources();
    workspace.write_config(
        r"  core:
    basePath: public/assets
    baseUrl: /assets
    js: core.js
    depends: [jquery]
",
    );

    workspace
        .compress_cmd("out.yaml")
        .args(["--js-compressor", "cp {from} {to}"])
        .assert()
        .success();

    assert_eq!(
        workspace.read_file("public/assets/core.js"),
        "var jQuery;\n"
    );
}

#[test]
fn test_compress_logs_progress_to_stderr() {
    let workspace = TestWorkspace::new();
    workspace.write_sources();
    workspace.write_config(
        r"  core:
    basePath: public/assets
    baseUrl: /assets
    js: core.js
    depends: [jquery]
",
    );

    workspace
        .compress_cmd("out.yaml")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote 2 manifest entries"));
}

#[test]
fn test_compress_quiet_is_silent() {
    let workspace = TestWorkspace::new();
    workspace.write_sources();
    workspace.write_config(
        r"  core:
    basePath: public/assets
    baseUrl: /assets
    js: core.js
    depends: [jquery]
",
    );

    workspace
        .compress_cmd("out.yaml")
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_compress_verbose_lists_inputs() {
    let workspace = TestWorkspace::new();
    workspace.write_sources();
    workspace.write_config(
        r"  site:
    basePath: public/assets
    baseUrl: /assets
    js: site.js
    depends: [app]
",
    );

    workspace
        .compress_cmd("out.yaml")
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("forms.js"))
        .stderr(predicate::str::contains("Canonical bundle order"));
}
