/// End-to-end tests for the junit-report binary
///
/// These run the compiled executable against the XML fixtures in
/// tests/fixtures and the bundled templates.
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// Helper to get the test fixtures directory
fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

// Helper to run the binary with a clean template environment
fn run_report(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_junit-report"))
        .args(args)
        .env_remove("JUNIT_REPORT_TEMPLATE_DIR")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run junit-report {}: {}", args.join(" "), e))
}

fn assert_success(output: &Output, context: &str) {
    assert!(
        output.status.success(),
        "{} failed with status: {:?}\nstderr: {}",
        context,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("test paths are UTF-8")
}

#[test]
fn test_fixtures_exist() {
    assert!(fixture("single_suite.xml").exists());
    assert!(fixture("multi_suite.xml").exists());
    assert!(fixture("malformed.xml").exists());
}

#[test]
fn test_generates_report_and_prints_counts() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.html");
    let input = fixture("single_suite.xml");

    let output = run_report(&[path_arg(&input), path_arg(&out)]);
    assert_success(&output, "basic report");

    let text = stdout(&output);
    assert!(text.contains("Parsing JUnit XML from"));
    assert!(text.contains("Generating HTML report using 'basic' template..."));
    assert!(text.contains("Report generated successfully"));
    assert!(text.contains("Total tests: 3"));
    assert!(text.contains("Passed: 2"));
    assert!(text.contains("Failed: 1"));
    assert!(text.contains("Errors: 0"));
    assert!(text.contains("Skipped: 0"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("calculator"));
    assert!(html.contains("test_divide"));
    assert!(html.contains("66.7%"));
    assert!(html.contains("expected 2 &lt; 1"));
}

#[test]
fn test_every_bundled_template_renders_completely() {
    let dir = TempDir::new().unwrap();
    let input = fixture("multi_suite.xml");

    for template in ["basic", "modern", "detailed"] {
        let out = dir.path().join(format!("{}.html", template));
        let output = run_report(&[path_arg(&input), path_arg(&out), "--template", template]);
        assert_success(&output, template);

        let html = fs::read_to_string(&out).unwrap();
        assert!(!html.contains("{%"), "{} left a block directive behind", template);
        assert!(!html.contains("{{"), "{} left a variable directive behind", template);
        assert!(html.contains("api"), "{} is missing suite names", template);
        assert!(html.contains("test_migrate"), "{} is missing test names", template);
    }
}

#[test]
fn test_modern_template_uppercases_status_and_counts_cases() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("modern.html");
    let input = fixture("multi_suite.xml");

    let output = run_report(&[path_arg(&input), path_arg(&out), "-t", "modern"]);
    assert_success(&output, "modern report");

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("ERROR"));
    assert!(html.contains("SKIPPED"));
    assert!(html.contains("2 tests"));
    assert!(html.contains("1 test(s) failed or errored."));
}

#[test]
fn test_missing_input_exits_1_without_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.html");
    let input = dir.path().join("absent.xml");

    let output = run_report(&[path_arg(&input), path_arg(&out)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not found"));
    assert!(!stdout(&output).contains("Parsing"));
    assert!(!out.exists());
}

#[test]
fn test_malformed_input_exits_1_without_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.html");
    let input = fixture("malformed.xml");

    let output = run_report(&[path_arg(&input), path_arg(&out)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to parse"));
    assert!(!out.exists());
}

#[test]
fn test_missing_template_exits_1() {
    let dir = TempDir::new().unwrap();
    let templates = dir.path().join("templates");
    fs::create_dir(&templates).unwrap();
    let out = dir.path().join("report.html");
    let input = fixture("single_suite.xml");

    let output = run_report(&[path_arg(&input), path_arg(&out), "--template-dir", path_arg(&templates)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Template 'basic' not found"));
    assert!(!out.exists());
}

#[test]
fn test_custom_template_dir() {
    let dir = TempDir::new().unwrap();
    let templates = dir.path().join("templates");
    fs::create_dir(&templates).unwrap();
    fs::write(
        templates.join("basic.html"),
        "{{ total_tests }}/{% for s in testsuites %}{{ s.name }}{% endfor %}",
    )
    .unwrap();
    let out = dir.path().join("report.html");
    let input = fixture("multi_suite.xml");

    let output = run_report(&[path_arg(&input), path_arg(&out), "--template-dir", path_arg(&templates)]);
    assert_success(&output, "custom template dir");
    assert_eq!(fs::read_to_string(&out).unwrap(), "4/apidb");
}

#[test]
fn test_missing_output_argument_exits_2() {
    let input = fixture("single_suite.xml");
    let output = run_report(&[path_arg(&input)]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Both input and output arguments are required"));
}

#[test]
fn test_list_templates() {
    let output = run_report(&["--list-templates"]);
    assert_success(&output, "--list-templates");

    let text = stdout(&output);
    assert!(text.starts_with("Available templates:"));
    assert!(text.contains("  - basic\n"));
    assert!(text.contains("  - detailed\n"));
    assert!(text.contains("  - modern\n"));
}

#[test]
fn test_list_templates_shows_only_selectable_names() {
    let dir = TempDir::new().unwrap();
    for file in ["basic.html", "custom.html"] {
        fs::write(dir.path().join(file), "x").unwrap();
    }

    let output = run_report(&["--list-templates", "--template-dir", path_arg(dir.path())]);
    assert_success(&output, "--list-templates --template-dir");

    let text = stdout(&output);
    assert!(text.contains("  - basic\n"));
    assert!(!text.contains("custom"));
    assert!(!text.contains("modern"));
}

#[test]
fn test_counts_overflowing_u64_exit_1() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("huge.xml");
    fs::write(
        &input,
        r#"<testsuites><testsuite tests="18446744073709551615"/><testsuite tests="1"/></testsuites>"#,
    )
    .unwrap();
    let out = dir.path().join("report.html");

    let output = run_report(&[path_arg(&input), path_arg(&out)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to parse"));
    assert!(!stderr(&output).contains("panicked"));
    assert!(!out.exists());
}

#[test]
fn test_version_flag() {
    let output = run_report(&["--version"]);
    assert_success(&output, "--version");
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_json_export() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.html");
    let json = dir.path().join("report.json");
    let input = fixture("multi_suite.xml");

    let output = run_report(&[path_arg(&input), path_arg(&out), "--json", path_arg(&json)]);
    assert_success(&output, "--json");
    assert!(stdout(&output).contains("JSON report saved to"));

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(value["summary"]["total_tests"], 4);
    assert_eq!(value["summary"]["total_passed"], 2);
    assert_eq!(value["summary"]["success_rate"], 50.0);
    assert_eq!(value["testsuites"].as_array().unwrap().len(), 2);
    assert_eq!(value["testsuites"][0]["testcases"][1]["status"], "error");
    assert_eq!(value["testsuites"][1]["testcases"][1]["message"], "requires postgres");
}
