use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn tokenizes_file_as_tag_listing_by_default() {
    let mut cmd = cargo_bin_cmd!("jamlex");
    cmd.arg(fixture_path("Jamroot"));

    let output_pred = predicate::str::contains("name.function \"compile-all\"")
        .and(predicate::str::contains("name.namespace \"helpers\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn text_format_reproduces_the_file() {
    let source = std::fs::read_to_string(fixture_path("Jamroot")).unwrap();
    let mut cmd = cargo_bin_cmd!("jamlex");
    cmd.arg(fixture_path("Jamroot")).arg("--format").arg("text");

    cmd.assert().success().stdout(source);
}

#[test]
fn reads_standard_input() {
    let mut cmd = cargo_bin_cmd!("jamlex");
    cmd.arg("-").arg("-f").arg("json").write_stdin("ECHO hi ;");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"builtin\""));
}

#[test]
fn offsets_flag_adds_ranges() {
    let mut cmd = cargo_bin_cmd!("jamlex");
    cmd.arg("--offsets").write_stdin("if");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("keyword \"if\" @0..2\n"));
}

#[test]
fn config_file_selects_html() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[output]\nformat = \"html\"\n[html]\nwrap_pre = false").unwrap();

    let mut cmd = cargo_bin_cmd!("jamlex");
    cmd.arg("--config").arg(config.path()).write_stdin("<os>nt");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("<span class=\"na\">&lt;</span>"));
}

#[test]
fn unknown_format_fails() {
    let mut cmd = cargo_bin_cmd!("jamlex");
    cmd.arg("-f").arg("xml").write_stdin("");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format: xml"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("jamlex");
    cmd.arg("/nonexistent/Jamfile");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn prints_metadata() {
    let mut cmd = cargo_bin_cmd!("jamlex");
    cmd.arg("--metadata");

    cmd.assert().success().stdout(
        predicate::str::contains("\"name\": \"Jam\"")
            .and(predicate::str::contains("text/x-jam"))
            .and(predicate::str::contains("Jamroot")),
    );
}

#[test]
fn lists_formats() {
    let mut cmd = cargo_bin_cmd!("jamlex");
    cmd.arg("--list-formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("yaml").and(predicate::str::contains("html")));
}

#[test]
fn picks_up_project_config_from_working_directory() {
    let project = tempfile::tempdir().unwrap();
    std::fs::write(
        project.path().join("jamlex.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("jamlex");
    cmd.current_dir(project.path()).write_stdin("ECHO");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"builtin\""));
}

#[test]
fn format_flag_beats_project_config() {
    let project = tempfile::tempdir().unwrap();
    std::fs::write(
        project.path().join("jamlex.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("jamlex");
    cmd.current_dir(project.path())
        .arg("-f")
        .arg("tag")
        .write_stdin("ECHO");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("name.builtin \"ECHO\"\n"));
}
