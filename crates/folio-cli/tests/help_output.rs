use assert_cmd::Command;

#[allow(deprecated)]
fn run_help(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    let output = cmd.args(args).arg("--help").output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    let help = run_help(&[]);
    for command in [
        "browse",
        "projects",
        "project",
        "skills",
        "experience",
        "about",
        "contact",
        "check",
    ] {
        assert!(help.contains(command), "missing {} in:\n{}", command, help);
    }
    assert!(help.contains("--content"));
}

#[test]
fn test_contact_help_requires_fields() {
    let help = run_help(&["contact"]);
    for flag in ["--name", "--email", "--subject", "--message", "--endpoint"] {
        assert!(help.contains(flag), "missing {} in:\n{}", flag, help);
    }
}

#[test]
fn test_version_flag() {
    assert_cmd::cargo::cargo_bin_cmd!("folio")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("folio "));
}

#[test]
fn test_content_env_is_honoured() {
    let world = folio_testing::TestWorld::new();
    std::fs::write(
        world.temp_dir().join("summary.json"),
        folio_testing::fixtures::SUMMARY,
    )
    .unwrap();

    // No --content flag: FOLIO_CONTENT picks the root
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("folio");
    cmd.arg("--config")
        .arg(world.config_path())
        .arg("about")
        .env("FOLIO_CONTENT", world.temp_dir())
        .assert()
        .success()
        .stdout(predicates::str::contains("Jordan Doe"));
}
