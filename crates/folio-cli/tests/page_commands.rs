//! About, experience, check and contact commands.

use folio_testing::{TestWorld, assertions, fixtures};
use folio_types::{EXPERIENCE_DOCUMENT, SUMMARY_DOCUMENT};

#[test]
fn test_about_prints_profile() {
    let world = TestWorld::new().with_document(SUMMARY_DOCUMENT, fixtures::SUMMARY);

    let result = world.run(&["about"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    let out = result.stdout();
    assert!(out.starts_with("Jordan Doe\nSoftware Engineer | Rustacean\n"));
    assert!(out.contains("Location: Lisbon, Portugal\n"));
    assert!(out.contains("GitHub:   https://github.com/jdoe\n"));
}

#[test]
fn test_browse_without_terminal_falls_back_to_profile() {
    let world = TestWorld::new().with_sample_content();

    let result = world.run(&[]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().starts_with("Jordan Doe\n"));
}

#[test]
fn test_experience_timeline() {
    let world = TestWorld::new().with_document(EXPERIENCE_DOCUMENT, fixtures::EXPERIENCE);

    let result = world.run(&["experience"]).unwrap();
    assert!(result.success());
    insta::assert_snapshot!(result.stdout(), @r"
    ● (A) Software Engineer
    │ acme
    │ Full-time · Remote · 2022 - Present
    │ Builds the platform.
    │ Key Responsibilities & Achievements
    │   • Own the API
    │   • Mentor juniors
    │ Technologies Used: Rust, PostgreSQL
    │
    ● (G) Intern
    │ Globex
    │ Internship · 2021
    │ Key Responsibilities & Achievements
    │   • Wrote tests
    ");
}

#[test]
fn test_experience_missing_document_fails() {
    let world = TestWorld::new();

    let result = world.run(&["experience"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Could not load experience"));
}

#[test]
fn test_check_all_documents() {
    let world = TestWorld::new().with_sample_content();

    let result = world.run(&["check"]).unwrap();
    assert!(result.success(), "stdout: {}", result.stdout());
    assert!(result.stdout().starts_with("✓ All 4 documents loaded\n"));
    assert!(result.stdout().contains("✓ projects.json"));
}

#[test]
fn test_check_reports_failures_and_exits_nonzero() {
    let world = TestWorld::new()
        .with_sample_content()
        .with_document(EXPERIENCE_DOCUMENT, "[{\"id\": 1}]");

    let result = world.run(&["check", "--format", "json"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("1 document(s) failed to load"));

    let json = result.json().unwrap();
    assertions::assert_badge_level(&json, "error").unwrap();
    let documents = json["content"]["documents"].as_array().unwrap();
    let failed: Vec<&str> = documents
        .iter()
        .filter(|d| d["ok"] == false)
        .map(|d| d["document"].as_str().unwrap())
        .collect();
    assert_eq!(failed, vec!["experience.json"]);
}

#[test]
fn test_contact_validation_blocks_send() {
    let world = TestWorld::new().with_config("[contact]\nendpoint = \"http://127.0.0.1:9/\"\n");

    let result = world
        .run(&[
            "contact",
            "--name",
            "Ada",
            "--email",
            "not-an-email",
            "--subject",
            " ",
            "--message",
            "Hello",
        ])
        .unwrap();
    assert!(!result.success());
    let out = result.stdout();
    assert!(out.starts_with("! Message not sent\n"));
    assert!(out.contains("  - Your Email is not a valid address\n"));
    assert!(out.contains("  - Subject is required\n"));
    assert!(!out.contains("Your Name"));
}

#[test]
fn test_contact_without_endpoint_suggests_one() {
    let world = TestWorld::new();

    let result = world
        .run(&[
            "contact",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--subject",
            "Hi",
            "--message",
            "Hello",
        ])
        .unwrap();
    assert!(!result.success());
    let out = result.stdout();
    assert!(out.contains("Failed to send message. Please try again later."));
    assert!(out.contains("no contact endpoint configured"));
    assert!(out.contains("folio contact --endpoint <url> ..."));
}

#[test]
fn test_contact_json_lists_field_problems() {
    let world = TestWorld::new();

    let result = world
        .run(&[
            "contact",
            "--name",
            "",
            "--email",
            "ada@example.com",
            "--subject",
            "Hi",
            "--message",
            "Hello",
            "--format",
            "json",
        ])
        .unwrap();
    assert!(!result.success());
    let json = result.json().unwrap();
    assertions::assert_badge_level(&json, "warning").unwrap();
    assert_eq!(json["content"]["errors"][0]["field"], "Your Name");
    assert_eq!(json["content"]["errors"][0]["problem"], "missing");
}
