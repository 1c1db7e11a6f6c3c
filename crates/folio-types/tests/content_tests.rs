use folio_types::*;

const PROJECTS: &str = r#"[
  {
    "id": 1,
    "title": "Storefront",
    "subtitle": "E-commerce platform",
    "description": "Shop front",
    "longDescription": "A long description",
    "category": "Web",
    "status": "Completed",
    "thumbnail": "/img/store.png",
    "images": ["/img/a.png", "/img/b.png", "/img/c.png"],
    "video": "",
    "technologies": ["React", "Node.js"],
    "features": ["Cart"],
    "githubUrl": "https://github.com/someone/store",
    "liveUrl": ""
  },
  {
    "id": "tracker",
    "title": "Habit Tracker",
    "category": "Desktop",
    "thumbnail": "/img/tracker.png"
  },
  {
    "id": 3,
    "title": "Notes",
    "thumbnail": "/img/notes.png"
  }
]"#;

#[test]
fn test_projects_document_decodes() -> anyhow::Result<()> {
    let projects: Vec<Project> = serde_json::from_str(PROJECTS)?;
    assert_eq!(projects.len(), 3);

    let store = &projects[0];
    assert_eq!(store.id, ItemId::Number(1));
    assert_eq!(store.category, Some(ProjectCategory::Web));
    assert_eq!(store.long_description, "A long description");
    assert_eq!(store.video_url(), None, "empty video counts as absent");
    assert_eq!(store.live(), None);
    assert_eq!(store.github(), Some("https://github.com/someone/store"));

    // Unknown label is dropped instead of failing the document
    assert_eq!(projects[1].category, None);
    assert_eq!(projects[1].id, ItemId::from("tracker"));

    assert_eq!(projects[2].category, None);
    assert!(projects[2].images.is_empty());
    Ok(())
}

#[test]
fn test_project_without_thumbnail_is_malformed() {
    let result: std::result::Result<Vec<Project>, _> =
        serde_json::from_str(r#"[{"id": 1, "title": "No media"}]"#);
    assert!(result.is_err());
}

#[test]
fn test_summary_document_decodes() -> anyhow::Result<()> {
    let summary: Summary = serde_json::from_str(
        r#"{
            "name": "Ada Example",
            "taglines": ["Full-Stack Developer", "Mobile Developer"],
            "bio": "Builds things.",
            "profileImage": "/img/me.png",
            "resumeUrl": "/resume.pdf",
            "location": "Lahore, Pakistan",
            "email": "ada@example.com",
            "phone": "+92 300 0000000",
            "social": {"github": "https://github.com/ada"},
            "education": {
                "degree": "Bachelors in Computer Science",
                "institution": "FAST NUCES, Lahore",
                "period": "2022 - Present",
                "grade": "CGPA: 3.50/4.00"
            }
        }"#,
    )?;

    assert_eq!(summary.taglines.len(), 2);
    assert_eq!(summary.social.linkedin, None);
    assert_eq!(summary.mailto().as_deref(), Some("mailto:ada@example.com"));
    assert_eq!(summary.tel().as_deref(), Some("tel:+923000000000"));
    assert_eq!(
        summary.education.as_ref().map(|e| e.institution.as_str()),
        Some("FAST NUCES, Lahore")
    );
    Ok(())
}

#[test]
fn test_experience_type_field() -> anyhow::Result<()> {
    let entries: Vec<ExperienceEntry> = serde_json::from_str(
        r#"[{
            "id": 1,
            "title": "Software Engineer Intern",
            "company": "acme",
            "type": "Internship",
            "location": "Remote",
            "duration": "Jun 2024 - Aug 2024",
            "description": "Worked on things",
            "responsibilities": ["Shipped features"],
            "technologies": ["Rust"]
        }]"#,
    )?;

    assert_eq!(entries[0].kind, "Internship");
    assert_eq!(entries[0].monogram(), 'A');
    assert_eq!(entries[0].logo, None);
    Ok(())
}

#[test]
fn test_contact_message_wire_shape() -> anyhow::Result<()> {
    let message = ContactMessage {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "Nice work".to_string(),
    };
    let value = serde_json::to_value(&message)?;
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Grace",
            "email": "grace@example.com",
            "subject": "Hello",
            "message": "Nice work"
        })
    );
    Ok(())
}
