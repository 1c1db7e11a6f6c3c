//! Sample content documents.
//!
//! Small but complete: every media shape, one project without a category,
//! numeric and string ids, and a skills document with soft skills.

use folio_types::{EXPERIENCE_DOCUMENT, PROJECTS_DOCUMENT, SKILLS_DOCUMENT, SUMMARY_DOCUMENT};

pub const PROJECTS: &str = r#"[
  {
    "id": 1,
    "title": "Storefront",
    "subtitle": "Headless e-commerce",
    "description": "A fast storefront.",
    "longDescription": "A headless storefront with server rendering.",
    "category": "Web",
    "status": "Live",
    "thumbnail": "/img/store.png",
    "images": ["/img/store-1.png", "/img/store-2.png", "/img/store-3.png"],
    "video": "",
    "technologies": ["React", "Next.js", "Stripe"],
    "features": ["Cart", "Checkout"],
    "githubUrl": "https://github.com/jdoe/store",
    "liveUrl": "https://store.example.com",
    "featured": true
  },
  {
    "id": 2,
    "title": "Trail Log",
    "description": "Offline hiking journal.",
    "category": "Mobile",
    "thumbnail": "/img/trail.png",
    "video": "/media/trail.mp4",
    "technologies": ["Flutter"]
  },
  {
    "id": "cli-kit",
    "title": "CLI Kit",
    "description": "Terminal helpers.",
    "category": "Other",
    "thumbnail": "/img/cli.png",
    "images": ["/img/cli-1.png"]
  },
  {
    "id": 4,
    "title": "Sketchbook",
    "description": "Uncategorised experiments.",
    "thumbnail": "/img/sketch.png"
  }
]"#;

pub const SKILLS: &str = r#"{
  "languages": [
    {"name": "Rust", "icon": "rust.svg", "proficiency": 90},
    {"name": "TypeScript", "icon": "ts.svg", "proficiency": 80}
  ],
  "frontend": [
    {"name": "React", "icon": "react.svg", "proficiency": 75}
  ],
  "backend": [
    {"name": "Axum", "icon": "axum.svg", "proficiency": 70}
  ],
  "databases": [
    {"name": "PostgreSQL", "icon": "pg.svg", "proficiency": 65}
  ],
  "tools": [],
  "softSkills": ["Mentoring", "Technical writing"]
}"#;

pub const EXPERIENCE: &str = r#"[
  {
    "id": 1,
    "title": "Software Engineer",
    "company": "acme",
    "type": "Full-time",
    "location": "Remote",
    "duration": "2022 - Present",
    "description": "Builds the platform.",
    "responsibilities": ["Own the API", "Mentor juniors"],
    "technologies": ["Rust", "PostgreSQL"]
  },
  {
    "id": 2,
    "title": "Intern",
    "company": "Globex",
    "type": "Internship",
    "duration": "2021",
    "responsibilities": ["Wrote tests"]
  }
]"#;

pub const SUMMARY: &str = r#"{
  "name": "Jordan Doe",
  "taglines": ["Software Engineer", "Rustacean"],
  "bio": "I build fast, reliable software.",
  "location": "Lisbon, Portugal",
  "email": "jordan@example.com",
  "phone": "+351 900 000 000",
  "social": {
    "github": "https://github.com/jdoe",
    "linkedin": "https://linkedin.com/in/jdoe"
  },
  "education": {
    "degree": "BSc Computer Science",
    "institution": "University of Lisbon",
    "period": "2017 - 2021"
  }
}"#;

/// Every document, keyed by its file name
pub fn sample_documents() -> [(&'static str, &'static str); 4] {
    [
        (PROJECTS_DOCUMENT, PROJECTS),
        (SKILLS_DOCUMENT, SKILLS),
        (EXPERIENCE_DOCUMENT, EXPERIENCE),
        (SUMMARY_DOCUMENT, SUMMARY),
    ]
}
