use folio_core::{ContentSource, LoadError, ensure_unique_ids, fetch_document};
use folio_types::{
    EXPERIENCE_DOCUMENT, ExperienceEntry, PROJECTS_DOCUMENT, Project, SKILLS_DOCUMENT, SUMMARY_DOCUMENT,
    Skill, SkillsDocument, Summary,
};
use serde::Serialize;

pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// The skills page's data: catalog entries plus the free-form soft skills.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    pub skills: Vec<Skill>,
    pub soft_skills: Vec<String>,
}

/// Outcome of loading one document during `check`
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub document: &'static str,
    pub ok: bool,
    /// Entries decoded (1 for single-object documents)
    pub entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentReport {
    fn from_result<T>(document: &'static str, result: LoadResult<T>, count: impl Fn(&T) -> usize) -> Self {
        match result {
            Ok(value) => Self {
                document,
                ok: true,
                entries: count(&value),
                error: None,
            },
            Err(err) => Self {
                document,
                ok: false,
                entries: 0,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Every page's one-shot load, over a single content source.
#[derive(Debug, Clone)]
pub struct Site<S> {
    source: S,
}

impl<S: ContentSource> Site<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Projects are addressed by id, so a document repeating one is malformed.
    pub async fn projects(&self) -> LoadResult<Vec<Project>> {
        fetch_document(&self.source, PROJECTS_DOCUMENT)
            .await
            .and_then(ensure_unique_ids)
    }

    pub async fn skills(&self) -> LoadResult<SkillSet> {
        let document: SkillsDocument = fetch_document(&self.source, SKILLS_DOCUMENT).await?;
        let (skills, soft_skills) = document.into_parts();
        Ok(SkillSet {
            skills,
            soft_skills,
        })
    }

    pub async fn experience(&self) -> LoadResult<Vec<ExperienceEntry>> {
        fetch_document(&self.source, EXPERIENCE_DOCUMENT).await
    }

    pub async fn summary(&self) -> LoadResult<Summary> {
        fetch_document(&self.source, SUMMARY_DOCUMENT).await
    }

    /// Load every document once and report each outcome, in page order.
    pub async fn check(&self) -> Vec<DocumentReport> {
        vec![
            DocumentReport::from_result(SUMMARY_DOCUMENT, self.summary().await, |_| 1),
            DocumentReport::from_result(SKILLS_DOCUMENT, self.skills().await, |s| {
                s.skills.len()
            }),
            DocumentReport::from_result(PROJECTS_DOCUMENT, self.projects().await, Vec::len),
            DocumentReport::from_result(EXPERIENCE_DOCUMENT, self.experience().await, Vec::len),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::MemorySource;

    #[tokio::test]
    async fn test_check_reports_each_document() {
        let source = MemorySource::new()
            .with_document(PROJECTS_DOCUMENT, r#"[{"id": 1, "title": "A", "thumbnail": "/a.png"}]"#)
            .with_document(SKILLS_DOCUMENT, r#"{"languages": [{"name": "Rust", "proficiency": 90}]}"#)
            .with_document(EXPERIENCE_DOCUMENT, "not json");
        let reports = Site::new(source).check().await;

        let summary: Vec<(&str, bool, usize)> = reports
            .iter()
            .map(|r| (r.document, r.ok, r.entries))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("summary.json", false, 0),
                ("frameworks.json", true, 1),
                ("projects.json", true, 1),
                ("experience.json", false, 0),
            ]
        );
        assert!(reports[3].error.as_deref().unwrap().starts_with("Malformed document"));
    }

    #[tokio::test]
    async fn test_duplicate_project_ids_fail_the_load() {
        let source = MemorySource::new().with_document(
            PROJECTS_DOCUMENT,
            r#"[{"id": 1, "title": "A", "thumbnail": "/a.png"},
                {"id": 1, "title": "B", "thumbnail": "/b.png"}]"#,
        );
        let site = Site::new(source);

        let err = site.projects().await.unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));

        let reports = site.check().await;
        let projects = reports
            .iter()
            .find(|r| r.document == PROJECTS_DOCUMENT)
            .unwrap();
        assert!(!projects.ok);
        assert_eq!(projects.entries, 0);
        assert!(projects.error.as_deref().unwrap().contains("duplicate id '1'"));
    }
}
