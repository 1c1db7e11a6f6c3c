use folio_runtime::DocumentReport;

use crate::presentation::view_models::{
    CheckViewModel, CommandResultViewModel, DocumentStatusViewModel, Guidance, StatusBadge,
};

pub fn present_check(source: &str, reports: &[DocumentReport]) -> CommandResultViewModel<CheckViewModel> {
    let documents = reports
        .iter()
        .map(|report| DocumentStatusViewModel {
            document: report.document.to_string(),
            ok: report.ok,
            entries: report.entries,
            error: report.error.clone(),
        })
        .collect();

    let content = CheckViewModel {
        source: source.to_string(),
        documents,
    };

    let failures = content.failures();
    let total = content.documents.len();
    let result = CommandResultViewModel::new(content);

    if failures == 0 {
        result.with_badge(StatusBadge::success(format!("All {} documents loaded", total)))
    } else {
        result
            .with_badge(StatusBadge::error(format!(
                "{} of {} documents failed",
                failures, total
            )))
            .with_suggestion(
                Guidance::new("Point at another content root").with_command("folio --content <dir|url> check"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_counts_failures() {
        let reports = vec![
            DocumentReport {
                document: "summary.json",
                ok: true,
                entries: 1,
                error: None,
            },
            DocumentReport {
                document: "projects.json",
                ok: false,
                entries: 0,
                error: Some("not found: projects.json".to_string()),
            },
        ];
        let result = present_check("public/data", &reports);
        assert_eq!(result.content.failures(), 1);
        assert_eq!(result.badge.unwrap().label, "1 of 2 documents failed");
    }
}
