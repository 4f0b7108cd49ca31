use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::{IrmsError, IrmsResult};
use crate::models::{ProjectInfo, RequirementRecord};

/// Identifier and metadata for a generated document
#[derive(Debug, Clone, Serialize)]
pub struct BrdDocument {
    /// `BRD-YYYYMMDDHHMMSS`
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Ids of the requirements included, in document order
    pub requirements: Vec<String>,
    #[serde(skip)]
    pub content: String,
}

impl BrdDocument {
    pub fn filename(&self) -> String {
        format!("{}_BRD.md", self.id)
    }
}

/// Renders selected requirements into a Markdown business requirements document
#[derive(Debug, Clone, Copy, Default)]
pub struct BrdGenerator;

impl BrdGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Assemble a document from the given requirements
    ///
    /// Returns [`IrmsError::NoRequirementsSelected`] when `requirements` is empty.
    pub fn build(
        &self,
        requirements: &[RequirementRecord],
        project: &ProjectInfo,
        include_diagrams: bool,
        now: DateTime<Utc>,
    ) -> IrmsResult<BrdDocument> {
        if requirements.is_empty() {
            return Err(IrmsError::NoRequirementsSelected);
        }

        Ok(BrdDocument {
            id: format!("BRD-{}", now.format("%Y%m%d%H%M%S")),
            created_at: now,
            requirements: requirements.iter().map(|r| r.id.clone()).collect(),
            content: self.render(requirements, project, include_diagrams, now.date_naive()),
        })
    }

    /// Render the document text
    pub fn render(
        &self,
        requirements: &[RequirementRecord],
        project: &ProjectInfo,
        include_diagrams: bool,
        date: NaiveDate,
    ) -> String {
        let mut functional = Vec::with_capacity(requirements.len());
        let mut stories = Vec::with_capacity(requirements.len());
        let mut criteria = Vec::with_capacity(requirements.len());

        for (i, req) in requirements.iter().enumerate() {
            let n = i + 1;
            functional.push(format!("FR{:03}: {}", n, req.original_requirement));
            stories.push(format!("**US{:03}:** {}", n, req.user_story));

            let mut block = format!("\n**For US{:03}:**\n", n);
            for criterion in &req.acceptance_criteria {
                block.push_str(&format!("- {}\n", criterion));
            }
            criteria.push(block);
        }

        let diagrams = if include_diagrams {
            "[Diagrams section - see attached images]"
        } else {
            "[No diagrams provided]"
        };

        format!(
            r#"
# Business Requirements Document (BRD)

**Document Version:** 1.0  
**Date:** {date}  
**Author:** {author}  
**Project:** {project_name}

## Table of Contents
1. Executive Summary
2. Business Objectives
3. Scope
4. Functional Requirements
5. Non-Functional Requirements
6. User Stories
7. Process Flows
8. Data Requirements
9. Assumptions and Dependencies
10. Acceptance Criteria

---

## 1. Executive Summary
{executive_summary}

## 2. Business Objectives
{business_objectives}

## 3. Scope
### In Scope:
{in_scope}

### Out of Scope:
{out_scope}

## 4. Functional Requirements
{functional}

## 5. Non-Functional Requirements
### Performance Requirements:
- Response time should be less than 2 seconds
- System should support concurrent users
- 99.9% uptime requirement

### Security Requirements:
- All data must be encrypted
- Role-based access control
- Audit trail for all transactions

## 6. User Stories
{stories}

## 7. Process Flows
{process_flows}

## 8. Data Requirements
{data_requirements}

## 9. Assumptions and Dependencies
### Assumptions:
{assumptions}

### Dependencies:
{dependencies}

## 10. Acceptance Criteria
{criteria}

---

## Appendix
### Diagrams and Mockups
{diagrams}

### Glossary
{glossary}
"#,
            date = date.format("%Y-%m-%d"),
            author = project.author(),
            project_name = project.project_name(),
            executive_summary = project.executive_summary(),
            business_objectives = project.business_objectives(),
            in_scope = project.in_scope(),
            out_scope = project.out_scope(),
            functional = functional.join("\n"),
            stories = stories.join("\n\n"),
            process_flows = project.process_flows(),
            data_requirements = project.data_requirements(),
            assumptions = project.assumptions(),
            dependencies = project.dependencies(),
            criteria = criteria.join("\n"),
            diagrams = diagrams,
            glossary = project.glossary(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: &str, original: &str, criteria: &[&str]) -> RequirementRecord {
        RequirementRecord {
            id: id.to_string(),
            original_requirement: original.to_string(),
            user_story: format!("As a user, I want to {} so that I can improve the process", original),
            acceptance_criteria: criteria.iter().map(|c| c.to_string()).collect(),
            created_at: Utc::now(),
            status: Default::default(),
            priority: Default::default(),
        }
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        let result = BrdGenerator::new().build(&[], &ProjectInfo::default(), false, Utc::now());

        assert!(matches!(result, Err(IrmsError::NoRequirementsSelected)));
    }

    #[test]
    fn test_document_numbering_and_sections() {
        let requirements = vec![
            record("REQ-004", "export invoices", &["GIVEN the export feature is available"]),
            record("REQ-007", "delete drafts", &[]),
        ];
        let project = ProjectInfo {
            project_name: Some("Billing".to_string()),
            ..Default::default()
        };
        let now = Utc.with_ymd_and_hms(2026, 3, 9, 14, 5, 30).unwrap();

        let doc = BrdGenerator::new()
            .build(&requirements, &project, true, now)
            .unwrap();

        assert_eq!(doc.id, "BRD-20260309140530");
        assert_eq!(doc.requirements, vec!["REQ-004", "REQ-007"]);
        assert_eq!(doc.filename(), "BRD-20260309140530_BRD.md");
        assert!(doc.content.contains("**Date:** 2026-03-09"));
        assert!(doc.content.contains("**Project:** Billing"));
        assert!(doc.content.contains("**Author:** Business Analyst"));
        assert!(doc.content.contains("FR001: export invoices\nFR002: delete drafts"));
        assert!(doc.content.contains("**US002:** As a user, I want to delete drafts"));
        assert!(doc.content.contains("**For US001:**\n- GIVEN the export feature is available\n"));
        assert!(doc.content.contains("[Diagrams section - see attached images]"));
        assert!(doc.content.contains("## Appendix"));
    }

    #[test]
    fn test_header_lines_break_in_markdown() {
        let requirements = vec![record("REQ-001", "export invoices", &[])];
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let content =
            BrdGenerator::new().render(&requirements, &ProjectInfo::default(), false, date);

        assert!(content.contains("**Document Version:** 1.0  \n"));
        assert!(content.contains("**Date:** 2026-01-02  \n"));
        assert!(content.contains("**Author:** Business Analyst  \n**Project:**"));
    }

    #[test]
    fn test_no_diagrams_line() {
        let requirements = vec![record("REQ-001", "export invoices", &[])];
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let content =
            BrdGenerator::new().render(&requirements, &ProjectInfo::default(), false, date);

        assert!(content.contains("[No diagrams provided]"));
    }
}
