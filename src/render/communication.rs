use std::fmt;

use crate::models::RequirementRecord;

/// Who a requirement announcement is written for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Audience {
    Executive,
    Technical,
    #[default]
    General,
}

impl Audience {
    /// Parse a stakeholder-type tag; unknown tags fall back to `General`
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "executive" => Audience::Executive,
            "technical" => Audience::Technical,
            _ => Audience::General,
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Audience::Executive => "executive",
            Audience::Technical => "technical",
            Audience::General => "general",
        };
        f.write_str(tag)
    }
}

/// Render an announcement of the requirement for the given audience
pub fn render_communication(requirement: &RequirementRecord, audience: Audience) -> String {
    match audience {
        Audience::Executive => format!(
            r#"
Subject: New Business Requirement - {id}

Dear [Executive Name],

We have identified a new business requirement that aligns with our strategic objectives.

Summary: {story}

Business Impact: This requirement will help improve operational efficiency and user satisfaction.

Priority: {priority}
Target Timeline: [To be determined]

Please let me know if you need any additional information.

Best regards,
[Your Name]
"#,
            id = requirement.id,
            story = requirement.user_story,
            priority = requirement.priority,
        ),
        Audience::Technical => {
            let criteria = requirement
                .acceptance_criteria
                .iter()
                .map(|c| format!("- {}", c))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                r#"
Subject: Technical Requirement Specification - {id}

Hi Team,

New requirement for implementation:

ID: {id}
User Story: {story}

Acceptance Criteria:
{criteria}

Technical Considerations:
- API changes may be required
- Database schema updates needed
- Integration testing required

Please review and provide your estimates.

Thanks,
[Your Name]
"#,
                id = requirement.id,
                story = requirement.user_story,
                criteria = criteria,
            )
        }
        Audience::General => format!(
            r#"
Subject: Requirement Update - {id}

Hello,

We have documented a new requirement:

{story}

Status: {status}
Priority: {priority}

Please feel free to reach out if you have any questions.

Best,
[Your Name]
"#,
            id = requirement.id,
            story = requirement.user_story,
            status = requirement.status,
            priority = requirement.priority,
        ),
    }
}
