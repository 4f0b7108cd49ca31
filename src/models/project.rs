use serde::{Deserialize, Serialize};

/// Project details interpolated into a business requirements document
///
/// Every field is optional; missing ones fall back to generic boilerplate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub author: Option<String>,
    pub project_name: Option<String>,
    pub executive_summary: Option<String>,
    pub business_objectives: Option<String>,
    pub in_scope: Option<String>,
    pub out_scope: Option<String>,
    pub process_flows: Option<String>,
    pub data_requirements: Option<String>,
    pub assumptions: Option<String>,
    pub dependencies: Option<String>,
    pub glossary: Option<String>,
}

impl ProjectInfo {
    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or("Business Analyst")
    }

    pub fn project_name(&self) -> &str {
        self.project_name.as_deref().unwrap_or("Project Name")
    }

    pub fn executive_summary(&self) -> &str {
        self.executive_summary
            .as_deref()
            .unwrap_or("This document outlines the business requirements for the project.")
    }

    pub fn business_objectives(&self) -> &str {
        self.business_objectives.as_deref().unwrap_or(
            "- Improve operational efficiency\n- Enhance user experience\n- Reduce manual processing time",
        )
    }

    pub fn in_scope(&self) -> &str {
        self.in_scope.as_deref().unwrap_or(
            "- Core functionality implementation\n- User interface development\n- Integration with existing systems",
        )
    }

    pub fn out_scope(&self) -> &str {
        self.out_scope
            .as_deref()
            .unwrap_or("- Third-party integrations\n- Mobile application\n- Advanced analytics")
    }

    pub fn process_flows(&self) -> &str {
        self.process_flows
            .as_deref()
            .unwrap_or("[Process flow diagrams to be added]")
    }

    pub fn data_requirements(&self) -> &str {
        self.data_requirements
            .as_deref()
            .unwrap_or("- User profile data\n- Transaction records\n- Audit logs")
    }

    pub fn assumptions(&self) -> &str {
        self.assumptions.as_deref().unwrap_or(
            "- Users have basic computer skills\n- Internet connectivity is available\n- Existing data can be migrated",
        )
    }

    pub fn dependencies(&self) -> &str {
        self.dependencies.as_deref().unwrap_or(
            "- Database infrastructure\n- Authentication service\n- Email notification system",
        )
    }

    pub fn glossary(&self) -> &str {
        self.glossary
            .as_deref()
            .unwrap_or("BRD - Business Requirements Document\nUAT - User Acceptance Testing")
    }
}
