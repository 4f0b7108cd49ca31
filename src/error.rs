use thiserror::Error;

/// Errors surfaced by the requirements pipeline and its store
#[derive(Debug, Error)]
pub enum IrmsError {
    /// The transcript was empty or contained only whitespace
    #[error("No transcript provided")]
    InvalidInput,

    #[error("Requirement not found: {0}")]
    RequirementNotFound(String),

    /// A document was requested without any matching requirement
    #[error("No requirements selected")]
    NoRequirementsSelected,
}

pub type IrmsResult<T> = Result<T, IrmsError>;
