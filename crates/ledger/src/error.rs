use crate::Cp;
use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Failures of a Ledger Engine operation. None of them leave the ledger partially mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The catalog has no domain with this name
    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    /// No perk with this exact name (in the domain, or on the sheet)
    #[error("Perk not found: {0}")]
    PerkNotFound(String),

    /// Sheet position does not exist
    #[error("Sheet index {index} out of range (sheet has {len} perks)")]
    SheetIndexOutOfRange { index: usize, len: usize },

    /// Perk costs more than the current balance
    #[error("Insufficient CP! Need {need} CP but only have {have} CP.")]
    InsufficientCp { need: Cp, have: Cp },

    /// CP grants must not shrink the lifetime total
    #[error("Cannot add a negative amount of CP ({0}); use set_cp to correct the balance")]
    NegativeGrant(i64),
}

impl LedgerError {
    /// Stable machine-readable code for front ends.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DomainNotFound(_) => "domain_not_found",
            Self::PerkNotFound(_) => "perk_not_found",
            Self::SheetIndexOutOfRange { .. } => "perk_not_found",
            Self::InsufficientCp { .. } => "insufficient_cp",
            Self::NegativeGrant(_) => "invalid_request",
        }
    }
}

/// Errors while loading the perk catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// A CP pattern that cannot be used by the parser
#[derive(Error, Debug, Clone)]
pub enum PatternError {
    #[error("Invalid regex pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern '{pattern}' has no capture group for the CP value")]
    MissingCapture { pattern: String },
}

impl PatternError {
    pub fn pattern(&self) -> &str {
        match self {
            Self::Invalid { pattern, .. } | Self::MissingCapture { pattern } => pattern,
        }
    }
}
