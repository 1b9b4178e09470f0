use thiserror::Error;

/// Province and language community a postal code resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRegion {
    pub region: String,
    pub macro_region: Option<String>,
}

/// Outcome of classifying a postal code.
///
/// `Unresolved` covers both malformed input and values no configured range
/// contains; it is a normal result, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Resolved(ResolvedRegion),
    Unresolved,
}

#[cfg(test)]
impl Classification {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Classification::Resolved(_))
    }

    pub fn region(&self) -> Option<&str> {
        match self {
            Classification::Resolved(resolved) => Some(&resolved.region),
            Classification::Unresolved => None,
        }
    }

    pub fn macro_region(&self) -> Option<&str> {
        match self {
            Classification::Resolved(resolved) => resolved.macro_region.as_deref(),
            Classification::Unresolved => None,
        }
    }
}

impl Classification {
    /// Turn the sentinel into an error for callers that must reject the input
    pub fn into_result(self, postal_code: &str) -> Result<ResolvedRegion, UnresolvedPostalCode> {
        match self {
            Classification::Resolved(resolved) => Ok(resolved),
            Classification::Unresolved => Err(UnresolvedPostalCode::new(postal_code)),
        }
    }
}

/// The single error kind of region classification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("postal code '{postal_code}' does not map to any configured region")]
pub struct UnresolvedPostalCode {
    pub postal_code: String,
}

impl UnresolvedPostalCode {
    pub fn new(postal_code: impl Into<String>) -> Self {
        Self {
            postal_code: postal_code.into(),
        }
    }
}
