use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The identifier does not split into exactly accession + stoichiometry
    #[error("Malformed component identifier: '{0}'")]
    MalformedIdentifier(String),

    #[error("Invalid stoichiometry '{found}' in component '{component}'")]
    InvalidStoichiometry { component: String, found: String },

    #[error("Empty assembly string")]
    EmptyAssembly,
}

/// One polymer chain or chain group within an assembly
///
/// The wire form is `<Accession>_<Stoichiometry>`, where the accession is a
/// UniProt accession, an Rfam family id, or an unmapped marker such as
/// `Protein` or `DNA/RNA`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Accession token before the stoichiometry suffix
    pub accession: String,

    /// Integer copy-count of this component within its assembly
    pub stoichiometry: u32,
}

impl Component {
    pub fn new(accession: impl Into<String>, stoichiometry: u32) -> Self {
        Self {
            accession: accession.into(),
            stoichiometry,
        }
    }

    /// Parse a component identifier of the form `<Accession>_<Stoichiometry>`.
    ///
    /// The split is strict: zero or more than one underscore is a structural
    /// failure, never silently coerced.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MalformedIdentifier` if the identifier does not
    /// contain exactly one underscore, or `ParseError::InvalidStoichiometry`
    /// if the suffix is not a positive integer.
    pub fn parse(identifier: &str) -> Result<Self, ParseError> {
        let mut parts = identifier.split('_');
        let (accession, stoichiometry) = match (parts.next(), parts.next(), parts.next()) {
            (Some(accession), Some(stoichiometry), None) => (accession, stoichiometry),
            _ => return Err(ParseError::MalformedIdentifier(identifier.to_string())),
        };

        let stoichiometry: u32 = stoichiometry
            .parse()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| ParseError::InvalidStoichiometry {
                component: identifier.to_string(),
                found: stoichiometry.to_string(),
            })?;

        Ok(Self::new(accession, stoichiometry))
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.accession, self.stoichiometry)
    }
}
