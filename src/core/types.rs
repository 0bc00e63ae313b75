use serde::{Deserialize, Serialize};

/// Oligomeric state of an assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssemblyType {
    /// Single component with stoichiometry 1
    Monomeric,
    /// Single component with stoichiometry other than 1
    Homomeric,
    /// More than one component, regardless of stoichiometry
    Heteromeric,
}

impl std::fmt::Display for AssemblyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monomeric => write!(f, "monomeric"),
            Self::Homomeric => write!(f, "homomeric"),
            Self::Heteromeric => write!(f, "heteromeric"),
        }
    }
}

/// How per-component matches are combined into a single verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// At least one component must match
    Any,
    /// Every component must match
    All,
}

impl Quantifier {
    pub fn apply(self, mut matches: impl Iterator<Item = bool>) -> bool {
        match self {
            Self::Any => matches.any(|m| m),
            Self::All => matches.all(|m| m),
        }
    }
}

/// Class tag for unmapped-component checks
///
/// Unmapped components carry a literal prefix marker instead of a database
/// accession (e.g. `Protein_`, `antibody_`, `RNA_`, `DNA_`, `DNA/RNA_`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentClass {
    /// Any unmapped marker
    All,
    Protein,
    Antibody,
    /// Nucleic acid markers (RNA, DNA, DNA/RNA hybrid)
    Na,
}

impl ComponentClass {
    /// Literal prefix markers accepted for this class
    pub fn prefixes(self) -> &'static [&'static str] {
        match self {
            Self::All => &["Protein_", "antibody_", "RNA_", "DNA_", "DNA/RNA_"],
            Self::Protein => &["Protein_"],
            Self::Antibody => &["antibody_"],
            Self::Na => &["RNA_", "DNA_", "DNA/RNA_"],
        }
    }
}

/// Experimental method used to determine a structure
///
/// Values are restricted to a fixed vocabulary of internal codes; display
/// labels are the user-facing forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentalMethod {
    Em,
    Hybrid,
    Nmr,
    Other,
    Sas,
    Xray,
}

impl ExperimentalMethod {
    /// Parse an internal method code as found in the reference table
    pub fn parse(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "em" => Some(Self::Em),
            "hybrid" => Some(Self::Hybrid),
            "nmr" => Some(Self::Nmr),
            "other" => Some(Self::Other),
            "sas" => Some(Self::Sas),
            "x-ray" | "xray" => Some(Self::Xray),
            _ => None,
        }
    }

    /// Display label for reports
    pub fn label(self) -> &'static str {
        match self {
            Self::Em => "EM",
            Self::Hybrid => "Hybrid",
            Self::Nmr => "NMR",
            Self::Other => "Other",
            Self::Sas => "SAS",
            Self::Xray => "X-ray",
        }
    }
}

impl std::fmt::Display for ExperimentalMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Named ribosome class declared complete when both of its defining
/// Rfam families occur in an assembly string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RibosomeClass {
    Bacterial,
    Eukaryotic,
    Archaeal,
}

impl std::fmt::Display for RibosomeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Labels match the upstream reference data, including the
        // historical spelling of the archaeal class.
        match self {
            Self::Bacterial => write!(f, "Bacterial complete ribosome"),
            Self::Eukaryotic => write!(f, "Eukaryotic complete ribosome"),
            Self::Archaeal => write!(f, "Archeal complete ribosome"),
        }
    }
}
