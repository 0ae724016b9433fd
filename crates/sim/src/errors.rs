use std::error;
use std::fmt;
use std::path::PathBuf;

/// Error returned when attempting to convert an invalid byte/character into
/// an `AminoAcid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidAminoAcid(pub u8);

impl fmt::Display for InvalidAminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid amino acid byte: {} ('{}')", self.0, self.0 as char)
    }
}

impl error::Error for InvalidAminoAcid {}

/// Error type for failures when parsing a `Sequence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidSequence {
    /// A character was not recognized as an amino acid or gap.
    InvalidChar { position: usize, found: char },
}

impl fmt::Display for InvalidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { position, found } => {
                write!(f, "Invalid character in sequence at position {position}: '{found}'")
            }
        }
    }
}

impl error::Error for InvalidSequence {}

/// Errors that can occur while transferring residues between lineages.
#[derive(Debug, Clone, PartialEq)]
pub enum IntrogressionError {
    /// Proportion outside `[0, 1]`
    ProportionOutOfRange(f64),
    /// Donor and recipient have different lengths
    LengthMismatch { source: usize, target: usize },
}

impl fmt::Display for IntrogressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProportionOutOfRange(p) => {
                write!(
                    f,
                    "Invalid introgression proportion: {p} (must be between 0.0 and 1.0)"
                )
            }
            Self::LengthMismatch { source, target } => {
                write!(f, "Sequence length mismatch: donor {source} vs recipient {target}")
            }
        }
    }
}

impl error::Error for IntrogressionError {}

/// Errors raised when validating a parameter grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A parameter list is empty, so the grid has no points
    EmptyList(&'static str),
    /// A value is negative, NaN or infinite
    InvalidValue(&'static str, f64),
    /// A fraction lies outside `[0, 1]`
    OutOfUnitRange(&'static str, f64),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyList(name) => write!(f, "Parameter list '{name}' is empty"),
            Self::InvalidValue(name, v) => {
                write!(f, "Invalid value in '{name}': {v} (must be finite and non-negative)")
            }
            Self::OutOfUnitRange(name, v) => {
                write!(f, "Invalid value in '{name}': {v} (must be between 0.0 and 1.0)")
            }
        }
    }
}

impl error::Error for GridError {}

/// Errors reading the reference genome or the partition list.
#[derive(Debug)]
pub enum InputError {
    /// IO error
    Io(PathBuf, std::io::Error),
    /// First line of the genome file holds no residues
    EmptyReference(PathBuf),
    /// The reference contains an unknown symbol
    Sequence(PathBuf, InvalidSequence),
    /// A `charset` line without a partition name
    MalformedPartition { path: PathBuf, line: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "IO error on {}: {e}", path.display()),
            Self::EmptyReference(path) => {
                write!(f, "No reference sequence on the first line of {}", path.display())
            }
            Self::Sequence(path, e) => write!(f, "{}: {e}", path.display()),
            Self::MalformedPartition { path, line } => write!(
                f,
                "{}:{line}: charset line has no partition name",
                path.display()
            ),
        }
    }
}

impl error::Error for InputError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::Sequence(_, e) => Some(e),
            _ => None,
        }
    }
}

/// Errors loading or saving a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error
    Io(std::io::Error),
    /// Parse error
    Parse(String),
    /// Validation error
    Validation(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
            Self::Validation(e) => write!(f, "Validation error: {e}"),
        }
    }
}

impl error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Validation(e)
    }
}

/// Errors raised while running a replicate.
#[derive(Debug)]
pub enum SimulationError {
    Io(std::io::Error),
    Introgression(IntrogressionError),
    Grid(GridError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Introgression(e) => write!(f, "Introgression error: {e}"),
            Self::Grid(e) => write!(f, "Grid error: {e}"),
        }
    }
}

impl error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Introgression(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SimulationError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<IntrogressionError> for SimulationError {
    fn from(e: IntrogressionError) -> Self {
        Self::Introgression(e)
    }
}

impl From<GridError> for SimulationError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors reading a run manifest back.
#[derive(Debug)]
pub enum ManifestError {
    Io(std::io::Error),
    /// First line is not the expected header
    Header(String),
    /// A data row could not be parsed
    Malformed { line: usize, reason: String },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Header(found) => write!(f, "Unexpected manifest header: '{found}'"),
            Self::Malformed { line, reason } => write!(f, "Manifest line {line}: {reason}"),
        }
    }
}

impl error::Error for ManifestError {}

impl From<std::io::Error> for ManifestError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
