use crate::types::Parent;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneticsError {
    #[error("Malformed genome ({parent}): {active} active / {inactive} inactive alleles for {locus_count} loci")]
    MalformedGenome {
        parent: Parent,
        locus_count: usize,
        active: usize,
        inactive: usize,
    },

    #[error("Size mismatch ({parent}): expected {expected} loci, got {actual}")]
    SizeMismatch {
        parent: Parent,
        expected: usize,
        actual: usize,
    },

    #[error("Locus {locus} out of range for a genome of {locus_count} loci")]
    LocusOutOfRange { locus: usize, locus_count: usize },

    #[error("Mutation chance must be within [0, 1], got {0}")]
    InvalidChance(f32),

    #[error("Invalid override genome: expected {expected} loci, got {actual} (valid: {valid})")]
    InvalidOverride {
        expected: usize,
        actual: usize,
        valid: bool,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config source error: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, GeneticsError>;
