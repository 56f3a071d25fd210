use crate::seq::SeqKind;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("invalid sequence type: {op} requires {expected}, got {found}")]
    InvalidSequenceType {
        op: &'static str,
        expected: String,
        found: SeqKind,
    },

    #[error("invalid sequence type '{name}' (expected DNA, RNA, or Protein)")]
    UnknownSequenceType { name: String },

    #[error("unknown analysis method '{name}'")]
    UnknownMethod { name: String },

    #[error("unknown analysis mode '{name}'")]
    UnknownMode { name: String },

    #[error("analysis '{method}' is not valid for mode '{mode}'. valid options: {valid}")]
    MethodNotInMode {
        method: String,
        mode: &'static str,
        valid: String,
    },

    #[error("analysis method error for sequence '{name}': {source}")]
    AnalysisMethod {
        name: String,
        #[source]
        source: Box<BioError>,
    },

    #[error("invalid sequence type for this analysis (sequence '{name}'): {source}")]
    InvalidSequenceTypeFor {
        name: String,
        #[source]
        source: Box<BioError>,
    },

    #[error("unsupported file type: {path} (expected .fna, .fasta or .fa)")]
    UnsupportedFileType { path: String },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("sequence selection failed: {msg}")]
    SequenceSelection { msg: &'static str },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl BioError {
    /// Attach the name of the sequence being processed, sorting the failure
    /// into the batch-level category it belongs to.
    pub(crate) fn for_sequence(self, name: &str) -> BioError {
        match self {
            err @ BioError::InvalidSequenceType { .. } => BioError::InvalidSequenceTypeFor {
                name: name.to_string(),
                source: Box::new(err),
            },
            err => BioError::AnalysisMethod {
                name: name.to_string(),
                source: Box::new(err),
            },
        }
    }
}

pub type BioResult<T> = Result<T, BioError>;
