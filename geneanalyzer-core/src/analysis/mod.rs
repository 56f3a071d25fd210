//! Named analysis operations and the dispatcher that selects them.

pub mod composition;
pub mod orf;
pub mod transform;

pub use composition::BaseCounts;
pub use orf::{Orf, OrfReport, OrfSummary};

use crate::error::{BioError, BioResult};
use crate::seq::Sequence;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Signature shared by every analysis operation.
pub type Operation = fn(&Sequence) -> BioResult<Analysis>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    GcPercent,
    BaseCount,
    Translate,
    Transcribe,
    ReverseComplement,
    Orf,
}

impl Method {
    pub const ALL: [Method; 6] = [
        Method::GcPercent,
        Method::BaseCount,
        Method::Translate,
        Method::Transcribe,
        Method::ReverseComplement,
        Method::Orf,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::GcPercent => "gc_percent",
            Method::BaseCount => "base_count",
            Method::Translate => "translate",
            Method::Transcribe => "transcribe",
            Method::ReverseComplement => "reverse_complement",
            Method::Orf => "orf",
        }
    }

    pub fn operation(self) -> Operation {
        match self {
            Method::GcPercent => gc_percent_op,
            Method::BaseCount => base_count_op,
            Method::Translate => translate_op,
            Method::Transcribe => transcribe_op,
            Method::ReverseComplement => reverse_complement_op,
            Method::Orf => orf_op,
        }
    }
}

fn gc_percent_op(seq: &Sequence) -> BioResult<Analysis> {
    composition::gc_percent(seq).map(Analysis::GcPercent)
}

fn base_count_op(seq: &Sequence) -> BioResult<Analysis> {
    composition::base_count(seq).map(Analysis::BaseCount)
}

fn translate_op(seq: &Sequence) -> BioResult<Analysis> {
    transform::translate(seq).map(Analysis::Sequence)
}

fn transcribe_op(seq: &Sequence) -> BioResult<Analysis> {
    transform::transcribe(seq).map(Analysis::Sequence)
}

fn reverse_complement_op(seq: &Sequence) -> BioResult<Analysis> {
    transform::reverse_complement(seq).map(Analysis::Sequence)
}

fn orf_op(seq: &Sequence) -> BioResult<Analysis> {
    orf::find_orfs(seq).map(Analysis::Orfs)
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = BioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| BioError::UnknownMethod {
                name: s.to_string(),
            })
    }
}

/// A named group of methods offered together on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Basic,
}

impl Mode {
    pub const ALL: [Mode; 1] = [Mode::Basic];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Basic => "basic",
        }
    }

    pub fn methods(self) -> &'static [Method] {
        match self {
            Mode::Basic => &Method::ALL,
        }
    }

    /// Resolve `name` to a method this mode offers.
    pub fn validate(self, name: &str) -> BioResult<Method> {
        self.methods()
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .ok_or_else(|| BioError::MethodNotInMode {
                method: name.to_string(),
                mode: self.name(),
                valid: self
                    .methods()
                    .iter()
                    .map(|m| m.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = BioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BioError::UnknownMode {
                name: s.to_string(),
            })
    }
}

/// Output of one analysis operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Analysis {
    GcPercent(f64),
    BaseCount(BaseCounts),
    Sequence(Sequence),
    Orfs(OrfReport),
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Analysis::GcPercent(pct) => write!(f, "{}", composition::format_percent(*pct)),
            Analysis::BaseCount(counts) => write!(f, "{counts}"),
            Analysis::Sequence(seq) => write!(f, "{seq}"),
            Analysis::Orfs(report) => write!(f, "{report}"),
        }
    }
}

/// Run the method called `method` on `seq`.
///
/// Unknown names fail with [`BioError::UnknownMethod`] whatever the kind of
/// `seq`; kind mismatches fail with [`BioError::InvalidSequenceType`].
pub fn analyze(seq: &Sequence, method: &str) -> BioResult<Analysis> {
    let method = method.parse::<Method>()?;
    run(seq, method)
}

pub fn run(seq: &Sequence, method: Method) -> BioResult<Analysis> {
    debug!(
        "running {} on {} sequence of length {}",
        method,
        seq.kind(),
        seq.len()
    );
    (method.operation())(seq)
}
