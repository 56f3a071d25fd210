//! Forward-strand open reading frame discovery.
//!
//! Every `ATG` is a candidate start, including starts nested inside an ORF
//! already reported. Each candidate is read in its own frame up to the first
//! in-frame stop. Reported ORFs are never merged or deduplicated.

use crate::codon::{self, START_CODON};
use crate::error::BioResult;
use crate::seq::{bytes, SeqKind, Sequence};
use std::fmt;
use vector_map::VecMap;

/// One start-to-stop stretch. `end` is the index of the last stop symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orf {
    pub sequence: Sequence,
    pub start: usize,
    pub end: usize,
    pub length: usize,
}

impl fmt::Display for Orf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sequence={} start={} end={} length={}",
            self.sequence, self.start, self.end, self.length
        )
    }
}

/// ORFs keyed `ORF_1`, `ORF_2`, ... in discovery order.
#[derive(Clone, Debug, Default)]
pub struct OrfSummary {
    orfs: VecMap<Box<str>, Orf>,
}

impl OrfSummary {
    pub fn count(&self) -> usize {
        self.orfs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Orf)> {
        self.orfs.iter().map(|(name, orf)| (&**name, orf))
    }

    pub fn get(&self, name: &str) -> Option<&Orf> {
        self.iter().find(|(n, _)| *n == name).map(|(_, orf)| orf)
    }

    fn push(&mut self, orf: Orf) {
        let name = format!("ORF_{}", self.orfs.len() + 1);
        self.orfs.insert(name.into_boxed_str(), orf);
    }
}

impl PartialEq for OrfSummary {
    fn eq(&self, other: &Self) -> bool {
        self.count() == other.count() && self.iter().eq(other.iter())
    }
}

/// Outcome of the ORF finder. An empty scan is its own variant.
#[derive(Clone, Debug, PartialEq)]
pub enum OrfReport {
    NoOrfs,
    Found(OrfSummary),
}

impl OrfReport {
    pub fn count(&self) -> usize {
        match self {
            OrfReport::NoOrfs => 0,
            OrfReport::Found(summary) => summary.count(),
        }
    }

    pub fn summary(&self) -> Option<&OrfSummary> {
        match self {
            OrfReport::NoOrfs => None,
            OrfReport::Found(summary) => Some(summary),
        }
    }
}

impl fmt::Display for OrfReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrfReport::NoOrfs => f.write_str("No ORFs found"),
            OrfReport::Found(summary) => write!(f, "{} ORFs", summary.count()),
        }
    }
}

pub fn find_orfs(seq: &Sequence) -> BioResult<OrfReport> {
    seq.expect_kind("orf", &[SeqKind::Dna])?;

    let hay = seq.as_bytes();
    let mut summary = OrfSummary::default();

    for start in bytes::find_overlapping(hay, START_CODON) {
        let Some(stop) = first_in_frame_stop(hay, start) else {
            continue;
        };
        let end = stop + 2;
        summary.push(Orf {
            sequence: seq.slice(start, end + 1),
            start,
            end,
            length: end + 1 - start,
        });
    }

    if summary.count() == 0 {
        return Ok(OrfReport::NoOrfs);
    }
    Ok(OrfReport::Found(summary))
}

fn first_in_frame_stop(hay: &[u8], start: usize) -> Option<usize> {
    hay[start..]
        .chunks_exact(3)
        .position(codon::is_stop)
        .map(|k| start + 3 * k)
}
