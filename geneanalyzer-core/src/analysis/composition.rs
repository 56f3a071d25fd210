use crate::error::BioResult;
use crate::seq::{SeqKind, Sequence};
use std::fmt;

const NUCLEIC: &[SeqKind] = &[SeqKind::Dna, SeqKind::Rna];

/// Tally of the four DNA bases, case-insensitive. `T` is reported even for RNA.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BaseCounts {
    pub a: usize,
    pub t: usize,
    pub g: usize,
    pub c: usize,
}

impl BaseCounts {
    pub fn total(&self) -> usize {
        self.a + self.t + self.g + self.c
    }

    /// `(symbol, count)` pairs in A, T, G, C order.
    pub fn entries(&self) -> [(char, usize); 4] {
        [('A', self.a), ('T', self.t), ('G', self.g), ('C', self.c)]
    }
}

impl fmt::Display for BaseCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{A: {}, T: {}, G: {}, C: {}}}",
            self.a, self.t, self.g, self.c
        )
    }
}

/// Percentage of G and C over the whole length, rounded to two decimals.
/// An empty sequence is 0.
pub fn gc_percent(seq: &Sequence) -> BioResult<f64> {
    seq.expect_kind("gc_percent", NUCLEIC)?;
    if seq.is_empty() {
        return Ok(0.0);
    }
    let gc = seq.count(b'G') + seq.count(b'C');
    let pct = gc as f64 / seq.len() as f64 * 100.0;
    Ok(round2(pct))
}

pub fn base_count(seq: &Sequence) -> BioResult<BaseCounts> {
    seq.expect_kind("base_count", NUCLEIC)?;
    Ok(BaseCounts {
        a: seq.count(b'A'),
        t: seq.count(b'T'),
        g: seq.count(b'G'),
        c: seq.count(b'C'),
    })
}

#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// `50.0 %`, `66.67 %`: shortest form, at least one decimal.
pub fn format_percent(pct: f64) -> String {
    if pct.fract() == 0.0 {
        format!("{pct:.1} %")
    } else {
        format!("{pct} %")
    }
}
