pub mod bytes;
pub mod record;

pub use record::SeqRecord;

use crate::error::{BioError, BioResult};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Declared kind of a sequence. Operations check this tag, never the symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeqKind {
    Dna,
    Rna,
    Protein,
}

impl SeqKind {
    pub const ALL: [SeqKind; 3] = [SeqKind::Dna, SeqKind::Rna, SeqKind::Protein];

    pub fn as_str(self) -> &'static str {
        match self {
            SeqKind::Dna => "DNA",
            SeqKind::Rna => "RNA",
            SeqKind::Protein => "Protein",
        }
    }
}

impl fmt::Display for SeqKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeqKind {
    type Err = BioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeqKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BioError::UnknownSequenceType {
                name: s.to_string(),
            })
    }
}

/// An immutable run of symbols tagged with its declared kind.
///
/// Construction accepts any bytes; the alphabet is never checked here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sequence {
    kind: SeqKind,
    bytes: Vec<u8>,
}

impl Sequence {
    pub fn new(kind: SeqKind, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
        }
    }

    pub fn dna(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(SeqKind::Dna, bytes)
    }

    pub fn rna(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(SeqKind::Rna, bytes)
    }

    pub fn protein(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(SeqKind::Protein, bytes)
    }

    #[inline]
    pub fn kind(&self) -> SeqKind {
        self.kind
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn as_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Case-insensitive occurrences of `symbol`.
    pub fn count(&self, symbol: u8) -> usize {
        bytes::count_ignore_case(&self.bytes, symbol)
    }

    /// Symbols in `start..end`, clamped to the sequence bounds. Same kind.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.len());
        let start = start.min(end);
        Self {
            kind: self.kind,
            bytes: self.bytes[start..end].to_vec(),
        }
    }

    pub fn eq_ignore_case(&self, other: &[u8]) -> bool {
        self.bytes.eq_ignore_ascii_case(other)
    }

    /// Fails with `InvalidSequenceType` unless the kind is one of `allowed`.
    pub fn expect_kind(&self, op: &'static str, allowed: &[SeqKind]) -> BioResult<()> {
        if allowed.contains(&self.kind) {
            return Ok(());
        }
        let expected = allowed
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(" or ");
        Err(BioError::InvalidSequenceType {
            op,
            expected,
            found: self.kind,
        })
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str_lossy())
    }
}

impl PartialEq<str> for Sequence {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for Sequence {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("DNA".parse::<SeqKind>().unwrap(), SeqKind::Dna);
        assert_eq!("rna".parse::<SeqKind>().unwrap(), SeqKind::Rna);
        assert_eq!("Protein".parse::<SeqKind>().unwrap(), SeqKind::Protein);
    }

    #[test]
    fn kind_rejects_unknown_name() {
        let err = "peptide".parse::<SeqKind>().unwrap_err();
        match err {
            BioError::UnknownSequenceType { name } => assert_eq!(name, "peptide"),
            other => panic!("expected unknown sequence type, got {other:?}"),
        }
    }

    #[test]
    fn construction_accepts_any_symbols() {
        let s = Sequence::dna("AC#1 z");
        assert_eq!(s.len(), 6);
        assert_eq!(s, "AC#1 z");
    }

    #[test]
    fn count_is_case_insensitive() {
        let s = Sequence::dna("AaTtGgCc");
        assert_eq!(s.count(b'A'), 2);
        assert_eq!(s.count(b'g'), 2);
        assert_eq!(s.count(b'U'), 0);
    }

    #[test]
    fn slice_clamps_and_keeps_kind() {
        let s = Sequence::rna("AUGGCC");
        assert_eq!(s.slice(0, 3), "AUG");
        assert_eq!(s.slice(3, 100), "GCC");
        assert!(s.slice(5, 2).is_empty());
        assert_eq!(s.slice(1, 2).kind(), SeqKind::Rna);
    }

    #[test]
    fn kinds_compare_by_string_only_through_str() {
        let dna = Sequence::dna("ACG");
        let protein = Sequence::protein("ACG");
        assert_ne!(dna, protein);
        assert_eq!(dna, "ACG");
        assert_eq!(protein, "ACG");
        assert!(dna.eq_ignore_case(b"acg"));
    }

    #[test]
    fn expect_kind_lists_allowed_kinds() {
        let err = Sequence::protein("MKV")
            .expect_kind("gc_percent", &[SeqKind::Dna, SeqKind::Rna])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid sequence type: gc_percent requires DNA or RNA, got Protein"
        );
    }
}
