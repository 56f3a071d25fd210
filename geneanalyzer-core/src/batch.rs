use crate::alphabets::Alphabet;
use crate::analysis::{self, Analysis};
use crate::error::BioResult;
use crate::seq::{SeqKind, SeqRecord, Sequence};
use log::{debug, warn};
use std::collections::HashMap;

/// Name given to a sequence passed directly instead of through a file.
pub const SINGLE_INPUT_NAME: &str = "input_sequence";

/// Named raw sequences, in the order they were selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceSource {
    names: Vec<Box<str>>,
    seqs: HashMap<Box<str>, Vec<u8>>,
}

impl SequenceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(raw: impl Into<Vec<u8>>) -> Self {
        let mut source = Self::new();
        source.push(SINGLE_INPUT_NAME, raw);
        source
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = SeqRecord>,
    {
        let mut source = Self::new();
        for record in records {
            source.push(record.id, record.seq);
        }
        source
    }

    /// Add a sequence. A repeated name keeps its first position and takes the
    /// new value.
    pub fn push(&mut self, name: impl Into<Box<str>>, raw: impl Into<Vec<u8>>) {
        let name = name.into();
        if !self.seqs.contains_key(&name) {
            self.names.push(name.clone());
        }
        self.seqs.insert(name, raw.into());
    }

    pub fn names(&self) -> &[Box<str>] {
        &self.names
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.seqs.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.names
            .iter()
            .map(|name| (&**name, self.seqs[name].as_slice()))
    }
}

/// Per-sequence results plus the order the sequences were analyzed in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchResults {
    results: HashMap<Box<str>, Analysis>,
    names: Vec<Box<str>>,
}

impl BatchResults {
    pub fn names(&self) -> &[Box<str>] {
        &self.names
    }

    pub fn get(&self, name: &str) -> Option<&Analysis> {
        self.results.get(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Results in analysis order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Analysis)> {
        self.names
            .iter()
            .map(|name| (&**name, &self.results[name]))
    }

    pub fn into_parts(self) -> (HashMap<Box<str>, Analysis>, Vec<Box<str>>) {
        (self.results, self.names)
    }
}

/// Apply `method` to every sequence of `source`, read as `kind`.
///
/// Stops at the first failure. An unknown method is reported as
/// [`BioError::AnalysisMethod`](crate::error::BioError::AnalysisMethod), a
/// kind mismatch as
/// [`BioError::InvalidSequenceTypeFor`](crate::error::BioError::InvalidSequenceTypeFor),
/// both naming the sequence.
pub fn process(source: &SequenceSource, kind: &str, method: &str) -> BioResult<BatchResults> {
    let kind = kind.parse::<SeqKind>()?;
    let alphabet = Alphabet::canonical(kind);
    debug!(
        "processing {} {} sequence(s) with {}",
        source.len(),
        kind,
        method
    );

    let mut out = BatchResults::default();
    for (name, raw) in source.iter() {
        if let Some((pos, symbol)) = alphabet.first_foreign(raw) {
            warn!(
                "{name}: non-canonical {kind} symbol {:?} at position {pos}",
                symbol as char
            );
        }
        let seq = Sequence::new(kind, raw);
        let result = analysis::analyze(&seq, method).map_err(|err| err.for_sequence(name))?;
        out.results.insert(name.into(), result);
        out.names.push(name.into());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::OrfReport;
    use crate::error::BioError;

    #[test]
    fn single_input_uses_synthetic_name() {
        let source = SequenceSource::single("ATGCATGC");
        let results = process(&source, "DNA", "gc_percent").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(&*results.names()[0], SINGLE_INPUT_NAME);
        assert_eq!(
            results.get(SINGLE_INPUT_NAME),
            Some(&Analysis::GcPercent(50.0))
        );
        assert_eq!(results.get(SINGLE_INPUT_NAME).unwrap().to_string(), "50.0 %");
    }

    #[test]
    fn order_follows_source() {
        let records = vec![
            SeqRecord::new("zeta", "AUG"),
            SeqRecord::new("alpha", "UUU"),
            SeqRecord::new("mid", "UAA"),
        ];
        let source = SequenceSource::from_records(records);
        let results = process(&source, "RNA", "translate").unwrap();
        let got: Vec<(String, String)> = results
            .iter()
            .map(|(n, r)| (n.to_string(), r.to_string()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("zeta".to_string(), "M".to_string()),
                ("alpha".to_string(), "F".to_string()),
                ("mid".to_string(), "*".to_string()),
            ]
        );
    }

    #[test]
    fn duplicate_names_keep_first_position() {
        let mut source = SequenceSource::new();
        source.push("a", "AAA");
        source.push("b", "CCC");
        source.push("a", "GGG");
        assert_eq!(source.len(), 2);
        assert_eq!(source.get("a"), Some(&b"GGG"[..]));
        let names: Vec<&str> = source.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn invalid_kind_name() {
        let err = process(&SequenceSource::single("ATGC"), "Peptide", "gc_percent").unwrap_err();
        assert!(matches!(err, BioError::UnknownSequenceType { .. }));
    }

    #[test]
    fn unknown_method_carries_sequence_name() {
        let err =
            process(&SequenceSource::single("ATGC"), "DNA", "invalid_method").unwrap_err();
        match err {
            BioError::AnalysisMethod { name, source } => {
                assert_eq!(name, SINGLE_INPUT_NAME);
                assert!(matches!(*source, BioError::UnknownMethod { .. }));
            }
            other => panic!("expected analysis method error, got {other:?}"),
        }
    }

    #[test]
    fn kind_mismatch_carries_sequence_name() {
        let mut source = SequenceSource::new();
        source.push("s1", "AUGUAA");
        let err = process(&source, "RNA", "orf").unwrap_err();
        match err {
            BioError::InvalidSequenceTypeFor { name, source } => {
                assert_eq!(name, "s1");
                assert!(matches!(*source, BioError::InvalidSequenceType { .. }));
            }
            other => panic!("expected invalid sequence type error, got {other:?}"),
        }
    }

    #[test]
    fn fails_fast_on_first_bad_sequence() {
        let mut source = SequenceSource::new();
        source.push("ok", "AUGC");
        source.push("bad", "AUGC");
        // every sequence has the same kind, so the first one fails
        let err = process(&source, "RNA", "transcribe").unwrap_err();
        assert!(err.to_string().contains("'ok'"));
    }

    #[test]
    fn orf_results_keep_report() {
        let source = SequenceSource::single("ATGAAATGAATGTAGATGCCCTAA");
        let results = process(&source, "dna", "orf").unwrap();
        match results.get(SINGLE_INPUT_NAME) {
            Some(Analysis::Orfs(OrfReport::Found(summary))) => assert_eq!(summary.count(), 3),
            other => panic!("expected ORF summary, got {other:?}"),
        }
    }

    #[test]
    fn empty_source_yields_empty_results() {
        let results = process(&SequenceSource::new(), "DNA", "gc_percent").unwrap();
        assert!(results.is_empty());
        let (map, names) = results.into_parts();
        assert!(map.is_empty() && names.is_empty());
    }
}
