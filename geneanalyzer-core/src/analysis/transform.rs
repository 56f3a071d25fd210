use crate::alphabets::{dna, rna};
use crate::codon::{self, Codon};
use crate::error::BioResult;
use crate::seq::{bytes, SeqKind, Sequence};

/// DNA to RNA: every upper-case `T` becomes `U`.
pub fn transcribe(seq: &Sequence) -> BioResult<Sequence> {
    seq.expect_kind("transcribe", &[SeqKind::Dna])?;
    Ok(Sequence::rna(bytes::replace_byte(seq.as_bytes(), b'T', b'U')))
}

/// RNA to protein, reading codons from offset 0.
///
/// The first stop codon is emitted as `*` and ends translation. A window with
/// no table entry, including a trailing partial codon, becomes `X`.
pub fn translate(seq: &Sequence) -> BioResult<Sequence> {
    seq.expect_kind("translate", &[SeqKind::Rna])?;

    let mut protein = Vec::with_capacity(seq.len().div_ceil(3));
    for window in seq.as_bytes().chunks(3) {
        match codon::lookup(window) {
            Some(Codon::Stop) => {
                protein.push(codon::STOP_SYMBOL);
                break;
            }
            Some(Codon::Amino(aa)) => protein.push(aa),
            None => protein.push(codon::UNKNOWN_RESIDUE),
        }
    }
    Ok(Sequence::protein(protein))
}

/// Case-preserving complement, reversed. Keeps the input kind.
pub fn reverse_complement(seq: &Sequence) -> BioResult<Sequence> {
    seq.expect_kind("reverse_complement", &[SeqKind::Dna, SeqKind::Rna])?;
    let out = match seq.kind() {
        SeqKind::Dna => dna::reverse_complement(seq.as_bytes()),
        _ => rna::reverse_complement(seq.as_bytes()),
    };
    Ok(Sequence::new(seq.kind(), out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BioError;

    #[test]
    fn transcribe_dna_to_rna() {
        let rna = transcribe(&Sequence::dna("ATGC")).unwrap();
        assert_eq!(rna.kind(), SeqKind::Rna);
        assert_eq!(rna, "AUGC");
    }

    #[test]
    fn transcribe_only_touches_upper_t() {
        assert_eq!(transcribe(&Sequence::dna("TtT")).unwrap(), "UtU");
    }

    #[test]
    fn transcribe_rejects_rna() {
        let err = transcribe(&Sequence::rna("AUGC")).unwrap_err();
        assert!(matches!(
            err,
            BioError::InvalidSequenceType {
                op: "transcribe",
                found: SeqKind::Rna,
                ..
            }
        ));
    }

    #[test]
    fn translate_stops_at_first_stop() {
        let protein = translate(&Sequence::rna("AUGUUUUAA")).unwrap();
        assert_eq!(protein.kind(), SeqKind::Protein);
        assert_eq!(protein, "MF*");
        assert_eq!(translate(&Sequence::rna("AUGUAAUUUGGG")).unwrap(), "M*");
    }

    #[test]
    fn translate_without_stop() {
        assert_eq!(translate(&Sequence::rna("AUGGCC")).unwrap(), "MA");
    }

    #[test]
    fn translate_unknown_windows_become_x() {
        // trailing partial codon
        assert_eq!(translate(&Sequence::rna("AUGGCCA")).unwrap(), "MAX");
        assert_eq!(translate(&Sequence::rna("AUGNNNGCC")).unwrap(), "MXA");
        assert_eq!(translate(&Sequence::rna("aug")).unwrap(), "X");
        assert_eq!(translate(&Sequence::rna("")).unwrap(), "");
    }

    #[test]
    fn translate_rejects_dna() {
        assert!(translate(&Sequence::dna("ATGTTT")).is_err());
    }

    #[test]
    fn reverse_complement_dna() {
        let out = reverse_complement(&Sequence::dna("ATGC")).unwrap();
        assert_eq!(out.kind(), SeqKind::Dna);
        assert_eq!(out, "GCAT");
        assert_eq!(reverse_complement(&Sequence::dna("AAcg")).unwrap(), "cgTT");
    }

    #[test]
    fn reverse_complement_rna() {
        let out = reverse_complement(&Sequence::rna("AUGC")).unwrap();
        assert_eq!(out.kind(), SeqKind::Rna);
        assert_eq!(out, "GCAU");
    }

    #[test]
    fn reverse_complement_rejects_protein() {
        assert!(reverse_complement(&Sequence::protein("MKWV")).is_err());
    }
}
