use crate::alphabets::Alphabet;

/// The 20 standard residues plus the stop (`*`) and unknown (`X`) markers
/// that translation can emit.
pub fn alphabet() -> Alphabet {
    Alphabet::new(&b"ARNDCEQGHILKMFPSTWYVXarndceqghilkmfpstwyvx*"[..])
}
