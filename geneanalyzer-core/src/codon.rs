//! Standard genetic code over RNA codons.
//!
//! Lookup is literal: only upper-case `A`, `C`, `G`, `U` form a codon. Any other
//! window (lower case, ambiguity codes, a trailing partial codon) has no entry.

use std::sync::LazyLock;

/// Marker appended when translation reaches a stop codon.
pub const STOP_SYMBOL: u8 = b'*';

/// Residue emitted for a window with no table entry.
pub const UNKNOWN_RESIDUE: u8 = b'X';

/// DNA start codon used by the ORF finder.
pub const START_CODON: &[u8; 3] = b"ATG";

/// DNA stop codons used by the ORF finder.
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codon {
    Amino(u8),
    Stop,
}

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    map[b'A' as usize] = 0;
    map[b'C' as usize] = 1;
    map[b'G' as usize] = 2;
    map[b'U' as usize] = 3;
    map
});

// Indexed by (b1 << 4) | (b2 << 2) | b3 with A=0, C=1, G=2, U=3.
const CODON_TABLE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

/// Translate one RNA codon. `None` when the window is not a canonical codon.
pub fn lookup(codon: &[u8]) -> Option<Codon> {
    let [b1, b2, b3] = codon else {
        return None;
    };
    let i1 = BASE_INDEX[*b1 as usize];
    let i2 = BASE_INDEX[*b2 as usize];
    let i3 = BASE_INDEX[*b3 as usize];
    if i1 > 3 || i2 > 3 || i3 > 3 {
        return None;
    }
    let idx = ((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize);
    match CODON_TABLE[idx] {
        STOP_SYMBOL => Some(Codon::Stop),
        aa => Some(Codon::Amino(aa)),
    }
}

#[inline]
pub fn is_stop(window: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| window == *stop)
}
