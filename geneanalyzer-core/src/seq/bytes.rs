use memchr::{memchr2_iter, memchr_iter, memmem};

/// Occurrences of an ASCII symbol, matching either case.
pub fn count_ignore_case(hay: &[u8], symbol: u8) -> usize {
    let upper = symbol.to_ascii_uppercase();
    let lower = symbol.to_ascii_lowercase();
    if upper == lower {
        return memchr_iter(symbol, hay).count();
    }
    memchr2_iter(upper, lower, hay).count()
}

/// Start offsets of every match of `pat`, overlapping matches included.
pub fn find_overlapping(hay: &[u8], pat: &[u8]) -> Vec<usize> {
    if pat.is_empty() {
        return (0..=hay.len()).collect();
    }

    let finder = memmem::Finder::new(pat);
    let mut out = Vec::new();
    let mut pos = 0usize;

    while pos <= hay.len().saturating_sub(pat.len()) {
        match finder.find(&hay[pos..]) {
            Some(i) => {
                out.push(pos + i);
                pos += i + 1;
            }
            None => break,
        }
    }

    out
}

/// Copy of `hay` with every `from` byte replaced by `to` (exact case).
pub fn replace_byte(hay: &[u8], from: u8, to: u8) -> Vec<u8> {
    let mut out = hay.to_vec();
    for i in memchr_iter(from, hay) {
        out[i] = to;
    }
    out
}
