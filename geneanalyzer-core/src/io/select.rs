//! Choosing which records of a file to analyze.
//!
//! The answer source is injected, so the same logic serves an interactive
//! prompt, a command-line flag, or a test.

use crate::batch::SequenceSource;
use crate::error::{BioError, BioResult};
use crate::seq::SeqRecord;
use log::{debug, warn};

pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Every record, in file order.
    All,
    /// A 1-based record number.
    Number(i64),
    /// First record whose id or description contains the text.
    Text(String),
}

impl Selection {
    pub fn parse(answer: &str) -> Self {
        let answer = answer.trim();
        if answer.eq_ignore_ascii_case("all") {
            return Selection::All;
        }
        match answer.parse::<i64>() {
            Ok(n) => Selection::Number(n),
            Err(_) => Selection::Text(answer.to_string()),
        }
    }

    /// Indices of the chosen records, or `None` if nothing matches.
    pub fn resolve(&self, records: &[SeqRecord]) -> Option<Vec<usize>> {
        match self {
            Selection::All => Some((0..records.len()).collect()),
            Selection::Number(n) => usize::try_from(*n)
                .ok()
                .filter(|&n| (1..=records.len()).contains(&n))
                .map(|n| vec![n - 1]),
            Selection::Text(text) if text.is_empty() => None,
            Selection::Text(text) => records
                .iter()
                .position(|r| r.header().contains(text.as_str()))
                .map(|i| vec![i]),
        }
    }
}

/// Ask for a selection until one matches, at most `max_attempts` times.
///
/// `ask` receives the 1-based attempt number and returns the raw answer.
pub fn select_records<F>(
    records: Vec<SeqRecord>,
    max_attempts: usize,
    mut ask: F,
) -> BioResult<SequenceSource>
where
    F: FnMut(usize) -> BioResult<String>,
{
    if records.is_empty() {
        return Err(BioError::SequenceSelection {
            msg: "no records to select from",
        });
    }

    for attempt in 1..=max_attempts {
        let answer = ask(attempt)?;
        let selection = Selection::parse(&answer);
        match selection.resolve(&records) {
            Some(indices) => {
                debug!("selection {selection:?} matched {} record(s)", indices.len());
                return Ok(take(records, &indices));
            }
            None => warn!(
                "no matching record for {:?} (attempt {attempt} of {max_attempts})",
                answer.trim()
            ),
        }
    }

    Err(BioError::SequenceSelection {
        msg: "maximum attempts exceeded",
    })
}

fn take(records: Vec<SeqRecord>, indices: &[usize]) -> SequenceSource {
    SequenceSource::from_records(
        records
            .into_iter()
            .enumerate()
            .filter(|(i, _)| indices.contains(i))
            .map(|(_, r)| r),
    )
}
