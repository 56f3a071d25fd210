use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use log::debug;

use geneanalyzer_core::io::{select_records, DEFAULT_MAX_ATTEMPTS};
use geneanalyzer_core::seq::SeqRecord;
use geneanalyzer_core::{BioError, BioResult, SequenceSource};

/// Non-interactive selection: one answer, one attempt.
pub fn select_with_answer(records: Vec<SeqRecord>, answer: &str) -> BioResult<SequenceSource> {
    select_records(records, 1, |_| Ok(answer.to_string()))
}

/// List the records on stderr and read answers from stdin.
pub fn select_interactively(records: Vec<SeqRecord>) -> BioResult<SequenceSource> {
    let mut stderr = io::stderr().lock();
    for (i, record) in records.iter().enumerate() {
        writeln!(stderr, "{:>4}. {} (length {})", i + 1, record.header(), record.len())?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    select_records(records, DEFAULT_MAX_ATTEMPTS, |attempt| {
        if attempt > 1 {
            writeln!(
                stderr,
                "{}",
                "No matching records found. Please select a valid record.".red()
            )?;
        }
        write!(
            stderr,
            "Which sequence would you like to analyze? (number, header text, or \"all\")\n>>> "
        )?;
        stderr.flush()?;
        read_answer(&mut input)
    })
}

fn read_answer<R: BufRead>(input: &mut R) -> BioResult<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(BioError::SequenceSelection {
            msg: "input closed before a record was selected",
        });
    }
    debug!("selection answer {:?}", line.trim());
    Ok(line)
}
