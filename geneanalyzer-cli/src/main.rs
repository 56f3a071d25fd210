mod prompt;

use std::fmt;
use std::io::stdout;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use crossterm::style::{force_color_output, Stylize};
use log::{debug, info};

use geneanalyzer_core::io::{read_fasta_records_from_path, write_text, write_to_path};
use geneanalyzer_core::{process, BioResult, Mode, SequenceSource};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SeqType {
    #[value(name = "DNA")]
    Dna,
    #[value(name = "RNA")]
    Rna,
    #[value(name = "Protein")]
    Protein,
}

impl fmt::Display for SeqType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeqType::Dna => "DNA",
            SeqType::Rna => "RNA",
            SeqType::Protein => "Protein",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModeArg {
    #[value(name = "basic")]
    Basic,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Basic => Mode::Basic,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "geneanalyzer",
    version,
    about = "Analyze DNA, RNA and protein sequences",
    long_about = None
)]
struct Cli {
    /// Sequence to analyze, or a FASTA path when --file is given
    sequence: String,

    /// Treat SEQUENCE as a path to a .fna/.fasta/.fa file
    #[arg(short, long)]
    file: bool,

    /// Declared sequence type
    #[arg(short = 't', long = "type", ignore_case = true)]
    seq_type: SeqType,

    /// Analysis mode
    #[arg(short, long, default_value = "basic")]
    mode: ModeArg,

    /// Analysis to run (must belong to the chosen mode)
    #[arg(short, long)]
    analysis: String,

    /// Write results here instead of stdout (.csv selects CSV)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    out: Option<PathBuf>,

    /// Record selection for file input ("all", a record number, or header
    /// text); prompts when omitted
    #[arg(short, long)]
    select: Option<String>,

    /// Disable color
    #[arg(short = 'C', long = "no-color")]
    no_color: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    if cli.no_color {
        force_color_output(false);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("Error: {err}").red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> BioResult<()> {
    let mode = Mode::from(cli.mode);
    let method = mode.validate(&cli.analysis)?;
    debug!("mode {mode}, method {method}, type {}", cli.seq_type);

    let source = if cli.file {
        load_file(cli)?
    } else {
        SequenceSource::single(cli.sequence.as_bytes())
    };

    let results = process(&source, &cli.seq_type.to_string(), &cli.analysis)?;

    match &cli.out {
        Some(path) => {
            write_to_path(path, &results)?;
            println!(
                "{}",
                format!("Results written to {}", path.display()).green()
            );
        }
        None => write_text(stdout().lock(), &results)?,
    }
    Ok(())
}

fn load_file(cli: &Cli) -> BioResult<SequenceSource> {
    eprintln!("{}", "Opening and parsing file...".yellow().bold());
    let records = read_fasta_records_from_path(&cli.sequence)?;
    match &cli.select {
        Some(answer) => prompt::select_with_answer(records, answer),
        None => prompt::select_interactively(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_full_argument_set() {
        let cli = Cli::try_parse_from([
            "geneanalyzer",
            "genes.fasta",
            "-f",
            "-t",
            "dna",
            "-a",
            "orf",
            "-o",
            "out.csv",
            "-s",
            "all",
        ])
        .unwrap();
        assert!(cli.file);
        assert!(matches!(cli.seq_type, SeqType::Dna));
        assert!(matches!(cli.mode, ModeArg::Basic));
        assert_eq!(cli.analysis, "orf");
        assert_eq!(cli.out, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.select.as_deref(), Some("all"));
    }

    #[test]
    fn type_is_required() {
        assert!(Cli::try_parse_from(["geneanalyzer", "ATGC", "-a", "gc_percent"]).is_err());
    }

    #[test]
    fn unknown_type_rejected_by_parser() {
        assert!(
            Cli::try_parse_from(["geneanalyzer", "ATGC", "-t", "peptide", "-a", "gc_percent"])
                .is_err()
        );
    }

    #[test]
    fn seq_type_display_matches_core_names() {
        for (arg, kind) in [
            (SeqType::Dna, geneanalyzer_core::SeqKind::Dna),
            (SeqType::Rna, geneanalyzer_core::SeqKind::Rna),
            (SeqType::Protein, geneanalyzer_core::SeqKind::Protein),
        ] {
            assert_eq!(arg.to_string().parse::<geneanalyzer_core::SeqKind>().unwrap(), kind);
        }
    }
}
