//! Rendering batch results as plain text or CSV.

use crate::analysis::{Analysis, OrfReport};
use crate::batch::BatchResults;
use crate::error::BioResult;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Csv,
}

impl ReportFormat {
    /// `.csv` paths get CSV, everything else plain text.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ReportFormat::Csv,
            _ => ReportFormat::Text,
        }
    }
}

/// One line per result; ORF summaries expand to one indented line per ORF.
pub fn write_text<W: Write>(mut out: W, results: &BatchResults) -> BioResult<()> {
    for (name, result) in results.iter() {
        writeln!(out, "{name}: {result}")?;
        if let Analysis::Orfs(OrfReport::Found(summary)) = result {
            for (orf_name, orf) in summary.iter() {
                writeln!(out, "  {orf_name}: {orf}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

pub fn render_text(results: &BatchResults) -> BioResult<String> {
    let mut buf = Vec::new();
    write_text(&mut buf, results)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// `name,result` rows, or one `name,orf,sequence,start,end,length` row per ORF
/// when the batch holds ORF reports.
pub fn write_csv<W: Write>(out: W, results: &BatchResults) -> BioResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    let orf_layout = results
        .iter()
        .any(|(_, result)| matches!(result, Analysis::Orfs(_)));

    if orf_layout {
        wtr.write_record(["name", "orf", "sequence", "start", "end", "length"])?;
    } else {
        wtr.write_record(["name", "result"])?;
    }

    for (name, result) in results.iter() {
        match result {
            Analysis::Orfs(OrfReport::Found(summary)) => {
                for (orf_name, orf) in summary.iter() {
                    wtr.write_record([
                        name,
                        orf_name,
                        orf.sequence.to_string().as_str(),
                        orf.start.to_string().as_str(),
                        orf.end.to_string().as_str(),
                        orf.length.to_string().as_str(),
                    ])?;
                }
            }
            Analysis::Orfs(OrfReport::NoOrfs) => {
                wtr.write_record([name, "", "", "", "", ""])?;
            }
            other => {
                wtr.write_record([name, other.to_string().as_str()])?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Write `results` to `path`, choosing the format from its extension.
pub fn write_to_path(path: impl AsRef<Path>, results: &BatchResults) -> BioResult<()> {
    let path = path.as_ref();
    let format = ReportFormat::for_path(path);
    let out = BufWriter::new(File::create(path)?);
    match format {
        ReportFormat::Text => write_text(out, results)?,
        ReportFormat::Csv => write_csv(out, results)?,
    }
    info!("wrote {} result(s) to {}", results.len(), path.display());
    Ok(())
}
