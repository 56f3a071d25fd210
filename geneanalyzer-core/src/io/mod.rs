pub mod fasta;
pub mod report;
pub mod select;

pub use fasta::{read_fasta_records_from_bytes, read_fasta_records_from_path};
pub use report::{render_text, write_csv, write_text, write_to_path, ReportFormat};
pub use select::{select_records, Selection, DEFAULT_MAX_ATTEMPTS};
