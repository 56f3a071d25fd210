pub mod alphabets;
pub mod analysis;
pub mod batch;
pub mod codon;
pub mod error;
pub mod io;
pub mod seq;

pub use analysis::{analyze, Analysis, Method, Mode};
pub use batch::{process, BatchResults, SequenceSource};
pub use error::{BioError, BioResult};
pub use seq::{SeqKind, Sequence};
