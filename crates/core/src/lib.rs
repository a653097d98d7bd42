//! `billrecon-core` — bill reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded raw tables, returns a
//! rendered diff report. No CLI or file I/O dependencies.

pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod sources;
pub mod table;

pub use config::BatchEntry;
pub use diff::{DiffReport, DiffRow, COLUMN_HEADERS};
pub use engine::run;
pub use error::ReconError;
pub use model::{BillType, Document, MatchOutput, MatchPair};
pub use table::{RawCell, RawTable};
