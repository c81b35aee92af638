//! refmerge-core: layered merge of placed-object references.
//!
//! A merge session reconciles a foundational data layer with any number of
//! override layers into one record set:
//!
//! - **types**: reference numbers, cells, references, records and their states.
//! - **store**: the ordered record store contract and an in-memory implementation.
//! - **identity**: per-cell reference number cache and the ref id counter.
//! - **resolver**: effective cell assignment, including moved references.
//! - **merge**: the merge session and its state machine.
//! - **diagnostics**: non-fatal problems found while merging.
//! - **decoder** / **layer_file**: reference streams and JSON layer documents.

pub mod config;
pub mod decoder;
pub mod diagnostics;
pub mod error;
pub mod identity;
pub mod layer_file;
pub mod merge;
pub mod resolver;
pub mod store;
pub mod types;

pub use crate::config::MergeConfig;
pub use crate::decoder::{DecodedRef, JsonLinesReader, ListReader, MovedCellRef, RefReader};
pub use crate::diagnostics::{DiagnosticsSink, Message, Messages};
pub use crate::error::{RefMergeError, Result};
pub use crate::identity::{IdentityCache, RefIdGenerator};
pub use crate::layer_file::{CellSection, LayerFile};
pub use crate::merge::{LoadReport, MergeSession, Outcome};
pub use crate::store::{RecordCollection, RecordStore, RefCollection};
pub use crate::types::{
    CellRef, Container, GridIndex, LayerKind, Record, RecordId, RecordState, RefNum,
};
