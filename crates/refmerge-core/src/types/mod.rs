//! Data model: reference numbers, containers, layers, references and records.

pub mod cell_ref;
pub mod container;
pub mod layer;
pub mod record;
pub mod ref_num;

pub use cell_ref::CellRef;
pub use container::{Container, GridIndex, DEFAULT_CELL_SIZE};
pub use layer::LayerKind;
pub use record::{Record, RecordId, RecordState};
pub use ref_num::RefNum;
