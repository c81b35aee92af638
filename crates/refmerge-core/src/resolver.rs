//! Effective cell assignment for incoming references.
//!
//! Interior references always belong to the cell being loaded. Exterior
//! references belong to the grid cell their position falls into, unless an
//! override layer declares them moved, in which case the declared target wins.

use crate::decoder::DecodedRef;
use crate::diagnostics::DiagnosticsSink;
use crate::types::{Container, LayerKind};
use tracing::debug;

/// Where a reference ends up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Effective cell id. Also the identity cache scope of the reference.
    pub cell: String,
    /// Cell the reference was moved from, empty when not moved. A move whose
    /// target is the enclosing cell also leaves it empty.
    pub original_cell: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Place(Placement),
    /// The reference cannot be merged; a diagnostic has been emitted.
    Skip,
}

/// Resolve the cell of `decoded` loaded under `container`.
pub fn resolve(
    container: &Container,
    decoded: &DecodedRef,
    layer: LayerKind,
    cell_size: f32,
    sink: &mut dyn DiagnosticsSink,
) -> Resolution {
    if !container.is_exterior() {
        if decoded.moved.is_some() {
            debug!(
                cell = %container.id,
                ref_num = %decoded.cell_ref.ref_num,
                "ignoring move declaration inside interior cell"
            );
        }
        return Resolution::Place(Placement {
            cell: container.id.clone(),
            original_cell: String::new(),
        });
    }

    let derived = decoded.cell_ref.grid_index(cell_size);

    let moved = match (layer, decoded.moved) {
        (LayerKind::Override, Some(moved)) => moved,
        _ => {
            return Resolution::Place(Placement {
                cell: derived.cell_id(),
                original_cell: String::new(),
            })
        }
    };

    if decoded.deleted {
        sink.add(
            &container.id,
            format!(
                "Moved reference {} is in DELE state",
                decoded.cell_ref.display_name()
            ),
        );
        return Resolution::Skip;
    }

    if moved.ref_num != decoded.cell_ref.ref_num {
        sink.add(
            &container.id,
            format!(
                "Move declaration of reference {} names reference {}",
                decoded.cell_ref.display_name(),
                moved.ref_num
            ),
        );
    }

    if derived != moved.target {
        sink.add(
            &container.id,
            format!(
                "The position of moved reference {} does not match the target cell (position {}, target {})",
                decoded.cell_ref.display_name(),
                derived,
                moved.target
            ),
        );
    }

    let cell = moved.target.cell_id();
    let original_cell = if cell == container.id {
        String::new()
    } else {
        container.id.clone()
    };

    Resolution::Place(Placement {
        cell,
        original_cell,
    })
}
