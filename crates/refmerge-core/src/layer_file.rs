//! JSON layer documents.
//!
//! A layer file lists the cells it touches and, per cell, the references
//! in stream order:
//!
//! ```json
//! {
//!   "name": "Tribunal.esm",
//!   "cells": [
//!     { "exterior": { "x": 1, "y": 2 }, "refs": [ { "ref": { "ref_num": { "content_file": 0, "index": 5 }, "id": "crate_01" } } ] },
//!     { "id": "Vivec, Arena", "refs": [] }
//!   ]
//! }
//! ```

use crate::decoder::{DecodedRef, ListReader};
use crate::error::{RefMergeError, Result};
use crate::types::{Container, GridIndex};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LayerFile {
    pub name: String,
    #[serde(default)]
    pub cells: Vec<CellSection>,
}

/// References of one cell within a layer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CellSection {
    /// Interior cell id. Ignored for exteriors, whose id comes from the grid index.
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exterior: Option<GridIndex>,
    #[serde(default)]
    pub refs: Vec<DecodedRef>,
}

impl LayerFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut layer = Self::parse(&content)?;
        if layer.name.is_empty() {
            layer.name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        Ok(layer)
    }

    pub fn ref_count(&self) -> usize {
        self.cells.iter().map(|c| c.refs.len()).sum()
    }
}

impl CellSection {
    pub fn container(&self) -> Result<Container> {
        match self.exterior {
            Some(index) => Ok(Container::exterior(index)),
            None if self.id.is_empty() => Err(RefMergeError::Decode(
                "interior cell section without an id".into(),
            )),
            None => Ok(Container::interior(self.id.clone())),
        }
    }

    pub fn reader(&self) -> ListReader {
        ListReader::new(self.refs.iter().cloned())
    }
}
