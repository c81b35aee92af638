//! Output of a finished merge.

use refmerge_core::{CellRef, LoadReport, Messages, Record, RecordState};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
pub struct MergeOutput<'a> {
    pub report: LoadReport,
    pub records: &'a [Record<CellRef>],
    pub diagnostics: &'a Messages,
}

pub fn json(out: &mut impl Write, output: &MergeOutput<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, output)?;
    writeln!(out)
}

/// One line per record, then diagnostics grouped after the records.
pub fn text(out: &mut impl Write, output: &MergeOutput<'_>, show_deleted: bool) -> io::Result<()> {
    for record in output.records {
        if record.state == RecordState::Deleted && !show_deleted {
            continue;
        }
        let Some(r) = record.last_written() else {
            continue;
        };
        write!(
            out,
            "{:<10} {:<14} {:<8} {:<24} {}",
            r.ref_id,
            record.state.as_str(),
            r.ref_num.to_string(),
            r.id,
            r.cell
        )?;
        if r.is_moved() {
            write!(out, " (from {})", r.original_cell)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", output.report)?;

    if !output.diagnostics.is_empty() {
        writeln!(out, "{} diagnostics:", output.diagnostics.len())?;
        for message in output.diagnostics.iter() {
            writeln!(out, "  [{}] {}", message.container, message.text)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use refmerge_core::DiagnosticsSink;

    fn record(ref_id: &str, state: RecordState) -> Record<CellRef> {
        let mut r = CellRef::new((0, 5), "crate_01", [0.0; 3]);
        r.ref_id = ref_id.into();
        r.cell = "#0 0".into();
        Record {
            base: Some(r),
            modified: None,
            state,
        }
    }

    #[test]
    fn test_text_hides_tombstones_by_default() {
        let records = vec![
            record("ref#0", RecordState::BaseOnly),
            record("ref#1", RecordState::Deleted),
        ];
        let mut messages = Messages::new();
        messages.add(
            "Vivec, Arena",
            "Attempt to delete a non-existing reference 9:9 (ghost_01)".into(),
        );
        let output = MergeOutput {
            report: LoadReport::default(),
            records: &records,
            diagnostics: &messages,
        };

        let mut buf = Vec::new();
        text(&mut buf, &output, false).unwrap();
        let printed = String::from_utf8(buf).unwrap();

        assert!(printed.contains("ref#0"));
        assert!(!printed.contains("ref#1"));
        assert!(printed.contains("[Vivec, Arena]"));

        let mut buf = Vec::new();
        text(&mut buf, &output, true).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("ref#1"));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let records = vec![record("ref#0", RecordState::Modified)];
        let messages = Messages::new();
        let output = MergeOutput {
            report: LoadReport::default(),
            records: &records,
            diagnostics: &messages,
        };

        let mut buf = Vec::new();
        json(&mut buf, &output).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["records"][0]["state"], "modified");
    }
}
