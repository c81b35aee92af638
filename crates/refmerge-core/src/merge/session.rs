use super::report::{LoadReport, Outcome};
use crate::config::MergeConfig;
use crate::decoder::{DecodedRef, RefReader};
use crate::diagnostics::DiagnosticsSink;
use crate::error::{RefMergeError, Result};
use crate::identity::{IdentityCache, RefIdGenerator};
use crate::layer_file::LayerFile;
use crate::resolver::{self, Resolution};
use crate::store::RecordStore;
use crate::types::{CellRef, Container, LayerKind, Record, RecordState};
use tracing::{debug, info};

/// State shared by every load of one merge session.
///
/// The identity cache and id counter must outlive individual loads: every
/// layer and every cell of a load order goes through the same session.
#[derive(Debug, Default)]
pub struct MergeSession {
    config: MergeConfig,
    cache: IdentityCache,
    ids: RefIdGenerator,
}

impl MergeSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with `config`, rejecting values that fail
    /// [`MergeConfig::validate`].
    pub fn with_config(config: MergeConfig) -> Result<Self> {
        config.validate()?;
        let ids = RefIdGenerator::with_prefix(config.id_prefix.clone());
        Ok(Self {
            config,
            cache: IdentityCache::new(),
            ids,
        })
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    pub fn cache(&self) -> &IdentityCache {
        &self.cache
    }

    pub fn ids(&self) -> &RefIdGenerator {
        &self.ids
    }

    /// Merge every reference of `reader` loaded under `container`.
    ///
    /// References are processed in stream order. A reader error aborts the
    /// load; changes made by earlier references stay in place.
    pub fn load<S, R>(
        &mut self,
        store: &mut S,
        mut reader: R,
        container: &Container,
        layer: LayerKind,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<LoadReport>
    where
        S: RecordStore<CellRef> + ?Sized,
        R: RefReader,
    {
        let mut report = LoadReport::default();

        while let Some(decoded) = reader.next_ref()? {
            let outcome = self.merge_ref(store, decoded, container, layer, sink)?;
            report.record(outcome);
        }

        info!(cell = %container.id, %layer, "Loaded references: {}", report);
        Ok(report)
    }

    /// Merge every cell section of a layer file.
    pub fn load_layer<S>(
        &mut self,
        store: &mut S,
        layer_file: &LayerFile,
        layer: LayerKind,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<LoadReport>
    where
        S: RecordStore<CellRef> + ?Sized,
    {
        let mut report = LoadReport::default();
        for section in &layer_file.cells {
            let container = section.container()?;
            report.absorb(self.load(store, section.reader(), &container, layer, sink)?);
        }
        info!(layer = %layer_file.name, kind = %layer, "Merged layer: {}", report);
        Ok(report)
    }

    fn merge_ref<S>(
        &mut self,
        store: &mut S,
        decoded: DecodedRef,
        container: &Container,
        layer: LayerKind,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<Outcome>
    where
        S: RecordStore<CellRef> + ?Sized,
    {
        let placement =
            match resolver::resolve(container, &decoded, layer, self.config.cell_size, sink) {
                Resolution::Place(placement) => placement,
                Resolution::Skip => return Ok(Outcome::Skipped),
            };

        let DecodedRef {
            mut cell_ref,
            deleted,
            ..
        } = decoded;
        let ref_num = cell_ref.ref_num;
        let scope = placement.cell.clone();
        cell_ref.cell = placement.cell;
        cell_ref.original_cell = placement.original_cell;

        let existing = match self.cache.lookup(&scope, ref_num) {
            Some(ref_id) => Some(store.index_of(ref_id).ok_or_else(|| {
                RefMergeError::Store(format!(
                    "{} owns {} in {} but is missing from the store",
                    ref_id, ref_num, scope
                ))
            })?),
            None => None,
        };

        let outcome = match (existing, deleted) {
            (None, true) => {
                sink.add(
                    &container.id,
                    format!(
                        "Attempt to delete a non-existing reference {} ({})",
                        ref_num, cell_ref.id
                    ),
                );
                Outcome::Skipped
            }
            (Some(index), true) => {
                let mut record = store.get(index)?.clone();
                match record.state {
                    RecordState::BaseOnly => {
                        store.remove_range(index, 1)?;
                        self.cache.remove(&scope, ref_num);
                        Outcome::Purged
                    }
                    RecordState::ModifiedOnly | RecordState::Modified | RecordState::Deleted => {
                        record.state = RecordState::Deleted;
                        store.set(index, record)?;
                        Outcome::Tombstoned
                    }
                }
            }
            (None, false) => {
                cell_ref.ref_id = self.ids.next_id();
                let ref_id = cell_ref.ref_id.clone();
                let record = match layer {
                    LayerKind::Foundational => Record::base_only(cell_ref),
                    LayerKind::Override => Record::modified_only(cell_ref),
                };
                store.append(record)?;
                self.cache.insert(&scope, ref_num, ref_id);
                Outcome::Appended
            }
            (Some(index), false) => {
                let mut record = store.get(index)?.clone();
                cell_ref.ref_id = record.id().to_string();
                match layer {
                    LayerKind::Foundational => {
                        record.base = Some(cell_ref);
                        record.state = match record.state {
                            RecordState::BaseOnly => RecordState::BaseOnly,
                            RecordState::ModifiedOnly | RecordState::Modified => {
                                RecordState::Modified
                            }
                            RecordState::Deleted => RecordState::Deleted,
                        };
                    }
                    LayerKind::Override => {
                        record.modified = Some(cell_ref);
                        record.state = RecordState::Modified;
                    }
                }
                store.set(index, record)?;
                Outcome::Merged
            }
        };

        debug!(cell = %scope, %ref_num, ?outcome, "merged reference");
        Ok(outcome)
    }
}
