//! Property tests for identity stability, state monotonicity and reloads.

use proptest::prelude::*;
use refmerge_core::{
    CellRef, Container, DecodedRef, GridIndex, LayerKind, ListReader, MergeSession, Messages,
    Record, RecordState, RecordStore, RefCollection, RefNum,
};
use std::collections::BTreeMap;

/// Unique reference numbers with positions inside exterior cell `#0 0`.
fn base_layer() -> impl Strategy<Value = BTreeMap<u32, (f32, f32)>> {
    prop::collection::btree_map(0u32..40, (0f32..8000.0, 0f32..8000.0), 1..16)
}

fn refs(base: &BTreeMap<u32, (f32, f32)>, shift: f32) -> Vec<DecodedRef> {
    base.iter()
        .map(|(index, (x, y))| {
            DecodedRef::new(CellRef::new((0, *index), "static_01", [*x + shift, *y, 0.0]))
        })
        .collect()
}

fn cell() -> Container {
    Container::exterior(GridIndex::new(0, 0))
}

fn load(
    session: &mut MergeSession,
    store: &mut RefCollection,
    layer: LayerKind,
    refs: Vec<DecodedRef>,
) -> Messages {
    let mut messages = Messages::new();
    session
        .load(store, ListReader::new(refs), &cell(), layer, &mut messages)
        .unwrap();
    messages
}

fn snapshot(store: &RefCollection) -> Vec<Record<CellRef>> {
    store.records().to_vec()
}

proptest! {
    #[test]
    fn prop_ref_ids_stable_across_override_layers(
        base in base_layer(),
        overrides in prop::collection::vec(prop::collection::btree_set(0u32..40, 0..16), 1..4),
    ) {
        let mut session = MergeSession::new();
        let mut store = RefCollection::new();
        load(&mut session, &mut store, LayerKind::Foundational, refs(&base, 0.0));

        let scope = GridIndex::new(0, 0).cell_id();
        let original: BTreeMap<u32, String> = base
            .keys()
            .map(|i| (*i, session.cache().lookup(&scope, RefNum::new(0, *i)).unwrap().to_string()))
            .collect();

        for (layer_no, touched) in overrides.iter().enumerate() {
            let subset: BTreeMap<u32, (f32, f32)> = base
                .iter()
                .filter(|(i, _)| touched.contains(*i))
                .map(|(i, p)| (*i, *p))
                .collect();
            let messages = load(
                &mut session,
                &mut store,
                LayerKind::Override,
                refs(&subset, layer_no as f32 + 1.0),
            );
            prop_assert!(messages.is_empty());
        }

        for (index, id) in &original {
            prop_assert_eq!(
                session.cache().lookup(&scope, RefNum::new(0, *index)),
                Some(id.as_str())
            );
        }
        prop_assert_eq!(store.len(), base.len());
    }

    #[test]
    fn prop_foundational_reload_never_demotes(
        base in base_layer(),
        touched in prop::collection::btree_set(0u32..40, 0..16),
    ) {
        let mut session = MergeSession::new();
        let mut store = RefCollection::new();
        load(&mut session, &mut store, LayerKind::Foundational, refs(&base, 0.0));

        let subset: BTreeMap<u32, (f32, f32)> = base
            .iter()
            .filter(|(i, _)| touched.contains(*i))
            .map(|(i, p)| (*i, *p))
            .collect();
        load(&mut session, &mut store, LayerKind::Override, refs(&subset, 1.0));
        load(&mut session, &mut store, LayerKind::Foundational, refs(&base, 0.0));

        for record in store.iter() {
            let index = record.last_written().unwrap().ref_num.index;
            let expected = if subset.contains_key(&index) {
                RecordState::Modified
            } else {
                RecordState::BaseOnly
            };
            prop_assert_eq!(record.state, expected);
        }
    }

    #[test]
    fn prop_foundational_reload_is_idempotent(base in base_layer()) {
        let mut once_session = MergeSession::new();
        let mut once = RefCollection::new();
        load(&mut once_session, &mut once, LayerKind::Foundational, refs(&base, 0.0));

        let mut twice_session = MergeSession::new();
        let mut twice = RefCollection::new();
        load(&mut twice_session, &mut twice, LayerKind::Foundational, refs(&base, 0.0));
        load(&mut twice_session, &mut twice, LayerKind::Foundational, refs(&base, 0.0));

        prop_assert_eq!(snapshot(&once), snapshot(&twice));
        prop_assert_eq!(once_session.ids().issued(), twice_session.ids().issued());
    }

    #[test]
    fn prop_override_reload_over_base_is_idempotent(
        base in base_layer(),
        edits in prop::collection::btree_map(0u32..40, any::<bool>(), 0..16),
    ) {
        let edits: BTreeMap<u32, bool> = edits
            .into_iter()
            .filter(|(i, _)| base.contains_key(i))
            .collect();
        let stream: Vec<DecodedRef> = edits
            .iter()
            .map(|(i, deleted)| {
                let (x, y) = base[i];
                let decoded =
                    DecodedRef::new(CellRef::new((0, *i), "static_01", [x + 1.0, y, 0.0]));
                if *deleted { decoded.deleted() } else { decoded }
            })
            .collect();

        let mut once_session = MergeSession::new();
        let mut once = RefCollection::new();
        load(&mut once_session, &mut once, LayerKind::Foundational, refs(&base, 0.0));
        load(&mut once_session, &mut once, LayerKind::Override, stream.clone());

        let mut twice_session = MergeSession::new();
        let mut twice = RefCollection::new();
        load(&mut twice_session, &mut twice, LayerKind::Foundational, refs(&base, 0.0));
        load(&mut twice_session, &mut twice, LayerKind::Override, stream.clone());
        load(&mut twice_session, &mut twice, LayerKind::Override, stream);

        prop_assert_eq!(snapshot(&once), snapshot(&twice));
    }
}
