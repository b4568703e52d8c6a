//! Contract conformance tests.
//!
//! Every medium-independent property is exercised against both shipped
//! backends through `&dyn RunStore`, so a new backend can reuse the same
//! checklist.

use proptest::prelude::*;
use runstore::prelude::*;
use serde_json::Value;
use std::collections::HashSet;
use tempfile::TempDir;

/// Run a check against both conformers.
///
/// The file store gets a fresh temp directory per invocation.
fn with_each_store(check: impl Fn(&dyn RunStore)) {
    let dir = TempDir::new().unwrap();
    check(&FileRunStore::new(dir.path()));
    check(&MemoryRunStore::new());
}

#[test]
fn save_then_get_roundtrips() {
    with_each_store(|store| {
        let ns = Namespace::new("myapp");
        let payload = json!({"main()": {"ct": 1, "wt": 120}});

        let id = store.save_run(&payload, &ns, None).unwrap();
        let lookup = store.get_run(&id, &ns).unwrap();

        assert!(lookup.is_found());
        assert_eq!(lookup.payload, Some(payload));
        assert!(lookup.description.contains("myapp"));
    });
}

#[test]
fn explicit_id_is_echoed_back() {
    with_each_store(|store| {
        let ns = Namespace::new("myapp");
        let id = store
            .save_run(&json!({}), &ns, Some(RunId::new("r1")))
            .unwrap();
        assert_eq!(id, RunId::new("r1"));
    });
}

#[test]
fn generated_ids_are_distinct() {
    with_each_store(|store| {
        let ns = Namespace::new("myapp");
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let id = store.save_run(&json!({}), &ns, None).unwrap();
            assert!(seen.insert(id), "generated run id collided");
        }
    });
}

#[test]
fn missing_run_is_a_not_found_outcome() {
    with_each_store(|store| {
        let lookup = store
            .get_run(&RunId::new("never-saved"), &Namespace::new("myapp"))
            .unwrap();

        assert!(!lookup.is_found());
        assert_eq!(lookup.payload, None);
        assert!(lookup.description.contains("never-saved"));
        assert!(lookup.description.contains("myapp"));
    });
}

#[test]
fn namespaces_isolate_runs() {
    with_each_store(|store| {
        let id = RunId::new("r1");
        store
            .save_run(&json!({"from": "A"}), &Namespace::new("A"), Some(id.clone()))
            .unwrap();
        store
            .save_run(&json!({"from": "B"}), &Namespace::new("B"), Some(id.clone()))
            .unwrap();

        let a = store.get_run(&id, &Namespace::new("A")).unwrap();
        let b = store.get_run(&id, &Namespace::new("B")).unwrap();
        assert_eq!(a.payload, Some(json!({"from": "A"})));
        assert_eq!(b.payload, Some(json!({"from": "B"})));
    });
}

#[test]
fn resave_overwrites_prior_payload() {
    with_each_store(|store| {
        let ns = Namespace::new("A");
        let id = RunId::new("r1");

        store
            .save_run(&json!({"version": 1}), &ns, Some(id.clone()))
            .unwrap();
        store
            .save_run(&json!({"version": 2}), &ns, Some(id.clone()))
            .unwrap();

        let lookup = store.get_run(&id, &ns).unwrap();
        assert_eq!(lookup.payload, Some(json!({"version": 2})));
    });
}

#[test]
fn stores_work_behind_a_box() {
    let dir = TempDir::new().unwrap();
    let store: Box<dyn RunStore> = Box::new(FileRunStore::new(dir.path()));

    let id = store
        .save_run(&json!({"boxed": true}), &Namespace::new("dyn"), None)
        .unwrap();
    assert!(store
        .get_run(&id, &Namespace::new("dyn"))
        .unwrap()
        .is_found());
}

/// Nested function-name -> measurement-record payloads, the shape produced
/// by the profiling instrumentation.
fn measurement_payload() -> impl Strategy<Value = Value> {
    prop::collection::hash_map(
        "[a-z_]{1,12}",
        (0u64..10_000, 0u64..1_000_000, 0u64..1_000_000),
        1..8,
    )
    .prop_map(|entries| {
        Value::Object(
            entries
                .into_iter()
                .map(|(func, (ct, wt, mu))| {
                    (
                        format!("{func}()"),
                        json!({"ct": ct, "wt": wt, "mu": mu}),
                    )
                })
                .collect(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip_preserves_arbitrary_measurements(payload in measurement_payload()) {
        let dir = TempDir::new().unwrap();
        let store = FileRunStore::new(dir.path());
        let ns = Namespace::new("prop");

        let id = store.save_run(&payload, &ns, None).unwrap();
        let lookup = store.get_run(&id, &ns).unwrap();
        prop_assert_eq!(lookup.payload, Some(payload));
    }
}
