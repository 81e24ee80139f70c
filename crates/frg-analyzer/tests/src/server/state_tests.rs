use super::*;

#[test]
fn newer_request_cancels_older_one() {
    let generation = Arc::new(AtomicU64::new(0));
    let first = begin_request(&generation);
    assert!(!first());

    let second = begin_request(&generation);
    assert!(first());
    assert!(!second());
}

#[test]
fn counters_are_independent() {
    let definitions = Arc::new(AtomicU64::new(0));
    let references = Arc::new(AtomicU64::new(0));
    let definition = begin_request(&definitions);
    let _reference = begin_request(&references);
    assert!(!definition());
}
