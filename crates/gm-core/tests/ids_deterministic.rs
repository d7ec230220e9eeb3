use std::collections::BTreeSet;

use gm_core::{IdGenerator, RngHandle, VertexId, GENERATED_ID_LEN};
use rand::RngCore;

#[test]
fn rng_emits_reproducible_sequence() {
    let mut rng_a = RngHandle::from_seed(1234);
    let mut rng_b = RngHandle::from_seed(1234);

    let seq_a: Vec<u64> = (0..100).map(|_| rng_a.next_u64()).collect();
    let seq_b: Vec<u64> = (0..100).map(|_| rng_b.next_u64()).collect();

    assert_eq!(seq_a, seq_b);
}

#[test]
fn seeded_generators_replay_identifiers() {
    let mut gen_a = IdGenerator::from_seed(7);
    let mut gen_b = IdGenerator::from_seed(7);
    let ids_a: Vec<VertexId> = (0..32).map(|_| gen_a.next_id()).collect();
    let ids_b: Vec<VertexId> = (0..32).map(|_| gen_b.next_id()).collect();
    assert_eq!(ids_a, ids_b);
}

#[test]
fn identifiers_are_alphanumeric_and_fixed_length() {
    let mut generator = IdGenerator::from_entropy();
    let ids: BTreeSet<VertexId> = (0..64).map(|_| generator.next_id()).collect();
    assert!(ids.len() > 60);
    for id in &ids {
        assert_eq!(id.as_str().len(), GENERATED_ID_LEN);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
