use rustc_hash::FxHashSet;

use idfill::{Algorithm, IdGenerator, generate};

#[test]
fn every_algorithm_returns_non_empty() {
    for algorithm in [Algorithm::RandomUuid, Algorithm::Fallback] {
        let id = generate(algorithm).unwrap();
        assert!(!id.is_empty(), "{algorithm} produced an empty identifier");
    }
}

#[test]
fn random_uuid_shape_holds_across_many_draws() {
    let mut generator = IdGenerator::new();
    for _ in 0..1_000 {
        let id = generator.generate(Algorithm::RandomUuid).unwrap();
        let parsed = uuid::Uuid::parse_str(&id).expect("canonical hyphenated form");
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
        assert_eq!(id, id.to_lowercase());
    }
}

#[test]
fn random_uuid_collision_sweep() {
    let mut generator = IdGenerator::new();
    let mut seen = FxHashSet::default();
    for _ in 0..100_000 {
        let id = generator.generate(Algorithm::RandomUuid).unwrap();
        assert!(seen.insert(id), "collision within 100k draws");
    }
}

#[test]
fn fallback_identifiers_are_distinct_and_url_safe() {
    let mut generator = IdGenerator::new();
    let mut seen = FxHashSet::default();
    for _ in 0..10_000 {
        let id = generator.generate(Algorithm::Fallback).unwrap();
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(seen.insert(id), "fallback collision within 10k draws");
    }
}

#[test]
fn fallback_timestamps_do_not_decrease() {
    // Leading hex field is the microsecond clock reading; across a short run
    // it must be nondecreasing when decoded at a fixed width.
    let mut generator = IdGenerator::new();
    let mut previous = 0u64;
    for _ in 0..100 {
        let id = generator.generate(Algorithm::Fallback).unwrap();
        // Strip the fixed-width sequence and salt suffix (4 + 4 hex digits).
        let micros_hex = &id[..id.len() - 8];
        let micros = u64::from_str_radix(micros_hex, 16).unwrap();
        assert!(micros >= previous);
        previous = micros;
    }
}
