//! Behaviour of the `Generator` facade through its two capability traits.

use std::collections::HashSet;

use fixtura_core::{
    DataGenerator, FixtureError, FixtureErrorCode, Generator, GeneratorBuilder, GraphGenerator,
    GraphKind, RandomSource, UnionFind, WeightRange,
};
use rand::{SeedableRng, rngs::StdRng};
use rstest::{fixture, rstest};

#[fixture]
fn generator() -> Generator {
    GeneratorBuilder::new()
        .with_seed(0x5EED)
        .build()
        .expect("default configuration is valid")
}

#[rstest]
fn int_in_range_stays_in_bounds(mut generator: Generator) {
    for _ in 0..500 {
        let value = generator.int_in_range(10, 20).expect("valid range");
        assert!((10..20).contains(&value));
    }
}

#[rstest]
#[case(-10, -3)]
#[case(-5, 5)]
#[case(0, 4)]
#[case(i64::MIN, i64::MIN + 2)]
fn signed_int_in_range_covers_each_partition(
    mut generator: Generator,
    #[case] min: i64,
    #[case] max: i64,
) {
    let mut seen = HashSet::new();
    for _ in 0..400 {
        let value = generator.signed_int_in_range(min, max).expect("valid range");
        assert!((min..max).contains(&value), "{value} outside [{min}, {max})");
        seen.insert(value);
    }
    assert!(seen.contains(&min), "lower bound never drawn");
}

#[rstest]
fn unsigned_path_rejects_negative_bounds(mut generator: Generator) {
    assert_eq!(
        generator.int_in_range(-1, 4),
        Err(FixtureError::InvalidRange { min: -1, max: 4 })
    );
}

#[rstest]
fn unique_ints_are_distinct(mut generator: Generator) {
    let values = generator.unique_ints(100, 200, 60).expect("fits");
    let distinct: HashSet<_> = values.iter().copied().collect();
    assert_eq!(distinct.len(), 60);
    assert!(values.iter().all(|v| (100..200).contains(v)));
}

#[rstest]
fn unique_ints_rejects_oversized_requests(mut generator: Generator) {
    let err = generator.unique_ints(0, 5, 6).expect_err("only five values exist");
    assert_eq!(
        err,
        FixtureError::RangeExhausted {
            requested: 6,
            available: 5,
        }
    );
}

#[rstest]
fn repeated_ints_allow_duplicates(mut generator: Generator) {
    let values = generator.repeated_ints(0, 2, 50).expect("valid range");
    assert_eq!(values.len(), 50);
    let distinct: HashSet<_> = values.into_iter().collect();
    assert!(distinct.len() <= 2);
}

#[rstest]
fn selections_come_from_the_input(mut generator: Generator) {
    let items = ["red", "green", "blue"];
    let one = generator.pick_one(&items).expect("non-empty");
    assert!(items.contains(&one));
    let many = generator.pick_many(25, &items).expect("non-empty");
    assert_eq!(many.len(), 25);
    assert!(many.iter().all(|item| items.contains(item)));
}

#[rstest]
fn selections_from_empty_input_fail(mut generator: Generator) {
    let empty: [u8; 0] = [];
    assert_eq!(generator.pick_one(&empty), Err(FixtureError::EmptyCollection));
    assert_eq!(generator.pick_many(0, &empty), Err(FixtureError::EmptyCollection));
}

#[rstest]
fn strings_use_the_truncated_alphabet(mut generator: Generator) {
    let word = generator.random_string(12, 4).expect("valid shape");
    assert_eq!(word.len(), 12);
    assert!(word.bytes().all(|b| (b'a'..=b'd').contains(&b)));
}

#[rstest]
fn unique_strings_exhaust_small_domains(mut generator: Generator) {
    let words = generator.unique_strings(2, 3, 9).expect("nine strings exist");
    let distinct: HashSet<_> = words.iter().collect();
    assert_eq!(distinct.len(), 9);
    let err = generator.unique_strings(2, 3, 10).expect_err("only nine exist");
    assert_eq!(err.code(), FixtureErrorCode::RangeExhausted);
}

#[rstest]
fn graphs_through_the_trait_respect_shape(mut generator: Generator) {
    let directed = generator.directed_graph(6, 20).expect("fits");
    assert_eq!(directed.kind(), GraphKind::Directed);
    assert_eq!(directed.edge_count(), 20);

    let undirected = generator.undirected_graph(6, 10).expect("fits");
    assert_eq!(undirected.kind(), GraphKind::Undirected);
    assert_eq!(undirected.iter().count(), 20);

    let weights = WeightRange::signed(9).expect("positive");
    let weighted = generator
        .weighted_undirected_graph(6, 8, weights)
        .expect("fits");
    assert!(weighted.iter().all(|(_, edge)| edge
        .weight()
        .is_some_and(|w| (-9..9).contains(&w))));
}

#[rstest]
fn spanning_tree_joins_every_vertex(mut generator: Generator) {
    let tree = generator.random_forest(30, 29).expect("spanning tree");
    let mut sets = UnionFind::new(30);
    for (from, edge) in tree.iter() {
        sets.union(from, edge.to()).expect("vertices are in range");
    }
    assert_eq!(sets.component_count(), 1);
}

#[rstest]
fn acyclic_graph_rejects_more_than_a_tournament(mut generator: Generator) {
    let err = generator
        .directed_acyclic_graph(5, 11)
        .expect_err("a DAG on five vertices has at most ten edges");
    assert_eq!(err.code(), FixtureErrorCode::EdgeBound);
}

#[test]
fn equal_seeds_reproduce_every_fixture() {
    let run = |seed| {
        let mut generator = Generator::seeded(seed);
        (
            generator.unique_ints(0, 1_000, 20).expect("fits"),
            generator.random_string(8, 26).expect("valid shape"),
            generator.directed_acyclic_graph(9, 15).expect("fits"),
        )
    };
    assert_eq!(run(17), run(17));
    assert_ne!(run(17), run(18));
}

#[test]
fn injected_generators_drive_the_facade() {
    let source = RandomSource::new(StdRng::seed_from_u64(4));
    let config = GeneratorBuilder::new().config().expect("defaults are valid");
    let mut generator = Generator::from_source(source, config);
    let value = generator.signed_int_in_range(-3, 3).expect("valid range");
    assert!((-3..3).contains(&value));
}

#[test]
fn source_mut_shares_the_generator_stream() {
    let mut direct = Generator::seeded(21);
    let mut facade = Generator::seeded(21);
    let bound = std::num::NonZeroU64::new(50).expect("non-zero");
    let expected = direct.source_mut().below(bound);
    assert_eq!(facade.source_mut().below(bound), expected);
    assert_eq!(
        facade.int_in_range(0, 50).expect("valid range"),
        direct.int_in_range(0, 50).expect("valid range")
    );
}

#[test]
fn tight_budget_turns_slow_sampling_into_an_error() {
    let mut generator = GeneratorBuilder::new()
        .with_seed(1)
        .with_retry_multiplier(1)
        .with_min_attempts(1)
        .build()
        .expect("valid configuration");
    let err = generator
        .unique_ints(0, 1_000, 1_000)
        .expect_err("one draw per value cannot cover the range");
    assert_eq!(err.code(), FixtureErrorCode::RetryBudgetExhausted);
}
