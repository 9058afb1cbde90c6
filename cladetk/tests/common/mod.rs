#![allow(dead_code)]

use cladetk::structs::{CallMap, KitCollection};

pub const TEST_MATRIX: &str = "tests/data/test_matrix.csv";
pub const TEST_MATRIX_BAD_POSITION: &str = "tests/data/test_matrix_bad_position.csv";
pub const TEST_MATRIX_NO_TERMINATOR: &str = "tests/data/test_matrix_no_terminator.csv";
pub const TEST_MATRIX_WIDE_ROW: &str = "tests/data/test_matrix_wide_row.csv";
pub const TEST_VARIANT_LIST: &str = "tests/data/variant-list.txt";
pub const TEST_VARIANT_LIST_BAD: &str = "tests/data/variant-list-bad.txt";
pub const TEST_SAMPLE: &str = "tests/data/sample1";
pub const TEST_SAMPLE_BAD: &str = "tests/data/sample2";

pub fn calls(snps: &[(&str, &str)]) -> CallMap {
    snps.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// The clade tree is mut1, then mut2 / mut3 with mut31 below mut3.
/// One kit per clade, none ancestral.
pub fn test_tree() -> KitCollection {
    let mut collection = KitCollection::default();
    collection.add_person("mut1", calls(&[("mut1", "mut1")]));
    collection.add_person("mut2", calls(&[("mut1", "mut1"), ("mut2", "mut2")]));
    collection.add_person("mut3", calls(&[("mut1", "mut1"), ("mut3", "mut3")]));
    collection.add_person(
        "mut31",
        calls(&[("mut1", "mut1"), ("mut3", "mut3"), ("mut31", "mut31")]),
    );
    collection
}
