// Unit tests for Jaccard scoring and all-pairs aggregation.
//
// Tests the reduce-side pure functions: similarity properties (symmetry,
// range, degenerate cases), pair enumeration, and the exact output line format.

use std::collections::HashSet;

use docsim::corpus::Document;
use docsim::similarity::aggregator::{pair_count, pairs, parse_documents};
use docsim::similarity::jaccard::jaccard;
use docsim::similarity::{Jaccard, SimilarityAggregator};

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn doc(id: &str, words: &[&str]) -> Document {
    Document::new(id, set(words)).unwrap()
}

// ============================================================
// Jaccard properties
// ============================================================

#[test]
fn similarity_is_symmetric() {
    let cases = [
        (set(&["a", "b", "c"]), set(&["b", "c", "d", "e"])),
        (set(&["x"]), set(&[])),
        (set(&["p", "q"]), set(&["p", "q"])),
        (set(&["one", "two", "three"]), set(&["four"])),
    ];
    for (a, b) in &cases {
        assert_eq!(Jaccard::between(a, b), Jaccard::between(b, a));
        assert_eq!(jaccard(a, b), jaccard(b, a));
    }
}

#[test]
fn similarity_stays_in_unit_range() {
    let sets = [
        set(&[]),
        set(&["a"]),
        set(&["a", "b"]),
        set(&["b", "c", "d"]),
        set(&["a", "b", "c", "d", "e", "f"]),
    ];
    for a in &sets {
        for b in &sets {
            let s = jaccard(a, b);
            assert!((0.0..=1.0).contains(&s), "out of range: {s}");
        }
    }
}

#[test]
fn both_empty_is_zero_not_one() {
    assert_eq!(jaccard(&set(&[]), &set(&[])), 0.0);
}

#[test]
fn identical_non_empty_is_one() {
    let a = set(&["hello", "world"]);
    assert_eq!(jaccard(&a, &a.clone()), 1.0);
}

#[test]
fn union_counts_shared_words_once() {
    let score = Jaccard::between(&set(&["a", "b", "c"]), &set(&["b", "c", "d"]));
    assert_eq!(score.intersection, 2);
    assert_eq!(score.union, 4);
}

// ============================================================
// Output line format
// ============================================================

#[test]
fn line_format_has_two_decimals() {
    let docs = vec![doc("doc1", &["the", "cat", "sat"]), doc("doc2", &["the", "dog", "sat"])];
    let lines: Vec<String> = pairs(&docs).map(|p| p.to_string()).collect();
    assert_eq!(lines, vec!["doc1, doc2 Similarity: 0.50"]);
}

#[test]
fn line_format_for_perfect_match() {
    let docs = vec![doc("a", &["x", "y"]), doc("b", &["y", "x"])];
    let pair = pairs(&docs).next().unwrap();
    assert_eq!(pair.similarity(), 1.0);
    assert_eq!(pair.to_string(), "a, b Similarity: 1.00");
}

#[test]
fn line_format_rounds_half_up() {
    // 1 shared word out of 8 distinct = 0.125
    let docs = vec![
        doc("a", &["w1", "w2", "w3", "w4", "w5"]),
        doc("b", &["w1", "w6", "w7", "w8"]),
    ];
    let pair = pairs(&docs).next().unwrap();
    assert_eq!(pair.score, Jaccard { intersection: 1, union: 8 });
    assert_eq!(pair.to_string(), "a, b Similarity: 0.13");
}

#[test]
fn line_format_for_two_thirds() {
    let docs = vec![doc("a", &["x", "y"]), doc("b", &["x", "y", "z"])];
    assert_eq!(pairs(&docs).next().unwrap().to_string(), "a, b Similarity: 0.67");
}

// ============================================================
// Pair enumeration
// ============================================================

#[test]
fn emits_n_choose_two_pairs() {
    for n in 0..12 {
        let docs: Vec<Document> = (0..n).map(|i| doc(&format!("d{i}"), &["w"])).collect();
        assert_eq!(pairs(&docs).count(), pair_count(n), "n = {n}");
    }
}

#[test]
fn every_id_pair_appears_exactly_once() {
    let docs: Vec<Document> = (0..6).map(|i| doc(&format!("d{i}"), &["w"])).collect();
    let mut seen = HashSet::new();
    for p in pairs(&docs) {
        assert_ne!(p.left, p.right, "a document is never paired with itself");
        let key = if p.left < p.right { (p.left, p.right) } else { (p.right, p.left) };
        assert!(seen.insert(key), "duplicate pair {key:?}");
    }
    assert_eq!(seen.len(), 15);
}

#[test]
fn pairs_follow_arrival_order_not_id_order() {
    let docs = vec![doc("zeta", &["a"]), doc("alpha", &["a"]), doc("mid", &["a"])];
    let order: Vec<(&str, &str)> = pairs(&docs).map(|p| (p.left, p.right)).collect();
    assert_eq!(
        order,
        vec![("zeta", "alpha"), ("zeta", "mid"), ("alpha", "mid")]
    );
}

#[test]
fn results_are_not_sorted_by_similarity() {
    let lines = SimilarityAggregator.aggregate(&["a\tx", "b\ty", "c\tx"]);
    assert_eq!(
        lines,
        vec![
            "a, b Similarity: 0.00",
            "a, c Similarity: 1.00",
            "b, c Similarity: 0.00",
        ]
    );
}

#[test]
fn reordering_input_keeps_the_same_pair_set() {
    let forward = SimilarityAggregator.aggregate(&["a\tx,y", "b\ty,z", "c\tz"]);
    let backward = SimilarityAggregator.aggregate(&["c\tz", "b\ty,z", "a\tx,y"]);

    let normalize = |lines: &[String]| -> HashSet<(String, String, String)> {
        lines
            .iter()
            .map(|l| {
                let (ids, score) = l.split_once(" Similarity: ").unwrap();
                let (x, y) = ids.split_once(", ").unwrap();
                let (x, y) = if x < y { (x, y) } else { (y, x) };
                (x.to_string(), y.to_string(), score.to_string())
            })
            .collect()
    };
    assert_eq!(normalize(&forward[..]), normalize(&backward[..]));
}

#[test]
fn same_input_gives_byte_identical_output() {
    let values = ["d1\ta,b,c", "d2\tb,c", "d3\t", "d4\tc,a"];
    assert_eq!(
        SimilarityAggregator.aggregate(&values),
        SimilarityAggregator.aggregate(&values)
    );
}

#[test]
fn undecodable_values_do_not_become_documents() {
    let docs = parse_documents(&["ok\tword", "garbage"]);
    assert_eq!(docs.len(), 1);
}
