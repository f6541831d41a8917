//! Property-based tests for the metric contracts
//!
//! Invariants that should hold for ALL inputs:
//! - Coincidence: compare(a, a) == 1
//! - Symmetry: compare(a, b) == compare(b, a)
//! - Range: 0 <= compare(a, b) <= 1
//! - Subadditivity of the true distances
//! - Transparency of chains and caches

use std::sync::Arc;

use fuzzymetrics::algorithms::*;
use fuzzymetrics::builders::StringMetricBuilder;
use fuzzymetrics::cache::{BoundedCache, UnboundedCache};
use fuzzymetrics::multiset::Multiset;
use fuzzymetrics::simplifiers::{self, Simplifier, ToLowerCase};
use fuzzymetrics::tokenizers::{self, QGram, Tokenizer, Whitespace};
use fuzzymetrics::{string_distances, string_metrics};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

/// Small alphabet so random inputs share characters and tokens.
fn text() -> impl Strategy<Value = String> {
    "[abcAB ]{0,12}"
}

fn char_metrics() -> Vec<(&'static str, Box<dyn Metric<str>>)> {
    vec![
        ("levenshtein", Box::new(Levenshtein::new())),
        ("damerau_levenshtein", Box::new(DamerauLevenshtein::new())),
        ("hamming", Box::new(Hamming::new())),
        ("jaro", Box::new(Jaro::new())),
        ("jaro_winkler", Box::new(JaroWinkler::new())),
        ("needleman_wunsch", Box::new(NeedlemanWunsch::new())),
        ("smith_waterman", Box::new(SmithWaterman::new())),
        ("smith_waterman_gotoh", Box::new(SmithWatermanGotoh::new())),
        ("longest_common_subsequence", Box::new(LongestCommonSubsequence)),
        ("longest_common_substring", Box::new(LongestCommonSubstring)),
        ("identity", Box::new(Identity)),
    ]
}

fn bag(s: &str) -> Multiset<String> {
    s.split_whitespace().map(str::to_owned).collect()
}

fn set(s: &str) -> ahash::AHashSet<String> {
    s.split_whitespace().map(str::to_owned).collect()
}

// ============================================================================
// Metric contracts
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_coincidence(a in text()) {
        for (name, metric) in char_metrics() {
            let score = metric.compare(&a, &a);
            prop_assert!((score - 1.0).abs() < EPSILON, "{name}: {score}");
        }
    }

    #[test]
    fn prop_symmetry_and_range(a in text(), b in text()) {
        for (name, metric) in char_metrics() {
            let ab = metric.compare(&a, &b);
            prop_assert!((0.0..=1.0 + EPSILON).contains(&ab), "{name}: {ab}");
            let ba = metric.compare(&b, &a);
            prop_assert!((ab - ba).abs() < EPSILON, "{name}: {ab} != {ba}");
        }
    }

    #[test]
    fn prop_empty_rules(a in "[abc]{1,12}") {
        for (name, metric) in char_metrics() {
            prop_assert_eq!(metric.compare("", ""), 1.0, "{}", name);
            prop_assert_eq!(metric.compare(&a, ""), 0.0, "{}", name);
            prop_assert_eq!(metric.compare("", &a), 0.0, "{}", name);
        }
    }

    #[test]
    fn prop_collection_metrics(a in text(), b in text()) {
        let (bag_a, bag_b) = (bag(&a), bag(&b));
        let multiset_metrics: [(&str, &dyn Metric<Multiset<String>>); 5] = [
            ("cosine", &CosineSimilarity),
            ("generalized_jaccard", &GeneralizedJaccard),
            ("simon_white", &SimonWhite),
            ("block", &BlockDistance),
            ("euclidean", &EuclideanDistance),
        ];
        for (name, metric) in multiset_metrics {
            let ab = metric.compare(&bag_a, &bag_b);
            prop_assert!((ab - metric.compare(&bag_b, &bag_a)).abs() < EPSILON, "{}", name);
            prop_assert!((0.0..=1.0 + EPSILON).contains(&ab), "{name}: {ab}");
            prop_assert!((metric.compare(&bag_a, &bag_a) - 1.0).abs() < EPSILON, "{}", name);
        }

        let (set_a, set_b) = (set(&a), set(&b));
        let set_metrics: [(&str, &dyn Metric<ahash::AHashSet<String>>); 3] =
            [("jaccard", &Jaccard), ("dice", &Dice), ("overlap", &OverlapCoefficient)];
        for (name, metric) in set_metrics {
            let ab = metric.compare(&set_a, &set_b);
            prop_assert!((ab - metric.compare(&set_b, &set_a)).abs() < EPSILON, "{}", name);
            prop_assert!((0.0..=1.0).contains(&ab), "{name}: {ab}");
        }
    }

    #[test]
    fn prop_generalized_jaccard_matches_jaccard_without_repeats(a in "[a-f]{0,6}", b in "[a-f]{0,6}") {
        let distinct = |s: &str| {
            let mut chars: Vec<char> = s.chars().collect();
            chars.sort_unstable();
            chars.dedup();
            chars.into_iter().map(String::from).collect::<Vec<_>>().join(" ")
        };
        let (a, b) = (distinct(&a), distinct(&b));
        let generalized = GeneralizedJaccard.compare(&bag(&a), &bag(&b));
        let plain = Jaccard.compare(&set(&a), &set(&b));
        prop_assert!((generalized - plain).abs() < EPSILON);
    }

    #[test]
    fn prop_level2_symmetry(a in text(), b in text()) {
        let level2 = Level2::default();
        let a: Vec<String> = a.split_whitespace().map(str::to_owned).collect();
        let b: Vec<String> = b.split_whitespace().map(str::to_owned).collect();
        prop_assert!((level2.compare(&a, &b) - level2.compare(&b, &a)).abs() < EPSILON);
    }
}

// ============================================================================
// Distances
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_subadditivity(a in text(), b in text(), c in text()) {
        let distances: [(&str, &dyn Distance<str>); 3] = [
            ("levenshtein", &Levenshtein::new()),
            ("hamming", &Hamming),
            ("longest_common_subsequence", &LongestCommonSubsequence),
        ];
        for (name, distance) in distances {
            let ac = distance.distance(&a, &c);
            let via_b = distance.distance(&a, &b) + distance.distance(&b, &c);
            prop_assert!(ac <= via_b + EPSILON, "{name}: {ac} > {via_b}");
        }

        let (bag_a, bag_b, bag_c) = (bag(&a), bag(&b), bag(&c));
        let token_distances: [(&str, &dyn Distance<Multiset<String>>); 2] =
            [("block", &BlockDistance), ("euclidean", &EuclideanDistance)];
        for (name, distance) in token_distances {
            let ac = distance.distance(&bag_a, &bag_c);
            let via_b = distance.distance(&bag_a, &bag_b) + distance.distance(&bag_b, &bag_c);
            prop_assert!(ac <= via_b + EPSILON, "{name}: {ac} > {via_b}");
        }
    }

    #[test]
    fn prop_distance_zero_on_identical(a in text()) {
        let distance = string_distances::levenshtein();
        prop_assert_eq!(distance.distance(&a, &a).unwrap(), 0.0);
        let distance = string_distances::q_grams_distance();
        prop_assert_eq!(distance.distance(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn prop_unit_levenshtein_matches_weighted(a in text(), b in text()) {
        let unit = Levenshtein::new();
        let scaled = Levenshtein::with_costs(2.0, 2.0).unwrap();
        prop_assert!((scaled.distance(&a, &b) - 2.0 * unit.distance(&a, &b)).abs() < EPSILON);
        prop_assert!((scaled.compare(&a, &b) - unit.compare(&a, &b)).abs() < EPSILON);
    }
}

// ============================================================================
// Chains and caches
// ============================================================================

fn upper_first() -> Arc<dyn Simplifier> {
    Arc::new(|s: &str| {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    })
}

fn reverse() -> Arc<dyn Simplifier> {
    Arc::new(|s: &str| s.chars().rev().collect())
}

proptest! {
    #[test]
    fn prop_simplifier_chains_flatten(a in text()) {
        let (x, y, z) = (upper_first(), reverse(), Arc::new(ToLowerCase) as Arc<dyn Simplifier>);
        let nested = simplifiers::chain([simplifiers::chain([x.clone(), y.clone()]), z.clone()]);
        let other = simplifiers::chain([x.clone(), simplifiers::chain([y.clone(), z.clone()])]);
        let flat = simplifiers::chain([x, y, z]);
        let expected = flat.simplify(&a).unwrap();
        prop_assert_eq!(nested.simplify(&a).unwrap(), expected.clone());
        prop_assert_eq!(other.simplify(&a).unwrap(), expected);
    }

    #[test]
    fn prop_tokenizer_chains_flatten(a in text()) {
        let ws: Arc<dyn Tokenizer> = Arc::new(Whitespace);
        let bigrams: Arc<dyn Tokenizer> = Arc::new(QGram::bigrams());
        let unigrams: Arc<dyn Tokenizer> = Arc::new(QGram::new(1).unwrap());

        let nested = tokenizers::chain([
            tokenizers::chain([ws.clone(), bigrams.clone()]).unwrap(),
            unigrams.clone(),
        ])
        .unwrap();
        let flat = tokenizers::chain([ws, bigrams, unigrams]).unwrap();
        prop_assert_eq!(nested.tokenize_to_list(&a).unwrap(), flat.tokenize_to_list(&a).unwrap());
        prop_assert_eq!(
            nested.tokenize_to_multiset(&a).unwrap(),
            flat.tokenize_to_multiset(&a).unwrap()
        );
    }

    #[test]
    fn prop_caches_are_transparent(pairs in prop::collection::vec((text(), text()), 1..8)) {
        let plain = string_metrics::cosine_similarity();
        let cached = StringMetricBuilder::with_multiset(CosineSimilarity)
            .simplify(Arc::new(ToLowerCase))
            .cache_strings(Arc::new(BoundedCache::<String>::new(4)))
            .tokenize(Arc::new(Whitespace))
            .cache_tokens(Arc::new(UnboundedCache::<Multiset<String>>::new()))
            .build();
        for (a, b) in &pairs {
            let expected = plain.compare(&a.to_lowercase(), &b.to_lowercase()).unwrap();
            // Twice, so the second round is served from the caches
            for _ in 0..2 {
                let got = cached.compare(a, b).unwrap();
                prop_assert!((got - expected).abs() < EPSILON, "{got} != {expected}");
            }
        }
    }
}
