// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Conversion of raw report entries into normalized test cases

use tracing::debug;

use crate::model::{RawCase, RawSuite, TestCase};

/// Separator between the classname and name parts of a unique id
pub const UNIQUE_ID_SEPARATOR: char = '-';

/// Turns a raw classname or test name into the form used inside unique ids
///
/// Implementations must be deterministic, and their output must never
/// contain [`UNIQUE_ID_SEPARATOR`]; otherwise distinct classname/name pairs
/// can join into the same id. Any `Fn(&str) -> String` can be used as a
/// normalizer.
pub trait KeyNormalizer {
    /// Normalize one key component
    fn normalize_key(&self, raw: &str) -> String;
}

impl<F> KeyNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize_key(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Trims surrounding whitespace, replaces each internal run of whitespace
/// with a single `_` and replaces every `-` with `_`
///
/// Keys without whitespace or `-` pass through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultKeyNormalizer;

impl KeyNormalizer for DefaultKeyNormalizer {
    fn normalize_key(&self, raw: &str) -> String {
        raw.split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .replace(UNIQUE_ID_SEPARATOR, "_")
    }
}

/// Build the unique id `<classname>-<name>` from normalized components
#[must_use]
pub fn unique_id<N>(classname: &str, name: &str, normalizer: &N) -> String
where
    N: KeyNormalizer + ?Sized,
{
    let mut id = normalizer.normalize_key(classname);
    id.push(UNIQUE_ID_SEPARATOR);
    id.push_str(&normalizer.normalize_key(name));
    id
}

/// Normalize parsed suites with [`DefaultKeyNormalizer`]
#[must_use]
pub fn normalize(suites: &[RawSuite]) -> Vec<TestCase> {
    normalize_with(suites, &DefaultKeyNormalizer)
}

/// Normalize parsed suites into test cases
///
/// Produces one test case per raw case, in suite order and then document
/// order. Cases that end up with the same unique id are all kept.
#[must_use]
pub fn normalize_with<N>(suites: &[RawSuite], normalizer: &N) -> Vec<TestCase>
where
    N: KeyNormalizer + ?Sized,
{
    let cases: Vec<TestCase> = suites
        .iter()
        .flat_map(|suite| &suite.cases)
        .map(|raw| to_test_case(raw, normalizer))
        .collect();

    debug!(
        suites = suites.len(),
        cases = cases.len(),
        "Normalized JUnit test cases"
    );
    cases
}

fn to_test_case<N>(raw: &RawCase, normalizer: &N) -> TestCase
where
    N: KeyNormalizer + ?Sized,
{
    TestCase {
        name: raw.name.clone(),
        unique_id: unique_id(&raw.classname, &raw.name, normalizer),
        status: raw.status(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Marker, TestStatus};
    use similar_asserts::assert_eq;

    fn suite(cases: Vec<RawCase>) -> RawSuite {
        RawSuite { name: None, cases }
    }

    #[test]
    fn test_default_normalizer_identity_on_clean_keys() {
        let n = DefaultKeyNormalizer;
        assert_eq!(n.normalize_key("pkg.A"), "pkg.A");
        assert_eq!(n.normalize_key("t1"), "t1");
        assert_eq!(n.normalize_key("shouldWork[1]"), "shouldWork[1]");
    }

    #[test]
    fn test_default_normalizer_whitespace() {
        let n = DefaultKeyNormalizer;
        assert_eq!(n.normalize_key("  padded  "), "padded");
        assert_eq!(n.normalize_key("user can\tlog   in"), "user_can_log_in");
        assert_eq!(n.normalize_key("   "), "");
    }

    #[test]
    fn test_default_normalizer_replaces_separator() {
        let n = DefaultKeyNormalizer;
        assert_eq!(n.normalize_key("com.Login-Page"), "com.Login_Page");
        assert_eq!(n.normalize_key("opens - twice"), "opens___twice");
    }

    #[test]
    fn test_unique_id_separator_in_components() {
        let n = DefaultKeyNormalizer;
        assert_ne!(unique_id("a-b", "c", &n), unique_id("a", "b-c", &n));
        assert_ne!(
            unique_id("com.Login-Page", "opens", &n),
            unique_id("com.Login", "Page-opens", &n)
        );
        assert_eq!(unique_id("com.Login-Page", "opens", &n), "com.Login_Page-opens");
    }

    #[test]
    fn test_unique_id() {
        assert_eq!(unique_id("pkg.A", "t1", &DefaultKeyNormalizer), "pkg.A-t1");
        assert_eq!(
            unique_id(" com.example.Login Test", "logs in ", &DefaultKeyNormalizer),
            "com.example.Login_Test-logs_in"
        );
    }

    #[test]
    fn test_unique_id_custom_normalizer() {
        let lower = |s: &str| s.to_lowercase();
        assert_eq!(unique_id("pkg.A", "T1", &lower), "pkg.a-t1");
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize(&[]).is_empty());
        assert!(normalize(&[suite(vec![])]).is_empty());
    }

    #[test]
    fn test_normalize_preserves_order() {
        let suites = vec![
            suite(vec![RawCase::new("pkg.A", "a1")]),
            suite(vec![RawCase::new("pkg.B", "b1"), RawCase::new("pkg.B", "b2")]),
        ];

        let ids: Vec<String> = normalize(&suites).into_iter().map(|c| c.unique_id).collect();
        assert_eq!(ids, vec!["pkg.A-a1", "pkg.B-b1", "pkg.B-b2"]);
    }

    #[test]
    fn test_normalize_status_and_name() {
        let mut failing = RawCase::new("pkg.A", "t1");
        failing.failure = Some(Marker {
            message: "boom".to_string(),
            ..Default::default()
        });

        let cases = normalize(&[suite(vec![failing])]);
        assert_eq!(
            cases,
            vec![TestCase {
                name: "t1".to_string(),
                unique_id: "pkg.A-t1".to_string(),
                status: TestStatus::Failed,
            }]
        );
    }

    #[test]
    fn test_normalize_keeps_duplicates() {
        let suites = vec![
            suite(vec![RawCase::new("pkg.A", "t1")]),
            suite(vec![RawCase::new("pkg.A", "t1")]),
        ];

        let cases = normalize(&suites);
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].unique_id, cases[1].unique_id);
    }
}
