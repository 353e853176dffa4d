// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report and test case types
//!
//! [`RawSuite`], [`RawCase`] and [`Marker`] mirror the JUnit XML schema and
//! only live between parsing and normalization. [`TestCase`] is the
//! normalized result handed to the caller.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Raw report types (from `<testsuite>` documents)
// ============================================================================

/// One parsed `<testsuite>` document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSuite {
    /// Suite name, if the report carries one
    #[serde(rename = "@name", default)]
    pub name: Option<String>,
    /// Test cases in document order
    #[serde(rename = "testcase", default)]
    pub cases: Vec<RawCase>,
}

/// One `<testcase>` entry as found in a report
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawCase {
    /// Test method name
    #[serde(rename = "@name")]
    pub name: String,
    /// Fully qualified class (or module) the test belongs to
    #[serde(rename = "@classname")]
    pub classname: String,
    /// Present when the test failed an assertion
    #[serde(default)]
    pub failure: Option<Marker>,
    /// Present when the test raised an unexpected error
    #[serde(default)]
    pub error: Option<Marker>,
}

impl RawCase {
    /// Create a passing case with no markers
    #[must_use]
    pub fn new(classname: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classname: classname.into(),
            failure: None,
            error: None,
        }
    }

    /// Whether the case carries a failure or an error marker
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.failure.is_some() || self.error.is_some()
    }

    /// Status derived from the markers
    #[must_use]
    pub fn status(&self) -> TestStatus {
        if self.is_failed() {
            TestStatus::Failed
        } else {
            TestStatus::Passed
        }
    }
}

/// A `<failure>` or `<error>` child element
///
/// Only its presence matters for the status; the content is kept for
/// diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Marker {
    /// Short description from the `message` attribute
    #[serde(rename = "@message", default)]
    pub message: String,
    /// Exception or assertion type from the `type` attribute
    #[serde(rename = "@type", default)]
    pub kind: String,
    /// Element body, usually a stack trace
    #[serde(rename = "$text", default)]
    pub text: String,
}

// ============================================================================
// Normalized output types
// ============================================================================

/// Outcome of a normalized test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    /// No failure or error marker was present
    Passed,
    /// A failure or error marker was present
    Failed,
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Passed => f.pad("PASSED"),
            TestStatus::Failed => f.pad("FAILED"),
        }
    }
}

/// A normalized test result ready for synchronization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// Test name, copied verbatim from the report
    pub name: String,
    /// Stable identifier derived from classname and name
    pub unique_id: String,
    /// Pass/fail classification
    pub status: TestStatus,
}

impl TestCase {
    /// Check if the test passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == TestStatus::Passed
    }

    /// Check if the test failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.status == TestStatus::Failed
    }
}

/// Pass/fail counts over a list of test cases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Total test cases
    pub total: usize,
    /// Test cases that passed
    pub passed: usize,
    /// Test cases that failed
    pub failed: usize,
}

impl Summary {
    /// Count outcomes in `cases`
    #[must_use]
    pub fn from_cases(cases: &[TestCase]) -> Self {
        let failed = cases.iter().filter(|c| c.failed()).count();
        Self {
            total: cases.len(),
            passed: cases.len() - failed,
            failed,
        }
    }

    /// Check if all tests passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Unique ids that occur more than once, in order of first appearance
///
/// Duplicates are legal output; this only reports them.
#[must_use]
pub fn duplicate_unique_ids(cases: &[TestCase]) -> Vec<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for case in cases {
        *counts.entry(case.unique_id.as_str()).or_default() += 1;
    }

    let mut reported = HashSet::new();
    cases
        .iter()
        .map(|c| c.unique_id.as_str())
        .filter(|id| counts[id] > 1 && reported.insert(*id))
        .collect()
}
