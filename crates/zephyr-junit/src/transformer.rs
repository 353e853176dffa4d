// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report transformers
//!
//! A [`ReportTransformer`] turns a report location into normalized test
//! cases. The sync tool picks one per report type; [`JUnitTransformer`]
//! handles JUnit XML.

use std::path::Path;

use tracing::info;

use crate::error::ReportError;
use crate::locator::locate;
use crate::model::TestCase;
use crate::normalize::{DefaultKeyNormalizer, KeyNormalizer, normalize_with};

/// Converts test reports of one format into normalized test cases
pub trait ReportTransformer {
    /// Short identifier of the handled report format
    fn report_type(&self) -> &str;

    /// Read every report at `report_path` and normalize its test cases
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be found or any report in it
    /// cannot be parsed. No partial results are returned.
    fn transform_to_test_cases(&self, report_path: &Path) -> Result<Vec<TestCase>, ReportError>;
}

/// Report type handled by [`JUnitTransformer`]
pub const JUNIT_REPORT_TYPE: &str = "junit";

/// Transformer for JUnit XML reports
#[derive(Debug, Clone, Default)]
pub struct JUnitTransformer<N = DefaultKeyNormalizer> {
    normalizer: N,
}

impl JUnitTransformer {
    /// Create a transformer using [`DefaultKeyNormalizer`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: KeyNormalizer> JUnitTransformer<N> {
    /// Create a transformer that derives unique ids with `normalizer`
    #[must_use]
    pub fn with_normalizer(normalizer: N) -> Self {
        Self { normalizer }
    }
}

impl<N: KeyNormalizer> ReportTransformer for JUnitTransformer<N> {
    fn report_type(&self) -> &str {
        JUNIT_REPORT_TYPE
    }

    fn transform_to_test_cases(&self, report_path: &Path) -> Result<Vec<TestCase>, ReportError> {
        let suites = locate(report_path)?;
        let cases = normalize_with(&suites, &self.normalizer);
        info!(
            path = %report_path.display(),
            suites = suites.len(),
            cases = cases.len(),
            "Transformed JUnit report"
        );
        Ok(cases)
    }
}

/// Transform the JUnit report(s) at `report_path` with default settings
///
/// # Errors
///
/// See [`ReportTransformer::transform_to_test_cases`].
pub fn transform_to_test_cases(
    report_path: impl AsRef<Path>,
) -> Result<Vec<TestCase>, ReportError> {
    JUnitTransformer::new().transform_to_test_cases(report_path.as_ref())
}
