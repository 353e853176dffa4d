// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! zephyr-junit: JUnit report transformation for zephyr-sync
//!
//! This library crate reads JUnit-style XML reports (a single file or a whole
//! directory tree of `TEST*.xml` files) and turns them into a flat list of
//! [`TestCase`] values, each carrying a pass/fail status and a stable unique
//! id that the sync tool uses to correlate results with a test-management
//! system.
//!
//! # Example
//!
//! ```no_run
//! use zephyr_junit::{TestStatus, transform_to_test_cases};
//!
//! let cases = transform_to_test_cases("target/surefire-reports").unwrap();
//! let failed = cases.iter().filter(|c| c.status == TestStatus::Failed).count();
//! println!("{} of {} tests failed", failed, cases.len());
//! ```

pub mod error;
pub mod locator;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod transformer;

pub use error::{ParseError, ReportError};
pub use locator::{is_report_file_name, list_report_files, locate};
pub use model::{
    Marker, RawCase, RawSuite, Summary, TestCase, TestStatus, duplicate_unique_ids,
};
pub use normalize::{DefaultKeyNormalizer, KeyNormalizer, normalize, normalize_with, unique_id};
pub use parser::{parse_file, parse_str};
pub use transformer::{
    JUNIT_REPORT_TYPE, JUnitTransformer, ReportTransformer, transform_to_test_cases,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ReportError;
    pub use crate::model::{TestCase, TestStatus};
    pub use crate::transformer::{JUnitTransformer, ReportTransformer, transform_to_test_cases};
}
