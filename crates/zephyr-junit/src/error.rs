// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for zephyr-junit

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating and transforming JUnit reports
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report path does not exist or cannot be accessed
    #[error("Report path not found: {}", path.display())]
    NotFound {
        /// The path that was requested
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// Walking a report directory failed
    #[error("Failed to scan report directory {}: {source}", path.display())]
    Scan {
        /// The directory being scanned
        path: PathBuf,
        /// Underlying traversal error
        #[source]
        source: walkdir::Error,
    },

    /// A report file could not be read or parsed
    #[error("Cannot process JUnit report {}: {source}", path.display())]
    Parse {
        /// The offending report file
        path: PathBuf,
        /// What went wrong while parsing it
        #[source]
        source: ParseError,
    },
}

impl ReportError {
    /// Path of the file or directory this error concerns
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path, .. } | Self::Scan { path, .. } | Self::Parse { path, .. } => {
                path.as_path()
            }
        }
    }
}

/// Errors that can occur while parsing a single JUnit XML document
#[derive(Debug, Error)]
pub enum ParseError {
    /// The report file could not be read
    #[error("IO error: {0}")]
    Read(#[from] std::io::Error),

    /// The document is not well-formed XML
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document does not match the expected report schema
    #[error("Invalid JUnit report: {0}")]
    Deserialize(#[from] quick_xml::DeError),

    /// The report is neither UTF-8 nor in a supported declared encoding
    #[error("Unsupported report encoding {encoding}")]
    Encoding {
        /// Encoding the report declares, or UTF-8 when it declares none
        encoding: String,
    },

    /// The root element is not a test suite
    #[error("Unexpected root element <{found}>, expected <testsuite>")]
    UnexpectedRoot {
        /// Name of the root element that was found
        found: String,
    },

    /// The document has no root element at all
    #[error("Document has no root element")]
    MissingRoot,
}
