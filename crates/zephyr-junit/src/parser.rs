// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JUnit XML parsing
//!
//! A report is a single `<testsuite>` root holding zero or more `<testcase>`
//! children, each of which may contain a `<failure>` and/or an `<error>`
//! element:
//!
//! ```xml
//! <testsuite name="pkg.A" tests="2">
//!   <testcase name="t1" classname="pkg.A"/>
//!   <testcase name="t2" classname="pkg.A">
//!     <failure message="boom">stack trace</failure>
//!   </testcase>
//! </testsuite>
//! ```
//!
//! Anything else in the document (properties, timings, captured output) is
//! ignored.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use crate::error::{ParseError, ReportError};
use crate::model::RawSuite;

/// Name of the only accepted root element
pub const SUITE_ELEMENT: &str = "testsuite";

/// Parse a JUnit XML document
///
/// # Errors
///
/// Returns `ParseError::Xml` if the document is not well-formed,
/// `ParseError::UnexpectedRoot` / `ParseError::MissingRoot` if it has no
/// `<testsuite>` root, and `ParseError::Deserialize` if a test case lacks its
/// `name` or `classname` attribute.
pub fn parse_str(xml: &str) -> Result<RawSuite, ParseError> {
    check_root(xml)?;
    let suite = quick_xml::de::from_str(xml)?;
    Ok(suite)
}

/// Read and parse the JUnit XML report at `path`
///
/// The file is read in full and closed before parsing begins. Content must be
/// UTF-8 or declare ISO-8859-1 in its XML declaration.
///
/// # Errors
///
/// Returns `ReportError::Parse` carrying `path` if the file cannot be read
/// or its content is not a valid report.
pub fn parse_file(path: &Path) -> Result<RawSuite, ReportError> {
    let wrap = |source: ParseError| ReportError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let bytes = fs::read(path).map_err(|e| wrap(ParseError::Read(e)))?;
    let content = decode(bytes).map_err(wrap)?;
    let suite = parse_str(&content).map_err(wrap)?;

    debug!(
        path = %path.display(),
        suite = suite.name.as_deref().unwrap_or_default(),
        cases = suite.cases.len(),
        "Parsed JUnit report"
    );
    Ok(suite)
}

/// Encoding names, compared case-insensitively, decoded as ISO-8859-1
const LATIN1_ENCODINGS: &[&str] = &["ISO-8859-1", "ISO8859-1", "ISO_8859-1", "latin1"];

/// Decode raw report bytes into text
///
/// UTF-8 is taken as-is. Anything else must declare an ISO-8859-1 encoding
/// in its XML declaration.
fn decode(bytes: Vec<u8>) -> Result<String, ParseError> {
    let bytes = match String::from_utf8(bytes) {
        Ok(text) => return Ok(text),
        Err(e) => e.into_bytes(),
    };

    let encoding = declared_encoding(&bytes)?.unwrap_or_else(|| "UTF-8".to_string());
    if LATIN1_ENCODINGS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(&encoding))
    {
        return Ok(bytes.iter().map(|&b| char::from(b)).collect());
    }
    Err(ParseError::Encoding { encoding })
}

/// Encoding named in the XML declaration, if the document starts with one
fn declared_encoding(bytes: &[u8]) -> Result<Option<String>, ParseError> {
    let mut reader = Reader::from_reader(bytes);
    match reader.read_event()? {
        Event::Decl(decl) => match decl.encoding() {
            Some(encoding) => {
                let encoding = encoding.map_err(quick_xml::Error::from)?;
                Ok(Some(String::from_utf8_lossy(&encoding).into_owned()))
            }
            None => Ok(None),
        },
        _ => Ok(None),
    }
}

/// The serde layer does not look at the root element's name, so check it
/// separately.
fn check_root(xml: &str) -> Result<(), ParseError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                let name = e.local_name();
                if name.as_ref() == SUITE_ELEMENT.as_bytes() {
                    return Ok(());
                }
                return Err(ParseError::UnexpectedRoot {
                    found: String::from_utf8_lossy(name.as_ref()).into_owned(),
                });
            }
            Event::Eof => return Err(ParseError::MissingRoot),
            _ => {}
        }
    }
}
