// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for JUnit XML parsing
//!
//! This fuzzes `parse_str` followed by `normalize`, which together turn an
//! untrusted report document into test cases.

#![no_main]

use libfuzzer_sys::fuzz_target;

use zephyr_junit::{normalize, parse_str};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing should never panic on any input
        if let Ok(suite) = parse_str(input) {
            let cases = normalize(std::slice::from_ref(&suite));
            assert_eq!(cases.len(), suite.cases.len());
        }
    }
});
