use std::fs;

use crate::error::{ErrorKind, GedcomError, IOError, Result};

/// The four-line document used throughout the tests
pub const SAMPLE_LINES: [&str; 4] = ["0 HEAD", "1 SOUR Aconex", "0 @I1@ INDI", "1 NAME John /Doe/"];

pub struct TestData {
    pub family_ged: String,
    pub family_xml: String,
    pub messy_ged: String,
}

impl TestData {
    pub fn load() -> Result<Self> {
        Ok(Self {
            family_ged: read_test_file("tests/input/family.ged")?,
            family_xml: read_test_file("tests/input/family.xml")?,
            messy_ged: read_test_file("tests/input/messy.ged")?,
        })
    }
}

pub fn read_test_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        GedcomError::new(ErrorKind::IO(IOError::ReadError(format!(
            "Failed to read {}: {}",
            path, e
        ))))
    })
}
