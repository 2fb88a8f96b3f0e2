// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Catalog loading from the upstream JSON data files.

use crate::entity::Catalog;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The error type for catalog loading.
#[derive(Debug)]
pub enum CatalogError {
    /// An I/O error occurred while reading the input.
    Io(std::io::Error),
    /// The input is not a valid catalog document.
    Json(serde_json::Error),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "Catalog parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl Catalog {
    /// Loads a catalog from a JSON string slice.
    pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads a catalog from a generic reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(serde_json::from_reader(BufReader::new(reader))?)
    }

    /// Loads a catalog from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_CATALOG: &str = r#"{
        "skills": [
            { "id": 1, "name": "Attack Boost",
              "ranks": [{ "level": 1, "description": "+3 attack" },
                        { "level": 2, "description": "+6 attack" }] }
        ],
        "armours": [
            { "id": 10, "name": "Hunter Mail", "type": "chest",
              "skills": [{ "skill": 1, "level": 1 }],
              "slots": [1],
              "armorSet": { "id": 100 } }
        ],
        "sets": [
            { "id": 100, "name": "Hunter", "pieces": [{ "id": 10 }] }
        ],
        "charms": [
            { "id": 20, "name": "Attack Charm",
              "ranks": [{ "level": 1, "skills": [{ "skill": 1, "level": 1 }] }] }
        ],
        "jewels": [
            { "id": 30, "name": "Attack Jewel 1", "slot": 1,
              "skills": [{ "skill": 1, "level": 1 }] }
        ]
    }"#;

    #[test]
    fn test_loads_catalog_document() {
        let catalog = Catalog::from_json_str(SMALL_CATALOG).expect("catalog should load");

        assert_eq!(catalog.skills.len(), 1);
        assert_eq!(catalog.armors.len(), 1);
        assert_eq!(catalog.sets.len(), 1);
        assert_eq!(catalog.charms.len(), 1);
        assert_eq!(catalog.jewels.len(), 1);
        assert_eq!(catalog.skills[0].level_cap(), 2);
    }

    #[test]
    fn test_from_reader_matches_from_str() {
        let via_str = Catalog::from_json_str(SMALL_CATALOG).unwrap();
        let via_reader = Catalog::from_reader(SMALL_CATALOG.as_bytes()).unwrap();
        assert_eq!(via_str, via_reader);
    }

    #[test]
    fn test_malformed_document_reports_parse_error() {
        let res = Catalog::from_json_str("{ \"skills\": 7 }");
        match res {
            Err(CatalogError::Json(_)) => {}
            other => panic!("expected Json error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_file_reports_io_error() {
        let res = Catalog::from_path("/nonexistent/catalog.json");
        assert!(matches!(res, Err(CatalogError::Io(_))));
    }
}
