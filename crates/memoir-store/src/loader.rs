//! Document loading.
//!
//! Each loader reads a file, decodes it as JSON, and returns the decoded
//! structure. A missing file maps to [`Error::NotFound`]; a file that
//! exists but fails to decode maps to [`Error::Malformed`] carrying the
//! path and the serde error. Both are fatal at startup — the process
//! cannot serve without its data.

use std::fs;
use std::io;
use std::path::Path;

use memoir_core::types::CompiledDoc;
use memoir_core::{Error, Person, Result, RosterDoc, TestimonialSet};

use crate::index::RosterIndex;

fn read_document(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(raw),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(Error::not_found(path.display().to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Load the roster document and return its person records in document order.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Person>> {
    let path = path.as_ref();
    let raw = read_document(path)?;
    let doc: RosterDoc = serde_json::from_str(&raw)
        .map_err(|e| Error::malformed(path.display().to_string(), e))?;
    log::info!(
        "Loaded {} roster entries from {}",
        doc.names.len(),
        path.display()
    );
    Ok(doc.names)
}

/// Load the compiled document mapping identifier → testimonial set.
pub fn load_compiled(path: impl AsRef<Path>) -> Result<CompiledDoc> {
    let path = path.as_ref();
    let raw = read_document(path)?;
    let doc: CompiledDoc = serde_json::from_str(&raw)
        .map_err(|e| Error::malformed(path.display().to_string(), e))?;
    log::info!(
        "Loaded testimonials for {} people from {}",
        doc.len(),
        path.display()
    );
    Ok(doc)
}

/// Both documents, loaded together and shared read-only for the process
/// lifetime.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    index: RosterIndex,
    testimonials: CompiledDoc,
}

impl Dataset {
    /// Load the roster and compiled documents from the given paths.
    pub fn load(roster_path: impl AsRef<Path>, compiled_path: impl AsRef<Path>) -> Result<Self> {
        let people = load_roster(roster_path)?;
        let testimonials = load_compiled(compiled_path)?;
        Ok(Self {
            index: RosterIndex::from_people(people),
            testimonials,
        })
    }

    /// Build a dataset from already-decoded parts.
    pub fn from_parts(index: RosterIndex, testimonials: CompiledDoc) -> Self {
        Self {
            index,
            testimonials,
        }
    }

    /// The roster index.
    pub fn index(&self) -> &RosterIndex {
        &self.index
    }

    /// Testimonials for the given identifier, if the compiled document has
    /// an entry for it.
    pub fn testimonials_for(&self, identifier: &str) -> Option<&TestimonialSet> {
        self.testimonials.get(identifier)
    }
}

// ============================================================================
// Tests
// ============================================================================
