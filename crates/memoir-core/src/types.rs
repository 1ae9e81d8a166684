//! Wire types for the roster and compiled documents.
//!
//! Field names in the serde attributes are pinned to the dataset's JSON
//! field names (`roll`, `name`, `testimonial`, `by_roll`/`to_roll`,
//! `testimonials_to`/`testimonials_from`). The Rust-side names describe
//! what the fields mean, not how the dataset spells them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One person from the roster document.
///
/// Loaded once at startup; immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier across the roster.
    #[serde(rename = "roll")]
    pub identifier: String,

    /// Human-readable display name.
    #[serde(rename = "name")]
    pub display_name: String,
}

/// The roster document: a list of person records under `names`.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterDoc {
    /// All known persons, in document order.
    pub names: Vec<Person>,
}

/// A single testimonial body together with its counterpart.
///
/// The counterpart is the other party: the author (`by_roll`) on a
/// received testimonial, the recipient (`to_roll`) on a given one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    /// Raw testimonial text, as stored in the compiled document.
    #[serde(rename = "testimonial")]
    pub body: String,

    /// Identifier of the other party.
    #[serde(alias = "by_roll", alias = "to_roll")]
    pub counterpart: String,
}

/// Testimonials for one person, split into received and given sequences.
///
/// Either sequence may be absent in the document; absent means empty.
/// Sequence order is preserved from the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestimonialSet {
    /// Testimonials this person received (`testimonials_to`).
    #[serde(default, rename = "testimonials_to")]
    pub received: Vec<Testimonial>,

    /// Testimonials this person gave (`testimonials_from`).
    #[serde(default, rename = "testimonials_from")]
    pub given: Vec<Testimonial>,
}

impl TestimonialSet {
    /// Returns `true` if both sequences are empty.
    pub fn is_empty(&self) -> bool {
        self.received.is_empty() && self.given.is_empty()
    }

    /// Total number of testimonials across both sequences.
    pub fn len(&self) -> usize {
        self.received.len() + self.given.len()
    }
}

/// The compiled document: identifier → testimonial set.
pub type CompiledDoc = HashMap<String, TestimonialSet>;

// ============================================================================
// Tests
// ============================================================================
