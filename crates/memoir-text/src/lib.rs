//! Memoir Text — testimonial body normalization.
//!
//! Testimonial bodies arrive entity-encoded and then JSON-escaped, so
//! display requires three rewrites applied in a fixed order:
//!
//! 1. [`decode_entities`]: named HTML character entities → literal characters
//! 2. [`decode_unicode_escapes`]: `\uXXXX` sequences → literal characters
//! 3. [`render_line_breaks`]: literal `\n` markers → `<br>`
//!
//! [`format_testimonial`] applies all three. The order is load-bearing —
//! see that function's documentation.
//!
//! Malformed escapes never error: anything a pass does not recognize is
//! left exactly as it was.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod entities;
mod format;
mod proptests;

pub use format::{decode_entities, decode_unicode_escapes, format_testimonial, render_line_breaks};
