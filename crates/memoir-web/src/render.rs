//! HTML rendering.
//!
//! The page is plain markup built with `format!` — person links carrying
//! the selection as a query parameter, the match list, and the two
//! testimonial sections. Display names and identifiers are escaped on the
//! way into markup; testimonial bodies are emitted exactly as the
//! formatter produced them (its `<br>` directive is markup by contract).

use memoir_core::{Person, Testimonial, TestimonialSet};
use memoir_search::SearchField;
use memoir_store::RosterIndex;
use memoir_text::format_testimonial;

/// What the page shows below the search results.
#[derive(Debug, Clone, Copy)]
pub enum Selection<'a> {
    /// No identifier in the request, or one the index cannot resolve.
    Empty,
    /// A resolved person, with their compiled entry if one exists.
    Selected {
        /// The selected person.
        person: &'a Person,
        /// The person's testimonials; `None` when the compiled document
        /// has no entry, which renders the same as an empty entry.
        testimonials: Option<&'a TestimonialSet>,
    },
}

/// Render the full browsing page.
pub fn page(
    title: &str,
    query: &str,
    field: SearchField,
    matches: &[&Person],
    selection: Selection<'_>,
    index: &RosterIndex,
) -> String {
    let mut html = String::new();
    html.push_str("<!doctype html>\n<html>\n<head>\n");
    html.push_str(&format!("<title>{}</title>\n", escape_text(title)));
    html.push_str("<meta charset=\"utf-8\">\n</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_text(title)));

    html.push_str(&search_form(query, field));
    html.push_str(&match_list(matches));

    match selection {
        Selection::Selected {
            person,
            testimonials,
        } => {
            static EMPTY: TestimonialSet = TestimonialSet {
                received: Vec::new(),
                given: Vec::new(),
            };
            let set = testimonials.unwrap_or(&EMPTY);

            html.push_str(&format!(
                "<p class=\"selected\">Selected: {}</p>\n",
                person_link(person)
            ));
            html.push_str("<h2>Testimonials</h2>\n");
            html.push_str(&testimonial_section("Received", "From", &set.received, index));
            html.push_str(&testimonial_section("Given", "To", &set.given, index));
        }
        Selection::Empty => {
            html.push_str("<p class=\"empty-state\">No valid selection.</p>\n");
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// An anchor that selects the person via the `id` query parameter.
pub fn person_link(person: &Person) -> String {
    format!(
        "<a href=\"?id={id}\">{name} ({id})</a>",
        id = escape_text(&person.identifier),
        name = escape_text(&person.display_name),
    )
}

fn search_form(query: &str, field: SearchField) -> String {
    let (name_selected, identifier_selected) = match field {
        SearchField::Name => (" selected", ""),
        SearchField::Identifier => ("", " selected"),
    };
    format!(
        "<form method=\"get\" action=\"/\">\n\
         <select name=\"field\">\n\
         <option value=\"name\"{name_selected}>Name</option>\n\
         <option value=\"identifier\"{identifier_selected}>Identifier</option>\n\
         </select>\n\
         <input type=\"text\" name=\"q\" value=\"{q}\">\n\
         <button type=\"submit\">Search</button>\n\
         </form>\n",
        q = escape_text(query),
    )
}

fn match_list(matches: &[&Person]) -> String {
    if matches.is_empty() {
        return String::new();
    }
    let mut html = String::from("<ul class=\"matches\">\n");
    for person in matches {
        html.push_str(&format!("<li>{}</li>\n", person_link(person)));
    }
    html.push_str("</ul>\n");
    html
}

fn testimonial_section(
    heading: &str,
    label: &str,
    entries: &[Testimonial],
    index: &RosterIndex,
) -> String {
    let mut html = format!("<h3>{heading}</h3>\n");
    for entry in entries {
        // A counterpart missing from the roster degrades to its bare
        // identifier; one bad reference must not take down the page.
        let counterpart = match index.get(&entry.counterpart) {
            Some(person) => person_link(person),
            None => escape_text(&entry.counterpart),
        };
        html.push_str(&format!(
            "<div class=\"testimonial\">\n\
             <p>{label}: {counterpart}</p>\n\
             <p>{body}</p>\n\
             </div>\n\
             <hr>\n",
            body = format_testimonial(&entry.body),
        ));
    }
    html
}

/// Escape text for interpolation into HTML content or attribute values.
fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use memoir_store::RosterIndex;

    fn person(identifier: &str, display_name: &str) -> Person {
        Person {
            identifier: identifier.to_string(),
            display_name: display_name.to_string(),
        }
    }

    #[test]
    fn test_person_link() {
        let p = person("16CS001", "Asha Rao");
        assert_eq!(
            person_link(&p),
            "<a href=\"?id=16CS001\">Asha Rao (16CS001)</a>"
        );
    }

    #[test]
    fn test_person_link_escapes_name() {
        let p = person("16CS001", "Asha <Rao>");
        let link = person_link(&p);
        assert!(link.contains("Asha &lt;Rao&gt;"));
        assert!(!link.contains("<Rao>"));
    }

    #[test]
    fn test_page_empty_state() {
        let index = RosterIndex::default();
        let html = page(
            "Testimonial Viewer",
            "",
            SearchField::Name,
            &[],
            Selection::Empty,
            &index,
        );
        assert!(html.contains("No valid selection."));
        assert!(!html.contains("<ul class=\"matches\">"));
    }

    #[test]
    fn test_page_match_list() {
        let people = vec![person("a1", "Asha"), person("a2", "Ashwin")];
        let matches: Vec<&Person> = people.iter().collect();
        let index = RosterIndex::from_people(people.clone());
        let html = page(
            "Testimonial Viewer",
            "ash",
            SearchField::Name,
            &matches,
            Selection::Empty,
            &index,
        );
        assert!(html.contains("?id=a1"));
        assert!(html.contains("?id=a2"));
        assert!(html.contains("value=\"ash\""));
    }

    #[test]
    fn test_selected_with_empty_set_renders_headings_only() {
        let people = vec![person("a1", "Asha")];
        let index = RosterIndex::from_people(people.clone());
        let html = page(
            "Testimonial Viewer",
            "",
            SearchField::Name,
            &[],
            Selection::Selected {
                person: &people[0],
                testimonials: None,
            },
            &index,
        );
        assert!(html.contains("Selected:"));
        assert!(html.contains("<h3>Received</h3>"));
        assert!(html.contains("<h3>Given</h3>"));
        assert!(!html.contains("<div class=\"testimonial\">"));
    }

    #[test]
    fn test_testimonial_rows_resolve_counterparts() {
        let people = vec![person("a1", "Asha"), person("b2", "Bimal")];
        let index = RosterIndex::from_people(people.clone());
        let set = TestimonialSet {
            received: vec![Testimonial {
                body: "so long &amp; thanks\\nfor everything".to_string(),
                counterpart: "b2".to_string(),
            }],
            given: vec![Testimonial {
                body: "bye".to_string(),
                counterpart: "GHOST".to_string(),
            }],
        };
        let html = page(
            "Testimonial Viewer",
            "",
            SearchField::Name,
            &[],
            Selection::Selected {
                person: &people[0],
                testimonials: Some(&set),
            },
            &index,
        );
        // Known counterpart renders as a link, body is normalized.
        assert!(html.contains("From: <a href=\"?id=b2\">Bimal (b2)</a>"));
        assert!(html.contains("so long & thanks<br>for everything"));
        // Unknown counterpart degrades to the bare identifier.
        assert!(html.contains("To: GHOST"));
    }

    #[test]
    fn test_search_form_keeps_field_selection() {
        let html = search_form("16cs", SearchField::Identifier);
        assert!(html.contains("<option value=\"identifier\" selected>"));
        assert!(html.contains("<option value=\"name\">"));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(
            escape_text(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }
}
