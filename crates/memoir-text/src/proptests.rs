//! Property-based tests for the formatter.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::format_testimonial;
    use proptest::prelude::*;

    proptest! {
        // Text with no ampersands and no backslashes contains no entities,
        // no escapes, and no newline markers: formatting is identity.
        #[test]
        fn test_identity_without_escape_starts(input in "[^&\\\\]{0,64}") {
            prop_assert_eq!(format_testimonial(&input), input);
        }

        // Formatting never panics on arbitrary input.
        #[test]
        fn test_total_on_arbitrary_input(input in "\\PC{0,64}") {
            let _ = format_testimonial(&input);
        }
    }
}
