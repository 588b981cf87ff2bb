//! Tests for `Pattern` parsing, matching, and display

#[cfg(test)]
mod tests {
    use minifill::lexicon::pattern::{Pattern, code_char, letter_code};

    // Tests letter code conversion in both directions
    // Verified by changing the alphabet base in letter_code
    #[test]
    fn test_letter_codes() {
        assert_eq!(letter_code('A'), Some(0));
        assert_eq!(letter_code('z'), Some(25));
        assert_eq!(letter_code('3'), None);
        assert_eq!(letter_code('.'), None);
        assert_eq!(code_char(0), 'A');
        assert_eq!(code_char(25), 'Z');
    }

    // Tests parsing of mixed fixed letters and wildcards
    // Verified by swapping the wildcard branch for a letter branch
    #[test]
    fn test_parse_mixed_pattern() {
        let pattern = match Pattern::parse("C.an?") {
            Ok(pattern) => pattern,
            Err(error) => unreachable!("pattern must parse: {error}"),
        };

        assert_eq!(pattern.len(), 5);
        assert_eq!(pattern.fixed_count(), 3);
        assert_eq!(pattern.letter_at(0), Some(2));
        assert_eq!(pattern.letter_at(1), None);
        assert_eq!(pattern.letter_at(2), Some(0));
        assert_eq!(pattern.letter_at(4), None);
    }

    // Tests rejection of characters outside letters and wildcards
    // Verified by removing the error branch from parse
    #[test]
    fn test_parse_rejects_bad_characters() {
        assert!(Pattern::parse("AB#DE").is_err());
        assert!(Pattern::parse("").is_err());
    }

    // Tests the open and complete predicates at their extremes
    // Verified by inverting the is_some filter in is_complete
    #[test]
    fn test_open_and_complete() {
        let open = Pattern::open(4);
        assert!(open.is_open());
        assert!(!open.is_complete());
        assert_eq!(open.fixed_count(), 0);

        let complete = match Pattern::parse("WORD") {
            Ok(pattern) => pattern,
            Err(error) => unreachable!("pattern must parse: {error}"),
        };
        assert!(complete.is_complete());
        assert!(!complete.is_open());
    }

    // Tests word matching against fixed positions only
    // Verified by dropping the length equality check from matches
    #[test]
    fn test_matches_respects_fixed_positions() {
        let pattern = match Pattern::parse("A..D") {
            Ok(pattern) => pattern,
            Err(error) => unreachable!("pattern must parse: {error}"),
        };

        assert!(pattern.matches(&[0, 1, 2, 3]));
        assert!(!pattern.matches(&[1, 1, 2, 3]));
        assert!(!pattern.matches(&[0, 1, 2]));
    }

    // Tests display round-trips through parse
    // Verified by rendering wildcards as letters
    #[test]
    fn test_display_round_trip() {
        let text = "C.AN.";
        let pattern = match Pattern::parse(text) {
            Ok(pattern) => pattern,
            Err(error) => unreachable!("pattern must parse: {error}"),
        };
        assert_eq!(pattern.to_string(), text);
    }
}
