//! Tests for operation option defaults and exclusion normalization

#[cfg(test)]
mod tests {
    use minifill::engine::options::{
        CandidateOptions, FillOptions, GenerateOptions, Symmetry, normalize_exclusions,
    };
    use minifill::io::configuration::{
        DEFAULT_CANDIDATE_LIMIT, DEFAULT_MAX_RETRIES, DEFAULT_MIN_SCORE, DEFAULT_SEED,
    };

    // Tests generate defaults favor diverse reproducible output
    // Verified by defaulting quick_fill off
    #[test]
    fn test_generate_defaults() {
        let options = GenerateOptions::default();
        assert_eq!(options.symmetry, Symmetry::None);
        assert_eq!(options.min_score, DEFAULT_MIN_SCORE);
        assert_eq!(options.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(options.timeout_ms, None);
        assert_eq!(options.seed, DEFAULT_SEED);
        assert!(options.quick_fill);
        assert!(options.exclude.is_empty());
    }

    // Tests fill defaults are deterministic single attempts
    // Verified by defaulting retries to the generate count
    #[test]
    fn test_fill_defaults() {
        let options = FillOptions::default();
        assert_eq!(options.max_retries, 1);
        assert!(!options.quick_fill);
        assert_eq!(options.timeout_ms, None);
    }

    // Tests candidate defaults use the documented limit
    // Verified by halving the default limit
    #[test]
    fn test_candidate_defaults() {
        let options = CandidateOptions::default();
        assert_eq!(options.limit, DEFAULT_CANDIDATE_LIMIT);
        assert_eq!(options.min_score, DEFAULT_MIN_SCORE);
    }

    // Tests exclusions are uppercased, trimmed, and deduplicated
    // Verified by skipping the trim before the emptiness filter
    #[test]
    fn test_normalize_exclusions() {
        let raw = vec![
            "crane".to_string(),
            " CRANE ".to_string(),
            "Trace".to_string(),
            "   ".to_string(),
            String::new(),
        ];

        let normalized = normalize_exclusions(&raw);
        assert_eq!(normalized.len(), 2);
        assert!(normalized.contains("CRANE"));
        assert!(normalized.contains("TRACE"));
    }
}
