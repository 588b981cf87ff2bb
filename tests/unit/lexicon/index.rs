//! Tests for `WordIndex` construction and pattern queries

#[cfg(test)]
mod tests {
    use minifill::lexicon::index::WordIndex;
    use minifill::lexicon::pattern::Pattern;

    fn entries(words: &[(&str, u32)]) -> Vec<(String, u32)> {
        words
            .iter()
            .map(|&(word, score)| (word.to_string(), score))
            .collect()
    }

    fn sample_index() -> WordIndex {
        WordIndex::from_entries(entries(&[
            ("CRANE", 80),
            ("CRATE", 60),
            ("TRACE", 95),
            ("AREA", 50),
            ("AT", 30),
            ("TO", 20),
        ]))
    }

    fn parse(text: &str) -> Pattern {
        match Pattern::parse(text) {
            Ok(pattern) => pattern,
            Err(error) => unreachable!("pattern must parse: {error}"),
        }
    }

    // Tests duplicate entries resolve to the maximum score
    // Verified by replacing max with the last-seen score
    #[test]
    fn test_duplicates_keep_max_score() {
        let index = WordIndex::from_entries(entries(&[("CRANE", 40), ("CRANE", 80), ("crane", 60)]));
        assert_eq!(index.score("CRANE"), 80);
        assert_eq!(index.bucket_len(5), 1);
    }

    // Tests buckets are ordered by descending score
    // Verified by reversing the bucket sort comparator
    #[test]
    fn test_bucket_ordering() {
        let index = sample_index();
        let scores: Vec<u32> = index.bucket(5).iter().map(|word| word.score).collect();
        assert_eq!(scores, vec![95, 80, 60]);
    }

    // Tests membership and the zero score of absent words
    // Verified by returning a default score for unknown words
    #[test]
    fn test_score_and_membership() {
        let index = sample_index();
        assert!(index.contains("crane"));
        assert_eq!(index.score("TRACE"), 95);
        assert_eq!(index.score("ZEBRA"), 0);
        assert!(!index.contains("ZEBRA"));
    }

    // Tests entries outside the usable length range are skipped
    // Verified by removing the length filter from from_entries
    #[test]
    fn test_ingest_skips_unusable_entries() {
        let index = WordIndex::from_entries(entries(&[
            ("A", 50),
            ("TOOLONGWORD", 50),
            ("OK", 50),
            ("NO1CE", 50),
        ]));
        assert_eq!(index.word_count(), 1);
        assert!(index.contains("OK"));
    }

    // Tests pattern search intersects positional constraints
    // Verified by intersecting only the first fixed position
    #[test]
    fn test_find_matches_with_fixed_letters() {
        let index = sample_index();

        let matched = index.find_matches(&parse("CRA.E"), 0);
        let words: Vec<&str> = matched
            .iter()
            .filter_map(|&id| index.word(5, id))
            .map(|word| word.text.as_str())
            .collect();

        assert_eq!(matched.len(), 2);
        assert!(words.contains(&"CRANE"));
        assert!(words.contains(&"CRATE"));
    }

    // Tests the empty intersection bails out with no matches
    // Verified by skipping the early-exit check
    #[test]
    fn test_find_matches_empty_intersection() {
        let index = sample_index();
        assert!(index.find_matches(&parse("Z...."), 0).is_empty());
        assert!(index.find_matches(&parse("C...A"), 0).is_empty());
    }

    // Tests the all-wildcard pattern returns the whole bucket
    // Verified by returning an empty list for open patterns
    #[test]
    fn test_find_matches_open_pattern() {
        let index = sample_index();
        assert_eq!(index.find_matches(&parse("....."), 0).len(), 3);
        assert_eq!(index.find_matches(&parse(".."), 0).len(), 2);
        assert!(index.find_matches(&parse("..."), 0).is_empty());
    }

    // Tests the score floor filters matches
    // Verified by comparing with strict inequality
    #[test]
    fn test_find_matches_score_floor() {
        let index = sample_index();
        let matched = index.find_matches(&parse("....."), 80);
        assert_eq!(matched.len(), 2);

        let floored = index.find_matches(&parse("CRA.E"), 70);
        assert_eq!(floored.len(), 1);
    }

    // Tests support sets agree with the bucket contents
    // Verified by inserting ids at the wrong position index
    #[test]
    fn test_support_sets() {
        let index = sample_index();

        // Words with C at position 0 among the 5-letter bucket
        let set = index.support_set(5, 0, 2);
        assert_eq!(set.map(minifill::solver::bitset::WordBitset::count), Some(2));
    }
}
