//! Tests for the puzzle quality scoring formula and acceptance contract

#[cfg(test)]
mod tests {
    use minifill::engine::quality::evaluate;
    use minifill::engine::report::Placement;
    use minifill::grid::slots::Direction;

    fn placement(word: &str, score: u32) -> Placement {
        Placement {
            word: word.to_string(),
            direction: Direction::Across,
            row: 0,
            col: 0,
            score,
        }
    }

    // Tests the formula term by term for a known placement mix
    // Verified by doubling the long word bonus
    #[test]
    fn test_formula_breakdown() {
        let placements = vec![
            placement("CRANE", 80),
            placement("TRACE", 60),
            placement("AREA", 40),
            placement("TEA", 40),
            placement("AT", 20),
        ];

        let report = evaluate(&placements);
        assert_eq!(report.word_count, 5);
        assert_eq!(report.two_letter_words, 1);
        assert_eq!(report.three_letter_words, 1);
        assert_eq!(report.long_words, 3);
        assert!((report.average_word_score - 48.0).abs() < f64::EPSILON);

        // 100 - 30 + 10 + 60 + 25 + 10 for the mid average band
        assert_eq!(report.score, 175);
        assert!(report.is_acceptable());
    }

    // Tests the average score bands adjust the total
    // Verified by swapping the high and mid band bonuses
    #[test]
    fn test_average_bands() {
        let high = evaluate(&[placement("CRANE", 90), placement("TRACE", 70)]);
        // 100 + 40 + 10 + 20 for the high band
        assert_eq!(high.score, 170);

        let low = evaluate(&[placement("CRANE", 10), placement("TRACE", 10)]);
        // 100 + 40 + 10 - 20 for the low band
        assert_eq!(low.score, 130);
    }

    // Tests too many two-letter words reject regardless of score
    // Verified by comparing the count with the wrong bound
    #[test]
    fn test_two_letter_rejection() {
        let mut placements: Vec<Placement> = ["AT", "TO", "IN", "ON", "UP"]
            .iter()
            .map(|word| placement(word, 90))
            .collect();
        placements.push(placement("CRANE", 90));
        placements.push(placement("TRACE", 90));
        placements.push(placement("SCALE", 90));

        let report = evaluate(&placements);
        assert_eq!(report.two_letter_words, 5);
        assert!(!report.is_acceptable());
    }

    // Tests a negative total rejects the board
    // Verified by accepting on strict inequality
    #[test]
    fn test_negative_score_rejection() {
        // Four two-letter words at rock-bottom scores
        let placements: Vec<Placement> = ["AT", "TO", "IN", "ON"]
            .iter()
            .map(|word| placement(word, 1))
            .collect();

        let report = evaluate(&placements);
        // 100 - 120 + 20 - 20 leaves the board below zero
        assert_eq!(report.score, -20);
        assert!(!report.is_acceptable());
    }

    // Tests the empty board evaluates without dividing by zero
    // Verified by computing the average before the emptiness check
    #[test]
    fn test_empty_board() {
        let report = evaluate(&[]);
        assert_eq!(report.word_count, 0);
        assert!((report.average_word_score - 0.0).abs() < f64::EPSILON);
        // 100 - 20 for the low average band
        assert_eq!(report.score, 80);
        assert!(report.is_acceptable());
    }
}
