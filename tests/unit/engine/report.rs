//! Tests for result type defaults and placement equality

#[cfg(test)]
mod tests {
    use minifill::engine::report::{Candidate, CandidateList, FillStats, Placement};
    use minifill::grid::slots::Direction;

    // Tests fresh statistics start at zero across the board
    // Verified by seeding attempts at one
    #[test]
    fn test_stats_default() {
        let stats = FillStats::default();
        assert_eq!(stats.attempts, 0);
        assert_eq!(stats.backtracks, 0);
        assert_eq!(stats.filled_slots, 0);
        assert_eq!(stats.pattern_searches, 0);
        assert_eq!(stats.quality_rejections, 0);
        assert_eq!(stats.excluded_words, 0);
    }

    // Tests the unknown-slot candidate list is empty with no descriptor
    // Verified by defaulting the descriptor to a dummy slot
    #[test]
    fn test_candidate_list_default() {
        let list = CandidateList::default();
        assert!(list.slot.is_none());
        assert!(list.candidates.is_empty());
        assert_eq!(list.total_candidates, 0);
    }

    // Tests placements compare by every field
    // Verified by dropping the direction from equality
    #[test]
    fn test_placement_equality() {
        let across = Placement {
            word: "CRANE".to_string(),
            direction: Direction::Across,
            row: 0,
            col: 0,
            score: 80,
        };
        let down = Placement {
            direction: Direction::Down,
            ..across.clone()
        };

        assert_eq!(across, across.clone());
        assert_ne!(across, down);

        let candidate = Candidate {
            word: "CRANE".to_string(),
            score: 80,
        };
        assert_eq!(candidate.word, across.word);
    }
}
