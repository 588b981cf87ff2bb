//! Tests for domain initialization, the seed-word overlay, and snapshots

#[cfg(test)]
mod tests {
    use minifill::grid::layout::Grid;
    use minifill::grid::slots::SlotSet;
    use minifill::lexicon::index::{Word, WordIndex};
    use minifill::solver::cache::MatchCache;
    use minifill::solver::domain::{self, LexiconView, SlotDomains};
    use std::collections::HashSet;

    fn index() -> WordIndex {
        let entries = [("AB", 80), ("AC", 60), ("BD", 40), ("CD", 20)]
            .iter()
            .map(|&(word, score)| (word.to_string(), score))
            .collect::<Vec<_>>();
        WordIndex::from_entries(entries)
    }

    fn corner_grid(rows: [&str; 2]) -> Grid {
        let text = format!("{}###\n{}###\n#####\n#####\n#####", rows[0], rows[1]);
        match Grid::parse(&text) {
            Ok(grid) => grid,
            Err(error) => unreachable!("grid must parse: {error}"),
        }
    }

    fn detect(grid: &Grid) -> SlotSet {
        match SlotSet::detect(grid) {
            Ok(slots) => slots,
            Err(error) => unreachable!("detection must succeed: {error}"),
        }
    }

    // Tests overlay words resolve past the bucket end with score 0
    // Verified by resolving overlay ids against the bucket start
    #[test]
    fn test_overlay_registration() {
        let index = index();
        let mut view = LexiconView::new(&index);

        let Some(word) = Word::new("ZZ", 0) else {
            unreachable!("overlay word must build");
        };
        let id = view.register(word.clone());
        assert_eq!(id, index.bucket_len(2));
        assert_eq!(view.score(2, id), 0);
        assert_eq!(view.word(2, id).map(|w| w.text.as_str()), Some("ZZ"));

        // Re-registering the same text reuses the id
        assert_eq!(view.register(word), id);
    }

    // Tests domain retain reports removals and snapshot restores them
    // Verified by restoring only the retained slot
    #[test]
    fn test_snapshot_and_restore() {
        let mut domains = SlotDomains::with_slot_count(2);
        domains.replace(0, vec![0, 1, 2]);
        domains.replace(1, vec![3]);

        let snapshot = domains.snapshot();
        let removed = domains.retain(0, |&id| id == 1);
        assert_eq!(removed, 2);
        assert_eq!(domains.get(0), &[1]);

        domains.restore(snapshot);
        assert_eq!(domains.get(0), &[0, 1, 2]);
        assert_eq!(domains.get(1), &[3]);
    }

    // Tests open slots get pattern matches minus the exclusion set
    // Verified by applying exclusions to the wrong slot
    #[test]
    fn test_initialize_open_slots() {
        let index = index();
        let mut view = LexiconView::new(&index);
        let grid = corner_grid([".."; 2]);
        let slots = detect(&grid);
        let exclusions: HashSet<String> = ["AC".to_string()].into_iter().collect();

        let init = domain::initialize(
            &mut view,
            &slots,
            &grid,
            0,
            &exclusions,
            &mut MatchCache::new(),
        );

        for slot in slots.iter() {
            assert_eq!(init.domains.len_of(slot.id), 3, "AC must be excluded");
            assert_eq!(init.placed.get(slot.id), Some(&None));
        }
    }

    // Tests a pre-filled slot becomes a singleton with a placement
    // Verified by leaving pre-filled slots with open domains
    #[test]
    fn test_initialize_prefilled_slot() {
        let index = index();
        let mut view = LexiconView::new(&index);
        let grid = corner_grid(["AB", ".."]);
        let slots = detect(&grid);

        let init = domain::initialize(
            &mut view,
            &slots,
            &grid,
            0,
            &HashSet::new(),
            &mut MatchCache::new(),
        );

        let Some(slot_id) = slots.find_by_handle("across-0-0") else {
            unreachable!("seed slot must exist");
        };
        assert_eq!(init.domains.len_of(slot_id), 1);
        assert!(init.placed.get(slot_id).copied().flatten().is_some());
    }

    // Tests a seed word the dictionary lacks is accepted through the overlay
    // Verified by wiping the domain for unknown seed words
    #[test]
    fn test_initialize_unknown_seed_word() {
        let index = index();
        let mut view = LexiconView::new(&index);
        let grid = corner_grid(["ZZ", ".."]);
        let slots = detect(&grid);

        let init = domain::initialize(
            &mut view,
            &slots,
            &grid,
            0,
            &HashSet::new(),
            &mut MatchCache::new(),
        );

        let Some(slot_id) = slots.find_by_handle("across-0-0") else {
            unreachable!("seed slot must exist");
        };
        let Some(&word_id) = init.domains.get(slot_id).first() else {
            unreachable!("seed slot must have a singleton domain");
        };
        assert_eq!(view.score(2, word_id), 0);
        assert_eq!(view.word(2, word_id).map(|w| w.text.as_str()), Some("ZZ"));
    }

    // Tests excluded and duplicated seed words wipe their slots
    // Verified by letting duplicate seeds share an assignment
    #[test]
    fn test_initialize_rejects_bad_seeds() {
        let index = index();
        let grid = corner_grid(["AB", ".."]);
        let slots = detect(&grid);

        let exclusions: HashSet<String> = ["AB".to_string()].into_iter().collect();
        let mut view = LexiconView::new(&index);
        let init = domain::initialize(
            &mut view,
            &slots,
            &grid,
            0,
            &exclusions,
            &mut MatchCache::new(),
        );

        let Some(slot_id) = slots.find_by_handle("across-0-0") else {
            unreachable!("seed slot must exist");
        };
        assert!(init.domains.is_wiped(slot_id), "excluded seed must wipe");

        // The same word seeded twice wipes the second occurrence
        let dup_grid = corner_grid(["AB", "AB"]);
        let dup_slots = detect(&dup_grid);
        let mut dup_view = LexiconView::new(&index);
        let dup_init = domain::initialize(
            &mut dup_view,
            &dup_slots,
            &dup_grid,
            0,
            &HashSet::new(),
            &mut MatchCache::new(),
        );

        let Some(second_row) = dup_slots.find_by_handle("across-1-0") else {
            unreachable!("second row slot must exist");
        };
        assert!(dup_init.domains.is_wiped(second_row));
    }

    // Tests the score floor filters open slot domains
    // Verified by applying the floor after exclusion filtering only
    #[test]
    fn test_initialize_score_floor() {
        let index = index();
        let mut view = LexiconView::new(&index);
        let grid = corner_grid([".."; 2]);
        let slots = detect(&grid);

        let init = domain::initialize(
            &mut view,
            &slots,
            &grid,
            50,
            &HashSet::new(),
            &mut MatchCache::new(),
        );

        // Only AB (80) and AC (60) clear the floor
        for slot in slots.iter() {
            assert_eq!(init.domains.len_of(slot.id), 2);
        }
    }
}
