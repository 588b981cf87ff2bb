//! Heuristic backtracking over slot assignments
//!
//! Depth-first search with most-constrained-variable slot selection and
//! score-weighted value ordering. Every placement snapshots all domains
//! plus the slot's cells; restoration is LIFO matched to placement order.

use crate::grid::layout::{Cell, Grid};
use crate::grid::slots::{SlotId, SlotSet};
use crate::io::configuration::SCORE_TIERS;
use crate::lexicon::index::WordId;
use crate::solver::domain::{DomainSnapshot, LexiconView, SlotDomains};
use crate::solver::propagation::propagate_from;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::time::Instant;

/// Terminal state of a search
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchOutcome {
    /// Every slot holds a word and all crossings agree
    Solved,
    /// All candidate assignments were tried without success
    Exhausted,
    /// The wall-clock deadline fired before the search finished
    TimedOut,
}

/// Strategy for ordering a slot's candidates before trying them
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueOrder {
    /// Strictly descending dictionary score, deterministic
    ScoreDescending,
    /// Score tiers shuffled internally for diverse quick fills
    TierShuffle,
}

/// Undo record for one placement
struct PlacementSnapshot {
    domains: DomainSnapshot,
    cells: Vec<Cell>,
}

/// Backtracking searcher over the unfilled slots of one board
pub struct Searcher<'a> {
    view: &'a LexiconView<'a>,
    slots: &'a SlotSet,
    grid: &'a mut Grid,
    domains: &'a mut SlotDomains,
    placed: &'a mut [Option<WordId>],
    used: HashSet<(usize, WordId)>,
    deadline: Option<Instant>,
    order: ValueOrder,
    rng: &'a mut StdRng,
    backtracks: u64,
}

impl<'a> Searcher<'a> {
    /// Create a searcher over initialized domains
    ///
    /// Words pre-placed during domain initialization are registered as used
    /// so the search never duplicates them.
    pub fn new(
        view: &'a LexiconView<'a>,
        slots: &'a SlotSet,
        grid: &'a mut Grid,
        domains: &'a mut SlotDomains,
        placed: &'a mut [Option<WordId>],
        deadline: Option<Instant>,
        order: ValueOrder,
        rng: &'a mut StdRng,
    ) -> Self {
        let used = placed
            .iter()
            .enumerate()
            .filter_map(|(slot_id, assignment)| {
                let word_id = (*assignment)?;
                slots.get(slot_id).map(|slot| (slot.length, word_id))
            })
            .collect();

        Self {
            view,
            slots,
            grid,
            domains,
            placed,
            used,
            deadline,
            order,
            rng,
            backtracks: 0,
        }
    }

    /// Number of times the search undid a placement after recursive failure
    pub const fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Run the search to a terminal state
    pub fn solve(&mut self) -> SearchOutcome {
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return SearchOutcome::TimedOut;
        }

        let Some(slot_id) = self.most_constrained_slot() else {
            return SearchOutcome::Solved;
        };

        if self.domains.is_wiped(slot_id) {
            return SearchOutcome::Exhausted;
        }

        let length = self.slots.get(slot_id).map_or(0, |slot| slot.length);

        for word_id in self.ordered_candidates(slot_id) {
            // Uniqueness: a word may appear once per puzzle
            if self.used.contains(&(length, word_id)) {
                continue;
            }

            let snapshot = self.place(slot_id, word_id);

            if propagate_from(self.view, self.domains, self.slots, slot_id) {
                match self.solve() {
                    SearchOutcome::Solved => return SearchOutcome::Solved,
                    SearchOutcome::TimedOut => return SearchOutcome::TimedOut,
                    SearchOutcome::Exhausted => self.backtracks += 1,
                }
            }

            self.unplace(slot_id, word_id, snapshot);
        }

        SearchOutcome::Exhausted
    }

    /// Unfilled slot with the smallest domain, ties broken by lowest id
    fn most_constrained_slot(&self) -> Option<SlotId> {
        self.placed
            .iter()
            .enumerate()
            .filter(|(_, assignment)| assignment.is_none())
            .map(|(slot_id, _)| slot_id)
            .min_by_key(|&slot_id| (self.domains.len_of(slot_id), slot_id))
    }

    /// Candidates for a slot in the order they should be attempted
    fn ordered_candidates(&mut self, slot_id: SlotId) -> Vec<WordId> {
        let length = self.slots.get(slot_id).map_or(0, |slot| slot.length);
        let mut candidates = self.domains.get(slot_id).to_vec();
        candidates.sort_by_key(|&word_id| (Reverse(self.view.score(length, word_id)), word_id));

        if self.order == ValueOrder::TierShuffle {
            let mut tiers: Vec<Vec<WordId>> = vec![Vec::new(); SCORE_TIERS.len() + 1];
            for word_id in candidates {
                let score = self.view.score(length, word_id);
                let tier = SCORE_TIERS
                    .iter()
                    .position(|&floor| score >= floor)
                    .unwrap_or(SCORE_TIERS.len());
                if let Some(bucket) = tiers.get_mut(tier) {
                    bucket.push(word_id);
                }
            }

            for bucket in &mut tiers {
                bucket.shuffle(self.rng);
            }
            return tiers.concat();
        }

        candidates
    }

    /// Write a word into the board and shrink its slot to a singleton
    fn place(&mut self, slot_id: SlotId, word_id: WordId) -> PlacementSnapshot {
        let snapshot = PlacementSnapshot {
            domains: self.domains.snapshot(),
            cells: self.slot_cells(slot_id),
        };

        if let Some(slot) = self.slots.get(slot_id) {
            for (cell_idx, &(row, col)) in slot.cells.iter().enumerate() {
                if let Some(code) = self.view.letter(slot.length, word_id, cell_idx) {
                    self.grid.set(row, col, Cell::Letter(code));
                }
            }

            self.used.insert((slot.length, word_id));
        }

        self.domains.replace(slot_id, vec![word_id]);
        if let Some(assignment) = self.placed.get_mut(slot_id) {
            *assignment = Some(word_id);
        }

        snapshot
    }

    /// Undo a placement, restoring domains and cell contents
    ///
    /// Restoring the saved cell values inherently preserves letters that a
    /// crossing slot still owns, since those letters predate this
    /// placement.
    fn unplace(&mut self, slot_id: SlotId, word_id: WordId, snapshot: PlacementSnapshot) {
        if let Some(slot) = self.slots.get(slot_id) {
            for (&(row, col), &cell) in slot.cells.iter().zip(snapshot.cells.iter()) {
                self.grid.set(row, col, cell);
            }
            self.used.remove(&(slot.length, word_id));
        }

        self.domains.restore(snapshot.domains);
        if let Some(assignment) = self.placed.get_mut(slot_id) {
            *assignment = None;
        }
    }

    fn slot_cells(&self, slot_id: SlotId) -> Vec<Cell> {
        self.slots.get(slot_id).map_or_else(Vec::new, |slot| {
            slot.cells
                .iter()
                .map(|&(row, col)| self.grid.cell(row, col).unwrap_or(Cell::Empty))
                .collect()
        })
    }
}
