//! The fill orchestrator implementing the three public operations
//!
//! All per-invocation state lives on the stack of one call; the engine
//! itself only owns the immutable dictionary index, so one instance can be
//! shared freely across threads.

use crate::engine::options::{
    CandidateOptions, FillOptions, GenerateOptions, normalize_exclusions,
};
use crate::engine::quality::evaluate;
use crate::engine::report::{
    Candidate, CandidateList, FillReport, FillStats, Placement, SlotDescriptor,
};
use crate::engine::templates::random_layout;
use crate::grid::layout::Grid;
use crate::grid::slots::SlotSet;
use crate::io::error::{EngineError, Result};
use crate::lexicon::index::{WordId, WordIndex};
use crate::solver::cache::MatchCache;
use crate::solver::domain::{self, LexiconView};
use crate::solver::propagation::propagate_all;
use crate::solver::search::{SearchOutcome, Searcher, ValueOrder};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Completed board produced by one successful attempt
struct SolvedBoard {
    grid: Grid,
    placements: Vec<Placement>,
}

/// Result of running the solver once over one board
struct Attempt {
    outcome: SearchOutcome,
    backtracks: u64,
    solved: Option<SolvedBoard>,
}

/// The crossword fill engine
///
/// Owns the dictionary index built once at startup. Every operation is
/// `&self`; concurrent fills each hold their own solver state.
#[derive(Debug)]
pub struct FillEngine {
    index: WordIndex,
}

impl FillEngine {
    /// Create an engine over a built dictionary index
    pub const fn new(index: WordIndex) -> Self {
        Self { index }
    }

    /// The dictionary index backing this engine
    pub const fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Generate a complete puzzle from scratch
    ///
    /// Selects a random block template, fills it, and scores the result,
    /// retrying with a fresh template on failure or quality rejection.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoSolution`] when every attempt fails or is
    /// rejected for quality, and [`EngineError::Timeout`] when the deadline
    /// fires first.
    pub fn generate(&self, options: &GenerateOptions) -> Result<FillReport> {
        let started = Instant::now();
        let deadline = options
            .timeout_ms
            .map(|ms| started + Duration::from_millis(ms));
        let exclusions = normalize_exclusions(&options.exclude);
        let order = value_order(options.quick_fill);

        let mut rng = StdRng::seed_from_u64(options.seed);
        let mut cache = MatchCache::new();
        let mut stats = FillStats {
            excluded_words: exclusions.len(),
            ..FillStats::default()
        };

        let max_retries = options.max_retries.max(1);
        for attempt in 1..=max_retries {
            if deadline_passed(deadline) {
                return Err(EngineError::Timeout {
                    operation: "generate",
                    attempts: attempt - 1,
                    elapsed_ms: started.elapsed().as_millis(),
                });
            }
            stats.attempts = attempt;

            let board = random_layout(&mut rng, options.symmetry);
            let result = self.solve_board(
                board,
                &exclusions,
                options.min_score,
                deadline,
                order,
                &mut rng,
                &mut cache,
            )?;
            stats.backtracks += result.backtracks;

            match result.outcome {
                SearchOutcome::Solved => {
                    let Some(solved) = result.solved else {
                        continue;
                    };
                    let quality = evaluate(&solved.placements);

                    if quality.is_acceptable() {
                        stats.filled_slots = solved.placements.len();
                        stats.pattern_searches = cache.stats.queries();
                        stats.elapsed_ms = started.elapsed().as_millis();
                        return Ok(FillReport {
                            grid: solved.grid,
                            placements: solved.placements,
                            quality,
                            stats,
                        });
                    }

                    // Quality rejection converts to a retry, never an error
                    stats.quality_rejections += 1;
                }
                SearchOutcome::Exhausted => {}
                SearchOutcome::TimedOut => {
                    return Err(EngineError::Timeout {
                        operation: "generate",
                        attempts: attempt,
                        elapsed_ms: started.elapsed().as_millis(),
                    });
                }
            }
        }

        Err(EngineError::NoSolution {
            operation: "generate",
            attempts: stats.attempts,
            elapsed_ms: started.elapsed().as_millis(),
        })
    }

    /// Fill a supplied partial board
    ///
    /// Pre-placed letters and words are kept; there is no template
    /// selection and no quality rejection, since seeds may force
    /// low-quality fills intentionally.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidGrid`] for an unfillable board shape,
    /// [`EngineError::NoSolution`] when the constraints cannot be
    /// satisfied, and [`EngineError::Timeout`] when the deadline fires
    /// first.
    pub fn fill(&self, grid: &Grid, options: &FillOptions) -> Result<FillReport> {
        let started = Instant::now();
        let deadline = options
            .timeout_ms
            .map(|ms| started + Duration::from_millis(ms));
        let exclusions = normalize_exclusions(&options.exclude);
        let order = value_order(options.quick_fill);

        let mut rng = StdRng::seed_from_u64(options.seed);
        let mut cache = MatchCache::new();
        let mut stats = FillStats {
            excluded_words: exclusions.len(),
            ..FillStats::default()
        };

        let max_retries = options.max_retries.max(1);
        for attempt in 1..=max_retries {
            if deadline_passed(deadline) {
                return Err(EngineError::Timeout {
                    operation: "fill",
                    attempts: attempt - 1,
                    elapsed_ms: started.elapsed().as_millis(),
                });
            }
            stats.attempts = attempt;

            let result = self.solve_board(
                grid.clone(),
                &exclusions,
                options.min_score,
                deadline,
                order,
                &mut rng,
                &mut cache,
            )?;
            stats.backtracks += result.backtracks;

            match result.outcome {
                SearchOutcome::Solved => {
                    let Some(solved) = result.solved else {
                        continue;
                    };
                    stats.filled_slots = solved.placements.len();
                    stats.pattern_searches = cache.stats.queries();
                    stats.elapsed_ms = started.elapsed().as_millis();
                    return Ok(FillReport {
                        grid: solved.grid,
                        quality: evaluate(&solved.placements),
                        placements: solved.placements,
                        stats,
                    });
                }
                SearchOutcome::Exhausted => {}
                SearchOutcome::TimedOut => {
                    return Err(EngineError::Timeout {
                        operation: "fill",
                        attempts: attempt,
                        elapsed_ms: started.elapsed().as_millis(),
                    });
                }
            }
        }

        Err(EngineError::NoSolution {
            operation: "fill",
            attempts: stats.attempts,
            elapsed_ms: started.elapsed().as_millis(),
        })
    }

    /// List arc-consistent candidates for one slot of a partial board
    ///
    /// Runs a single full propagation pass and no search: every returned
    /// word survives its neighbors' current domains, but is not guaranteed
    /// to extend to a complete fill. An unknown slot handle yields an empty
    /// list with no descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidGrid`] for an unfillable board shape.
    pub fn candidates(
        &self,
        grid: &Grid,
        slot_handle: &str,
        options: &CandidateOptions,
    ) -> Result<CandidateList> {
        let slots = SlotSet::detect(grid)?;
        let Some(slot_id) = slots.find_by_handle(slot_handle) else {
            return Ok(CandidateList::default());
        };

        let exclusions = normalize_exclusions(&options.exclude);
        let mut cache = MatchCache::new();
        let mut view = LexiconView::new(&self.index);
        let init = domain::initialize(
            &mut view,
            &slots,
            grid,
            options.min_score,
            &exclusions,
            &mut cache,
        );
        let mut domains = init.domains;

        let descriptor = slots.get(slot_id).map(|slot| SlotDescriptor {
            handle: slot.handle(),
            direction: slot.direction,
            row: slot.start.0,
            col: slot.start.1,
            length: slot.length,
            pattern: slot.pattern(grid).to_string(),
        });

        if !propagate_all(&view, &mut domains, &slots) {
            return Ok(CandidateList {
                slot: descriptor,
                candidates: Vec::new(),
                total_candidates: 0,
            });
        }

        // Words already placed in other slots cannot be reused here
        let taken: HashSet<(usize, WordId)> = init
            .placed
            .iter()
            .enumerate()
            .filter(|&(other_id, _)| other_id != slot_id)
            .filter_map(|(other_id, assignment)| {
                let word_id = (*assignment)?;
                slots.get(other_id).map(|slot| (slot.length, word_id))
            })
            .collect();

        let length = slots.get(slot_id).map_or(0, |slot| slot.length);
        let mut entries: Vec<Candidate> = domains
            .get(slot_id)
            .iter()
            .filter(|&&word_id| !taken.contains(&(length, word_id)))
            .filter_map(|&word_id| view.word(length, word_id))
            .map(|word| Candidate {
                word: word.text.clone(),
                score: word.score,
            })
            .collect();

        entries.sort_by(|a, b| (Reverse(a.score), &a.word).cmp(&(Reverse(b.score), &b.word)));

        let total_candidates = entries.len();
        entries.truncate(options.limit);

        Ok(CandidateList {
            slot: descriptor,
            candidates: entries,
            total_candidates,
        })
    }

    /// Run slot detection, domain initialization, propagation, and search
    /// over one board
    fn solve_board(
        &self,
        board: Grid,
        exclusions: &HashSet<String>,
        min_score: u32,
        deadline: Option<Instant>,
        order: ValueOrder,
        rng: &mut StdRng,
        cache: &mut MatchCache,
    ) -> Result<Attempt> {
        let slots = SlotSet::detect(&board)?;

        let mut view = LexiconView::new(&self.index);
        let init = domain::initialize(&mut view, &slots, &board, min_score, exclusions, cache);

        let mut grid = board;
        let mut domains = init.domains;
        let mut placed = init.placed;

        if !propagate_all(&view, &mut domains, &slots) {
            return Ok(Attempt {
                outcome: SearchOutcome::Exhausted,
                backtracks: 0,
                solved: None,
            });
        }

        let mut searcher = Searcher::new(
            &view, &slots, &mut grid, &mut domains, &mut placed, deadline, order, rng,
        );
        let outcome = searcher.solve();
        let backtracks = searcher.backtracks();

        let solved = (outcome == SearchOutcome::Solved).then(|| SolvedBoard {
            placements: build_placements(&view, &slots, &placed),
            grid,
        });

        Ok(Attempt {
            outcome,
            backtracks,
            solved,
        })
    }
}

/// Translate slot assignments into placement records, across slots first
fn build_placements(
    view: &LexiconView<'_>,
    slots: &SlotSet,
    placed: &[Option<WordId>],
) -> Vec<Placement> {
    slots
        .iter()
        .filter_map(|slot| {
            let word_id = placed.get(slot.id).copied().flatten()?;
            let word = view.word(slot.length, word_id)?;
            Some(Placement {
                word: word.text.clone(),
                direction: slot.direction,
                row: slot.start.0,
                col: slot.start.1,
                score: word.score,
            })
        })
        .collect()
}

const fn value_order(quick_fill: bool) -> ValueOrder {
    if quick_fill {
        ValueOrder::TierShuffle
    } else {
        ValueOrder::ScoreDescending
    }
}

fn deadline_passed(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|instant| Instant::now() >= instant)
}
