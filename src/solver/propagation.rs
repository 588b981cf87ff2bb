//! AC-3 constraint propagation over slot crossings
//!
//! The crossing graph is cyclic, so propagation runs off a worklist of
//! `(slot, cell)` pairs rather than a graph traversal. Each pair means
//! "filter this slot's domain against the crossing at this cell". A small
//! set keyed by `(slot, other slot)` suppresses duplicate queue entries.

use crate::grid::slots::{Crossing, SlotId, SlotSet};
use crate::solver::domain::{LexiconView, SlotDomains};
use std::collections::{HashSet, VecDeque};

/// Bitmask over alphabet codes of the letters a domain can still produce
/// at one cell position
fn letter_mask(
    view: &LexiconView<'_>,
    domains: &SlotDomains,
    slots: &SlotSet,
    slot_id: SlotId,
    cell_idx: usize,
) -> u32 {
    let Some(slot) = slots.get(slot_id) else {
        return 0;
    };

    let mut mask = 0u32;
    for &word_id in domains.get(slot_id) {
        if let Some(code) = view.letter(slot.length, word_id, cell_idx) {
            mask |= 1 << u32::from(code);
        }
    }
    mask
}

/// Filter one slot's domain against the crossing at one of its cells
///
/// Keeps only words whose letter at the shared cell appears in at least one
/// word still available to the crossing slot. Returns `None` when the
/// domain is wiped, otherwise whether anything was removed.
fn revise(
    view: &LexiconView<'_>,
    domains: &mut SlotDomains,
    slots: &SlotSet,
    slot_id: SlotId,
    cell_idx: usize,
) -> Option<bool> {
    let Some(slot) = slots.get(slot_id) else {
        return Some(false);
    };
    let Some(Crossing {
        other_slot,
        other_cell,
    }) = slot.crossings.get(cell_idx).copied().flatten()
    else {
        return Some(false);
    };

    let supported = letter_mask(view, domains, slots, other_slot, other_cell);
    let length = slot.length;

    let removed = domains.retain(slot_id, |&word_id| {
        view.letter(length, word_id, cell_idx)
            .is_some_and(|code| supported & (1 << u32::from(code)) != 0)
    });

    if domains.is_wiped(slot_id) {
        return None;
    }
    Some(removed > 0)
}

/// Worklist of pending revisions with duplicate suppression
#[derive(Debug, Default)]
struct Worklist {
    queue: VecDeque<(SlotId, usize)>,
    queued_pairs: HashSet<(SlotId, SlotId)>,
}

impl Worklist {
    fn push(&mut self, slots: &SlotSet, slot_id: SlotId, cell_idx: usize) {
        let Some(Crossing { other_slot, .. }) = slots
            .get(slot_id)
            .and_then(|slot| slot.crossings.get(cell_idx).copied().flatten())
        else {
            return;
        };

        if self.queued_pairs.insert((slot_id, other_slot)) {
            self.queue.push_back((slot_id, cell_idx));
        }
    }

    fn pop(&mut self, slots: &SlotSet) -> Option<(SlotId, usize)> {
        let (slot_id, cell_idx) = self.queue.pop_front()?;

        if let Some(Crossing { other_slot, .. }) = slots
            .get(slot_id)
            .and_then(|slot| slot.crossings.get(cell_idx).copied().flatten())
        {
            self.queued_pairs.remove(&(slot_id, other_slot));
        }

        Some((slot_id, cell_idx))
    }
}

/// Run the worklist to fixpoint
///
/// After a reduction of slot `S`, every neighbor of `S` other than the slot
/// just revised against must be re-examined against `S`.
fn run(
    view: &LexiconView<'_>,
    domains: &mut SlotDomains,
    slots: &SlotSet,
    mut worklist: Worklist,
) -> bool {
    while let Some((slot_id, cell_idx)) = worklist.pop(slots) {
        let revised_against = slots
            .get(slot_id)
            .and_then(|slot| slot.crossings.get(cell_idx).copied().flatten())
            .map(|crossing| crossing.other_slot);

        match revise(view, domains, slots, slot_id, cell_idx) {
            None => return false,
            Some(false) => {}
            Some(true) => {
                let Some(slot) = slots.get(slot_id) else {
                    continue;
                };
                for crossing in slot.crossings.iter().flatten() {
                    if Some(crossing.other_slot) != revised_against {
                        worklist.push(slots, crossing.other_slot, crossing.other_cell);
                    }
                }
            }
        }
    }
    true
}

/// Establish arc consistency across the whole board
///
/// Returns false when any slot's domain is wiped; the caller is expected to
/// backtrack or report failure.
pub fn propagate_all(view: &LexiconView<'_>, domains: &mut SlotDomains, slots: &SlotSet) -> bool {
    let mut worklist = Worklist::default();
    for slot in slots.iter() {
        for (cell_idx, crossing) in slot.crossings.iter().enumerate() {
            if crossing.is_some() {
                worklist.push(slots, slot.id, cell_idx);
            }
        }
    }
    run(view, domains, slots, worklist)
}

/// Re-establish arc consistency after one slot's domain shrank
///
/// Seeds the worklist with the neighbors of the changed slot only; the rest
/// of the board is assumed consistent from the previous pass.
pub fn propagate_from(
    view: &LexiconView<'_>,
    domains: &mut SlotDomains,
    slots: &SlotSet,
    changed_slot: SlotId,
) -> bool {
    let mut worklist = Worklist::default();
    if let Some(slot) = slots.get(changed_slot) {
        for crossing in slot.crossings.iter().flatten() {
            worklist.push(slots, crossing.other_slot, crossing.other_cell);
        }
    }
    run(view, domains, slots, worklist)
}
