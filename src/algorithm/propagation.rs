//! Worklist-driven arc-consistency propagation across the wave
//!
//! After a cell's domain changes, every neighbouring domain is intersected
//! with the union of tiles the changed cell still tolerates in that
//! direction. Each neighbour that actually shrank is requeued for the same
//! treatment. Domains only shrink and the total bit count across the wave is
//! finite, so the worklist always drains; revisiting a position along
//! different paths is expected and harmless.

use crate::algorithm::bitset::TileDomain;
use crate::algorithm::model::CompatibilityModel;
use crate::algorithm::scheduler::EntropyQueue;
use crate::analysis::weights::{Histogram, entropy};
use crate::spatial::Grid;
use crate::spatial::direction::{DIRECTION_COUNT, STEP_RIGHT, rotate_quarter, translate};
use std::collections::VecDeque;

/// A cell's domain became empty: the current attempt cannot be completed
///
/// Attempt-local and recoverable; the executor reacts by discarding the
/// attempt state and restarting, never by surfacing this to the caller
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contradiction {
    /// Position whose domain was emptied
    pub position: [i32; 2],
}

/// Shrink neighbouring domains transitively after a change at `origin`
///
/// For each worklist position, each of the four cardinal neighbours that is
/// inside the grid and not yet permanently set has its domain intersected
/// with the support mask of the position's current domain. Unchanged
/// neighbours stop the spread in that direction; shrunk neighbours are
/// rescheduled with their new entropy and requeued for propagation.
///
/// # Errors
///
/// Returns [`Contradiction`] as soon as any neighbour's domain is emptied;
/// the wave is left in its partially propagated state for the executor to
/// discard.
pub fn propagate(
    model: &CompatibilityModel,
    histogram: &Histogram,
    generated: &Grid<Option<usize>>,
    wave: &mut Grid<TileDomain>,
    queue: &mut EntropyQueue,
    origin: [i32; 2],
) -> Result<(), Contradiction> {
    // A single-tile model carries no adjacency observations at all; its empty
    // compatibility sets would read as exclusions and empty every neighbour,
    // even though a one-tile wave has no uncertainty left to resolve.
    if model.tile_count() <= 1 {
        return Ok(());
    }

    let mut pending = VecDeque::new();
    pending.push_back(origin);

    while let Some(position) = pending.pop_front() {
        let Some(available) = wave.get(position).cloned() else {
            continue;
        };

        let mut step = STEP_RIGHT;
        for direction in 0..DIRECTION_COUNT {
            let neighbour = translate(position, step);
            step = rotate_quarter(step);

            if !wave.inside(neighbour) {
                continue;
            }
            if generated.get(neighbour).copied().flatten().is_some() {
                continue;
            }

            let mask = model.support_mask(direction, &available);
            let Some(domain) = wave.get_mut(neighbour) else {
                continue;
            };

            let narrowed = domain.intersection(&mask);
            if narrowed == *domain {
                continue;
            }
            if narrowed.is_empty() {
                return Err(Contradiction {
                    position: neighbour,
                });
            }

            let h = entropy(histogram, &narrowed);
            *domain = narrowed;
            queue.update(neighbour, h);
            pending.push_back(neighbour);
        }
    }

    Ok(())
}
