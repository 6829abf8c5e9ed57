//! Overlap detection for the slots of a single day.
//!
//! Every slot occupies the half-open interval `[start, start + 50)`, so a slot
//! ending at 09:50 and another starting at 09:50 do not collide.

use crate::time::end_minutes;

/// True when two 50-minute slots starting at the given minutes share any instant.
pub fn intervals_overlap(a_start: u32, b_start: u32) -> bool {
    a_start < end_minutes(b_start) && b_start < end_minutes(a_start)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Both slots start at the same minute.
    Duplicate,
    Overlap,
}

/// Two colliding slots, as indices into the list that was checked.
/// `first` is the one with the earlier (or equal) start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    pub first: usize,
    pub second: usize,
    pub kind: CollisionKind,
}

/// Finds the earliest pair of colliding slots, given their start minutes.
///
/// Starts are sorted (stable, so equal starts keep list order) and each
/// adjacent pair is compared. Zero or one slot never collides.
pub fn find_collision(starts: &[u32]) -> Option<Collision> {
    if starts.len() <= 1 {
        return None;
    }

    let mut sorted: Vec<(u32, usize)> = starts
        .iter()
        .enumerate()
        .map(|(index, &minutes)| (minutes, index))
        .collect();
    sorted.sort_by_key(|&(minutes, _)| minutes);

    sorted.windows(2).find_map(|pair| {
        let (current, first) = pair[0];
        let (next, second) = pair[1];
        if !intervals_overlap(current, next) {
            return None;
        }
        let kind = if current == next {
            CollisionKind::Duplicate
        } else {
            CollisionKind::Overlap
        };
        Some(Collision { first, second, kind })
    })
}
