//! Two-track pair classification.
//!
//! A neutral particle decaying (or a photon converting) inside the
//! spectrometer produces two oppositely charged tracks that curve into
//! opposite detector halves. Only pairs matching that topology are worth
//! vertexing; everything else is combinatoric background.

use crate::config::FieldSign;
use crate::track::{Track, TrackModel};

/// True when the two tracks populate opposite detector halves.
pub fn opposite_halves<A: TrackModel, B: TrackModel>(a: &Track<A>, b: &Track<B>) -> bool {
    a.top_half() != b.top_half()
}

/// True when the reconstructed charges sum to zero.
pub fn opposite_charge<A: TrackModel, B: TrackModel>(a: &Track<A>, b: &Track<B>) -> bool {
    a.charge + b.charge == 0
}

/// Both topology gates at once: the precondition for vertexing.
pub fn is_v0_candidate<A: TrackModel, B: TrackModel>(a: &Track<A>, b: &Track<B>) -> bool {
    opposite_halves(a, b) && opposite_charge(a, b)
}

/// Deterministic categorisation bucket from a track's half and charge.
///
/// The numbering is a downstream contract (result categorisation keys off
/// it) and carries no physics meaning beyond bucketing:
/// top/positive → 6, top/negative → 4, bottom/positive → 2,
/// bottom/negative → 0.
pub fn parity_bucket(top_half: bool, charge: i32) -> i32 {
    match (top_half, charge > 0) {
        (true, true) => 6,
        (true, false) => 4,
        (false, true) => 2,
        (false, false) => 0,
    }
}

/// A candidate two-track pair with its derived topology flags.
#[derive(Debug, Clone, Copy)]
pub struct TrackPair<'a, A: TrackModel, B: TrackModel> {
    pub a: &'a Track<A>,
    pub b: &'a Track<B>,
    pub opposite_halves: bool,
    pub opposite_charge: bool,
}

impl<'a, A: TrackModel, B: TrackModel> TrackPair<'a, A, B> {
    pub fn new(a: &'a Track<A>, b: &'a Track<B>) -> Self {
        Self {
            a,
            b,
            opposite_halves: opposite_halves(a, b),
            opposite_charge: opposite_charge(a, b),
        }
    }

    /// Eligible for vertexing: opposite halves and opposite charge.
    pub fn is_v0_candidate(&self) -> bool {
        self.opposite_halves && self.opposite_charge
    }

    /// Physical charge of track `a` under the given field convention.
    pub fn physical_charge_a(&self, field: FieldSign) -> i32 {
        field.physical_charge(self.a.charge)
    }

    /// Physical charge of track `b` under the given field convention.
    pub fn physical_charge_b(&self, field: FieldSign) -> i32 {
        field.physical_charge(self.b.charge)
    }
}
