//! Reflected binary Gray code walk.
//!
//! Visits all `2^bits` codes so that consecutive codes differ in exactly one
//! bit. Step 0 is the all-zero code; step `i >= 1` flips bit
//! `i.trailing_zeros()`. The walk lets the table engine update its live
//! assignment with a single flip per row instead of rebuilding it.

/// One step of a [`GrayWalk`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GrayStep {
    /// Bit flipped to reach this code, `None` for the initial code.
    pub flipped: Option<u32>,
    /// The code after the flip.
    pub code: u64,
}

/// Iterator over the Gray code sequence on `bits` bits.
#[derive(Clone, Debug)]
pub struct GrayWalk {
    step: u64,
    total: u64,
}

impl GrayWalk {
    /// Walk over `bits` bits. `bits` must be below 64.
    pub fn new(bits: u32) -> Self {
        GrayWalk {
            step: 0,
            total: 1u64.checked_shl(bits).unwrap_or(u64::MAX),
        }
    }
}

impl Iterator for GrayWalk {
    type Item = GrayStep;

    fn next(&mut self) -> Option<GrayStep> {
        if self.step >= self.total {
            return None;
        }
        let step = self.step;
        self.step += 1;
        let flipped = (step != 0).then(|| step.trailing_zeros());
        Some(GrayStep {
            flipped,
            code: step ^ (step >> 1),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.total - self.step).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
