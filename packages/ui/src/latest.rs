//! Newest-wins bookkeeping for overlapping async work.

/// Hands out a number to each async round. Only the newest round may apply
/// its result, so a slow earlier response cannot overwrite a newer one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latest {
    round: u64,
}

impl Latest {
    /// Start a round, superseding every earlier one.
    pub fn begin(&mut self) -> u64 {
        self.round += 1;
        self.round
    }

    pub fn is_current(&self, round: u64) -> bool {
        self.round == round
    }
}
