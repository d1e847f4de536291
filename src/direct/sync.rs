//! Sync Word Matching
//!
//! Tracks the most recent 32 received bits and reports when they match the
//! configured sync word. A zero-length sync word means the stream is always
//! in sync.

use crate::error::{RadioError, RadioResult};
use crate::types::SyncWord;

/// Synchronization state of the direct-mode receiver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncState {
    /// Pattern being searched for
    word: SyncWord,
    /// Most recently received bits, newest in the LSB
    shift: u32,
    /// Pattern found, subsequent bits are payload
    acquired: bool,
}

impl SyncState {
    /// Create a state with no sync word (always acquired)
    #[must_use]
    pub const fn new() -> Self {
        Self::with_word(SyncWord::NONE)
    }

    /// Create a fresh state searching for `word`
    #[must_use]
    pub const fn with_word(word: SyncWord) -> Self {
        Self {
            word,
            shift: 0,
            acquired: word.is_empty(),
        }
    }

    /// Replace the pattern from raw parts
    ///
    /// Fails with [`RadioError::InvalidSyncWord`] for lengths above 32 bits,
    /// leaving the state untouched.
    pub fn configure(&mut self, value: u32, len: u8) -> RadioResult<()> {
        let word = SyncWord::new(value, len).ok_or(RadioError::InvalidSyncWord)?;
        *self = Self::with_word(word);
        Ok(())
    }

    /// Force re-synchronization (no-op without a sync word)
    pub fn drop_sync(&mut self) {
        if !self.word.is_empty() {
            self.acquired = false;
            self.shift = 0;
        }
    }

    /// Shift one bit into the window
    ///
    /// Returns whether the stream is in sync after this bit.
    pub fn shift_in(&mut self, bit: bool) -> bool {
        self.shift = (self.shift << 1) | u32::from(bit);
        if self.word.matches(self.shift) {
            self.acquired = true;
        }
        self.acquired
    }

    /// Get the configured pattern
    #[must_use]
    pub const fn word(&self) -> SyncWord {
        self.word
    }

    /// Get the shift register (meaningful only while searching)
    #[must_use]
    pub const fn shift_register(&self) -> u32 {
        self.shift
    }

    /// Check if the pattern has been found
    #[must_use]
    pub const fn is_acquired(&self) -> bool {
        self.acquired
    }
}

impl Default for SyncState {
    fn default() -> Self {
        Self::new()
    }
}
