//! Latest-Operation Guard
//!
//! Single-slot handle for async view work: starting a new operation hands
//! out a fresh token and invalidates every earlier one. A task checks its
//! token after each await and applies results only while still current, so
//! a slow stale response can never overwrite a newer one.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatestSlot {
    current: u64,
}

impl LatestSlot {
    /// Start a new operation, invalidating all earlier tokens
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Whether `token` still identifies the latest operation
    pub fn is_current(&self, token: u64) -> bool {
        self.current == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_current() {
        let mut slot = LatestSlot::default();
        let token = slot.begin();
        assert!(slot.is_current(token));
    }

    #[test]
    fn newer_operation_invalidates_older_token() {
        let mut slot = LatestSlot::default();
        let first = slot.begin();
        let second = slot.begin();
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }

    #[test]
    fn stale_response_is_discarded_regardless_of_arrival_order() {
        // two requests issued back to back; the first "arrives" last
        let mut slot = LatestSlot::default();
        let first = slot.begin();
        let second = slot.begin();

        let mut displayed: Option<&str> = None;
        // second response lands first and applies
        if slot.is_current(second) {
            displayed = Some("second");
        }
        // first response lands late and must not apply
        if slot.is_current(first) {
            displayed = Some("first");
        }
        assert_eq!(displayed, Some("second"));
    }
}
