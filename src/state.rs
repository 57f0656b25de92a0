//! Transient copy-confirmation state for the quick-start snippet.

/// Two-state machine (idle / confirmed) with a generation counter that
/// supersedes pending resets.
///
/// Every successful copy bumps the generation and hands the new value to
/// the scheduled reset as its token. A reset only fires if its token is
/// still current, so rapid re-copies restart the confirmation window
/// instead of stacking timers, and teardown invalidates whatever is still
/// pending.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyConfirmation {
    confirmed: bool,
    generation: u64,
}

impl CopyConfirmation {
    /// Enter the confirmed state. Returns the token the scheduled reset
    /// must present to [`expire`](Self::expire).
    pub fn confirm(&mut self) -> u64 {
        self.confirmed = true;
        self.generation += 1;
        self.generation
    }

    /// Drop back to idle if `token` is still the live generation. Stale
    /// tokens (superseded by a later copy or by [`cancel`](Self::cancel))
    /// leave the state untouched.
    pub fn expire(&mut self, token: u64) {
        if token == self.generation {
            self.confirmed = false;
        }
    }

    /// Invalidate any pending reset. Called on widget teardown.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_idle() {
        assert!(!CopyConfirmation::default().is_confirmed());
    }

    #[test]
    fn confirm_then_expire_round_trips() {
        let mut state = CopyConfirmation::default();
        let token = state.confirm();
        assert!(state.is_confirmed());
        state.expire(token);
        assert!(!state.is_confirmed());
    }

    #[test]
    fn repeated_copies_restart_the_window() {
        let mut state = CopyConfirmation::default();
        let first = state.confirm();
        let second = state.confirm();

        // The first copy's reset fires while the second is still pending.
        state.expire(first);
        assert!(state.is_confirmed(), "stale reset must not end the window");

        state.expire(second);
        assert!(!state.is_confirmed());
    }

    #[test]
    fn failed_copy_never_confirms() {
        // A failed clipboard write never calls confirm, so the flag is
        // whatever it was before.
        let state = CopyConfirmation::default();
        assert!(!state.is_confirmed());
    }

    #[test]
    fn cancel_orphans_the_pending_reset() {
        let mut state = CopyConfirmation::default();
        let token = state.confirm();
        state.cancel();

        let before = state;
        state.expire(token);
        assert_eq!(state, before, "reset after cancel must mutate nothing");
    }

    #[test]
    fn expire_with_unknown_token_is_a_no_op() {
        let mut state = CopyConfirmation::default();
        let token = state.confirm();
        state.expire(token + 1);
        assert!(state.is_confirmed());
    }
}
