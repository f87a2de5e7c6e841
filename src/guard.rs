//! Access guard — synchronous gate in front of the protected area.
//!
//! DESIGN
//! ======
//! The guard consults only the session cache, never the provider: a
//! cached record admits, an absent one redirects to the entry view.
//! That makes the decision synchronous and free of network latency, at
//! the cost of trusting a record until logout clears it — a
//! provider-side revocation is not noticed here.

use std::sync::Arc;

use tracing::debug;

use crate::routing::{Destination, Navigator};
use crate::store::SessionStore;

/// Allow/deny predicate over the session cache, with redirect-on-deny.
pub struct AccessGuard {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl AccessGuard {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Decide whether the protected area may be entered right now.
    ///
    /// Returns `true` when a session record is cached. Returns `false`
    /// and issues exactly one entry redirect when it is not. Each denied
    /// call redirects again; the guard keeps no memory between calls.
    #[must_use]
    pub fn check(&self) -> bool {
        match self.store.get() {
            Some(principal) => {
                debug!(uid = %principal.uid, "access allowed");
                true
            }
            None => {
                debug!("access denied; redirecting to entry");
                self.navigator.navigate(Destination::Entry);
                false
            }
        }
    }

    /// Entry-view fast path: skip sign-in when a session is already
    /// cached.
    ///
    /// Returns `true` and navigates to the protected area when a record
    /// is present; otherwise returns `false` and leaves the user on the
    /// entry view.
    #[must_use]
    pub fn redirect_if_signed_in(&self) -> bool {
        match self.store.get() {
            Some(principal) => {
                debug!(uid = %principal.uid, "already signed in; redirecting to protected area");
                self.navigator.navigate(Destination::Protected);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
