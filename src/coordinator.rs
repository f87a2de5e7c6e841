//! Session coordinator — owns the session lifecycle end to end.
//!
//! DESIGN
//! ======
//! The coordinator is the sole writer of the session cache and the sole
//! consumer of the identity bridge; the guard and the entry view only
//! read the cache. Construction settles the initial state: a cached
//! record makes the session `Ready` at once without consulting the
//! provider, while a cold cache enters `Syncing` and watches the
//! provider's auth stream until its first word arrives.
//!
//! ORDERING
//! ========
//! `login` persists the principal before navigating, so the guard on
//! the protected route sees the record the moment it runs. `logout`
//! clears the cache before the provider round-trip, so local sign-out
//! never waits on the network.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::bridge::{AuthState, IdentityBridge};
use crate::routing::{Destination, Navigator};
use crate::store::SessionStore;

// =============================================================================
// PHASE
// =============================================================================

/// Lifecycle phase of the session coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Construction has not settled the initial state yet.
    Uninitialized,
    /// Cache was cold; awaiting the provider's first notification.
    Syncing,
    /// Session state is settled, signed in or signed out.
    Ready,
}

// =============================================================================
// COORDINATOR
// =============================================================================

/// Orchestrates cache, bridge, and navigation. Cheap to clone; clones
/// share all state.
#[derive(Clone)]
pub struct SessionCoordinator {
    store: Arc<dyn SessionStore>,
    bridge: Arc<dyn IdentityBridge>,
    navigator: Arc<dyn Navigator>,
    phase: Arc<watch::Sender<Phase>>,
}

impl SessionCoordinator {
    /// Build the coordinator and settle the initial session state.
    ///
    /// With a cached record the coordinator is `Ready` immediately and
    /// the provider is never consulted. With a cold cache it enters
    /// `Syncing` and watches the provider's auth stream: every
    /// `Authenticated` notification is persisted (the first one flips
    /// the phase to `Ready`), while `Unauthenticated` is logged and
    /// changes nothing — a provider-side sign-out never clears the
    /// local cache.
    ///
    /// # Panics
    ///
    /// Panics when the cache is cold and no tokio runtime is active,
    /// since the provider watcher must be spawned.
    #[must_use]
    pub fn new(
        store: Arc<dyn SessionStore>,
        bridge: Arc<dyn IdentityBridge>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (phase, _) = watch::channel(Phase::Uninitialized);
        let coordinator = Self {
            store,
            bridge,
            navigator,
            phase: Arc::new(phase),
        };
        coordinator.initialize();
        coordinator
    }

    fn initialize(&self) {
        if let Some(principal) = self.store.get() {
            info!(uid = %principal.uid, "session restored from cache");
            self.phase.send_replace(Phase::Ready);
            return;
        }

        debug!("session cache cold; watching provider auth stream");
        self.phase.send_replace(Phase::Syncing);

        let store = self.store.clone();
        let phase = self.phase.clone();
        let mut updates = self.bridge.auth_state();
        // Detached on purpose: the watcher ends when the bridge drops
        // its sender side.
        tokio::spawn(async move {
            loop {
                let state = updates.borrow_and_update().clone();
                match state {
                    AuthState::Authenticated(principal) => {
                        store.put(&principal);
                        phase.send_replace(Phase::Ready);
                        info!(uid = %principal.uid, "session cached from provider notification");
                    }
                    AuthState::Unauthenticated => {
                        debug!("provider reports no session; cache untouched");
                    }
                }
                if updates.changed().await.is_err() {
                    debug!("auth stream closed; session watcher exiting");
                    break;
                }
            }
        });
    }

    /// Run the provider's interactive sign-in flow.
    ///
    /// On success the principal is cached before any navigation, the
    /// phase becomes `Ready`, and the user lands in the protected area.
    /// On failure the attempt is logged and nothing changes; the user
    /// stays on the entry view.
    pub async fn login(&self) {
        match self.bridge.interactive_sign_in().await {
            Ok(principal) => {
                self.store.put(&principal);
                self.phase.send_replace(Phase::Ready);
                info!(uid = %principal.uid, "signed in");
                self.navigator.navigate(Destination::Protected);
            }
            Err(e) => {
                warn!(error = %e, "interactive sign-in failed");
            }
        }
    }

    /// Sign out locally, then provider-side.
    ///
    /// The cache is cleared before the provider call, and the entry
    /// navigation fires once sign-out settles regardless of its
    /// outcome — a provider failure cannot keep the user signed in
    /// locally.
    pub async fn logout(&self) {
        self.store.clear();
        if let Err(e) = self.bridge.sign_out().await {
            debug!(error = %e, "provider sign-out failed; session already cleared locally");
        }
        info!("signed out");
        self.navigator.navigate(Destination::Entry);
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    /// Subscribe to phase transitions. A fresh receiver observes the
    /// current phase immediately via `borrow_and_update`.
    #[must_use]
    pub fn phase_updates(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }
}

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod tests;
