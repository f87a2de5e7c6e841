//! Identity bridge — the boundary to the external identity provider.
//!
//! DESIGN
//! ======
//! The provider is modeled as three capabilities: a subscribable
//! auth-state stream, an interactive sign-in flow, and a sign-out call.
//! The stream is a `tokio::sync::watch` channel so that a fresh
//! subscriber always observes the provider's current state immediately
//! and then wakes on every later transition; rapid intermediate flips
//! coalesce to the latest state, which is the right semantics for a
//! state stream (it is not an event log).
//!
//! No real provider protocol ships here. The embedding application
//! implements the trait against its provider SDK; tests implement it
//! with scripted doubles.

use tokio::sync::watch;

use crate::principal::Principal;

// =============================================================================
// AUTH STATE
// =============================================================================

/// Provider-side authentication state, as reported on the auth stream.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// No provider session exists.
    Unauthenticated,
    /// A provider session exists for this principal.
    Authenticated(Principal),
}

impl AuthState {
    /// The signed-in principal, if any.
    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Authenticated(principal) => Some(principal),
            Self::Unauthenticated => None,
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors produced by the interactive sign-in flow.
#[derive(Debug, thiserror::Error)]
pub enum AuthFailure {
    /// The user dismissed the provider's interactive flow.
    #[error("sign-in cancelled: {0}")]
    Cancelled(String),

    /// The provider rejected the credentials or the account.
    #[error("sign-in rejected: {0}")]
    Rejected(String),

    /// The provider itself failed (network, outage, misconfiguration).
    #[error("provider error: {0}")]
    Provider(String),
}

/// Error produced when provider-side sign-out fails.
///
/// Callers treat this as advisory: the local session is already gone by
/// the time sign-out runs, so the failure is logged, never surfaced.
#[derive(Debug, thiserror::Error)]
#[error("provider sign-out failed: {reason}")]
pub struct SignOutFailure {
    pub reason: String,
}

// =============================================================================
// IDENTITY BRIDGE TRAIT
// =============================================================================

/// Async boundary to the identity provider. Enables mocking in tests.
#[async_trait::async_trait]
pub trait IdentityBridge: Send + Sync {
    /// Subscribe to the provider's auth-state stream.
    ///
    /// A fresh receiver observes the current state at once (via
    /// `borrow_and_update`) and wakes on each subsequent transition.
    fn auth_state(&self) -> watch::Receiver<AuthState>;

    /// Run the provider's interactive sign-in flow to completion.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthFailure`] if the user cancels, the provider
    /// rejects the attempt, or the provider itself fails.
    async fn interactive_sign_in(&self) -> Result<Principal, AuthFailure>;

    /// Invalidate the provider-side session.
    ///
    /// # Errors
    ///
    /// Returns a [`SignOutFailure`] if the provider call fails; the
    /// local cache is independent of this outcome.
    async fn sign_out(&self) -> Result<(), SignOutFailure>;
}

#[cfg(test)]
#[path = "bridge_test.rs"]
mod tests;
