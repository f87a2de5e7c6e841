use std::sync::Arc;

use super::*;

/// Minimal bridge double: a fixed auth stream, scripted call results.
struct StaticBridge {
    state: watch::Sender<AuthState>,
}

impl StaticBridge {
    fn new(initial: AuthState) -> Self {
        let (state, _) = watch::channel(initial);
        Self { state }
    }
}

#[async_trait::async_trait]
impl IdentityBridge for StaticBridge {
    fn auth_state(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    async fn interactive_sign_in(&self) -> Result<Principal, AuthFailure> {
        Err(AuthFailure::Provider("not scripted".into()))
    }

    async fn sign_out(&self) -> Result<(), SignOutFailure> {
        Ok(())
    }
}

// =============================================================================
// AUTH STATE
// =============================================================================

#[test]
fn principal_accessor_matches_variant() {
    let alice = Principal::new("alice");

    assert_eq!(AuthState::Unauthenticated.principal(), None);
    assert_eq!(
        AuthState::Authenticated(alice.clone()).principal(),
        Some(&alice)
    );
}

#[test]
fn authenticated_states_compare_by_principal() {
    let a = AuthState::Authenticated(Principal::new("alice"));
    let b = AuthState::Authenticated(Principal::new("alice"));
    let c = AuthState::Authenticated(Principal::new("bob"));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, AuthState::Unauthenticated);
}

// =============================================================================
// STREAM CONTRACT
// =============================================================================

#[test]
fn fresh_receiver_observes_current_state_immediately() {
    let bridge: Arc<dyn IdentityBridge> =
        Arc::new(StaticBridge::new(AuthState::Authenticated(Principal::new("alice"))));

    let mut rx = bridge.auth_state();

    assert_eq!(
        *rx.borrow_and_update(),
        AuthState::Authenticated(Principal::new("alice"))
    );
}

#[tokio::test]
async fn receiver_wakes_on_provider_transition() {
    let bridge = StaticBridge::new(AuthState::Unauthenticated);
    let mut rx = bridge.auth_state();
    assert_eq!(*rx.borrow_and_update(), AuthState::Unauthenticated);

    bridge
        .state
        .send(AuthState::Authenticated(Principal::new("alice")))
        .expect("receiver alive");

    rx.changed().await.expect("sender alive");
    assert_eq!(
        *rx.borrow_and_update(),
        AuthState::Authenticated(Principal::new("alice"))
    );
}

#[tokio::test]
async fn rapid_transitions_coalesce_to_latest_state() {
    let bridge = StaticBridge::new(AuthState::Unauthenticated);
    let mut rx = bridge.auth_state();
    assert_eq!(*rx.borrow_and_update(), AuthState::Unauthenticated);

    bridge
        .state
        .send(AuthState::Authenticated(Principal::new("alice")))
        .expect("receiver alive");
    bridge.state.send(AuthState::Unauthenticated).expect("receiver alive");

    rx.changed().await.expect("sender alive");
    assert_eq!(*rx.borrow_and_update(), AuthState::Unauthenticated);
}

// =============================================================================
// ERROR DISPLAY
// =============================================================================

#[test]
fn auth_failure_messages_name_the_cause() {
    assert_eq!(
        AuthFailure::Cancelled("popup_closed".into()).to_string(),
        "sign-in cancelled: popup_closed"
    );
    assert_eq!(
        AuthFailure::Rejected("account disabled".into()).to_string(),
        "sign-in rejected: account disabled"
    );
    assert_eq!(
        AuthFailure::Provider("network down".into()).to_string(),
        "provider error: network down"
    );
}

#[test]
fn sign_out_failure_message_carries_the_reason() {
    let failure = SignOutFailure { reason: "token expired".into() };
    assert_eq!(failure.to_string(), "provider sign-out failed: token expired");
}
