//! # latchkey
//!
//! Session lifecycle for applications that authenticate against an
//! external identity provider: a synchronous session cache, a
//! provider-facing bridge trait, a coordinator that keeps the two in
//! sync, and a route guard that answers "may this user enter?" without
//! touching the network.
//!
//! The crate ships no provider SDK and no router. Both sit behind
//! traits ([`IdentityBridge`], [`Navigator`]) that the embedding
//! application implements; everything here is the orchestration
//! between them.

pub mod bridge;
pub mod coordinator;
pub mod guard;
pub mod principal;
pub mod routing;
pub mod store;

pub use bridge::{AuthFailure, AuthState, IdentityBridge, SignOutFailure};
pub use coordinator::{Phase, SessionCoordinator};
pub use guard::AccessGuard;
pub use principal::Principal;
pub use routing::{Destination, Navigator};
pub use store::{FileStore, MemoryStore, SessionStore};
