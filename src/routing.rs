//! Routing boundary — where the coordinator and guard send the user.
//!
//! Only two destinations exist in the session lifecycle: the entry view
//! (sign-in) and the protected area behind the guard. The [`Navigator`]
//! trait is the side-effect seam; the embedding application maps
//! destinations onto its actual router.

/// Where a redirect lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The sign-in view shown to signed-out users.
    Entry,
    /// The protected area reachable only through the guard.
    Protected,
}

/// Performs navigation. Enables mocking in tests.
pub trait Navigator: Send + Sync {
    /// Send the user to `destination`.
    fn navigate(&self, destination: Destination);
}
