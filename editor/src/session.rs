//! Session context and the auth gate.
//!
//! One explicit object owns "who is signed in" and "what plan are they on";
//! components read it through a narrow interface instead of ambient state.
//! Gated actions go through [`Session::authorize`]: a signed-out user gets
//! the action back as an explicit [`PendingAction`] token to resume after
//! sign-in, never as a captured closure.

use serde::{Deserialize, Serialize};
use writing::{Profile, Tier, TransformMode};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthedUser {
    pub id: String,
    pub email: String,
}

/// Something the user asked for that requires an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Transform(TransformMode),
    StartWriting,
}

/// Token for an action deferred until after sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAction(Action);

impl PendingAction {
    pub fn action(&self) -> Action {
        self.0
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Gate {
    Allowed(Action),
    Deferred(PendingAction),
}

#[derive(Debug, Default)]
pub struct Session {
    user: Option<AuthedUser>,
    profile: Option<Profile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authed(&self) -> bool {
        self.user.is_some()
    }

    pub fn current_user(&self) -> Option<&AuthedUser> {
        self.user.as_ref()
    }

    pub fn current_tier(&self) -> Option<Tier> {
        self.profile.as_ref().map(|p| p.tier)
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn sign_in(&mut self, user: AuthedUser, profile: Option<Profile>) {
        self.user = Some(user);
        self.profile = profile;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.profile = None;
    }

    /// Gate an action on authentication.
    pub fn authorize(&self, action: Action) -> Gate {
        if self.is_authed() {
            Gate::Allowed(action)
        } else {
            Gate::Deferred(PendingAction(action))
        }
    }

    /// Re-check a deferred action, normally right after sign-in.
    pub fn resume(&self, pending: PendingAction) -> Gate {
        self.authorize(pending.0)
    }
}
