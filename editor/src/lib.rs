//! # Simple Writing Editor
//!
//! The client side of the app as a library: the transformation API client,
//! the session/auth gate, the profile store client, and the editor state
//! machine that ties them together. A real frontend (or the `tester`
//! harness) drives this crate; it holds no UI of its own.

pub mod api;
pub mod clipboard;
pub mod contact;
pub mod profiles;
pub mod session;
pub mod workflow;

pub use api::{ApiError, HttpApi, TransformApi};
pub use session::{Action, Gate, Session};
pub use workflow::{Editor, Phase, SubmitOutcome};
