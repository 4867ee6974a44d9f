//! Reading the signed-in identity.
//!
//! Signing users in is left to an external login system; this module only
//! knows where that system leaves the user in the session.

mod session;

pub use session::{resolve_identity, SESSION_USER_KEY};
