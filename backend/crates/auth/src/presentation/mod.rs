//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and gate middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthenticatedUser, GateState, require_session};
pub use router::auth_router;
