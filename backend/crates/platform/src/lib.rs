//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Session cookie management
//! - Client identification (IP extraction behind reverse proxies)

pub mod client;
pub mod cookie;
