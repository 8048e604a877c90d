//! Domain-based type organization
//!
//! - auth_mode: security class table
//! - scan: scan endpoint wire format and scan state
//! - control: rendered network buttons and their container

pub mod auth_mode;
pub mod control;
pub mod scan;

pub use auth_mode::*;
pub use control::*;
pub use scan::*;
