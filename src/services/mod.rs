//! Business logic services
//!
//! Controllers orchestrating multi-repository operations. Each mutating
//! operation either commits fully or rolls back every partial change before
//! returning, so callers never observe a partial state. Functions take the
//! repository aggregate and the event bus explicitly; there is no shared
//! global state.

pub mod catalog;
pub mod loans;
pub mod members;
