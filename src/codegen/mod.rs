// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-07-08

//! C debug-body generators and the request dispatcher.
//!
//! Both generators are pure renderers: records in, one body string out, no
//! I/O and no state across calls.

pub mod dispatch;
pub mod enums;
pub mod structs;
pub mod template;

pub use dispatch::{dispatch, Kind, Request};
pub use enums::generate_enum_debug;
pub use structs::{generate_struct_debug, DEBUG_FN_PREFIX};
