//! Terminal 2048 with special tiles (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_2048p::{core,input,term,types}` and hosts the
//! interactive binary.

pub use tui_2048p_core as core;
pub use tui_2048p_input as input;
pub use tui_2048p_term as term;
pub use tui_2048p_types as types;
