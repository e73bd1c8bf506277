//! Outer surfaces: the interactive console and CSV catalog loading.

pub mod console;
pub mod csv;
