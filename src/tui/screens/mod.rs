//! TUI screen drawing.

pub(crate) mod browse;
pub(crate) mod detail;
