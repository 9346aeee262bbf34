//! Presentation helpers for game records.
//!
//! Pure formatting shared by the TUI widgets and the one-shot CLI output.

mod format;
mod requirements;

pub use format::{
    format_rating, platform_icons, release_year, MetacriticTier, PlatformIcon, MAX_PLATFORM_ICONS,
};
pub use requirements::{clean_requirements, truncate_description, DESCRIPTION_LIMIT};
