pub mod category;
pub mod emoji;

pub use category::*;
pub use emoji::*;

/// Path of the custom emoji listing endpoint on a Mastodon-compatible server
pub const CUSTOM_EMOJIS_PATH: &str = "/api/v1/custom_emojis";
