pub mod constants;
pub mod string_utils;

pub use constants::*;
pub use string_utils::{body_preview, safe_truncate_chars};
