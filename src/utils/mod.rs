//! Supporting utilities.
//!
//! - [`fs`] - atomic output writes and directory creation

pub mod fs;

pub use fs::{atomic_write, ensure_dir, safe_write};
