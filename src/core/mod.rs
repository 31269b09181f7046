//! Core types shared across portfolio.
//!
//! - [`error`] - [`PortfolioError`], [`ErrorContext`] and [`user_friendly_error`]

pub mod error;

pub use error::{ErrorContext, PortfolioError, create_error_context, user_friendly_error};
