//! Champion draft recommendations for a five-role team draft.
//!
//! Load the reference data with [`data::repository::Dataset::load`], build a
//! [`DraftEngine`] once and query it with the current picks and bans.

pub mod analysis;
pub mod config;
pub mod data;
pub mod display;
pub mod draft;
pub mod error;
pub mod i18n;

pub use analysis::recommender::{DraftEngine, Recommendation, ROLES};
pub use data::repository::Dataset;
pub use draft::{DraftState, Side};
pub use error::AppError;
