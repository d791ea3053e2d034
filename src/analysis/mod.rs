pub mod composition;
pub mod explain;
pub mod index;
pub mod matchup;
pub mod recommender;
pub mod synergy;
pub mod weights;
