pub mod match_results;
pub mod matches;
pub mod players;
pub mod sessions;
pub mod teams;
