//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod match_repo;
pub mod match_result_repo;
pub mod player_repo;
pub mod team_repo;
pub mod user_repo;

pub use match_repo::MatchRepo;
pub use match_result_repo::MatchResultRepo;
pub use player_repo::PlayerRepo;
pub use team_repo::TeamRepo;
pub use user_repo::UserRepo;
