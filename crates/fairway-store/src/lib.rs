pub mod error;
pub mod memory;
pub mod repository;
pub mod watch;

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use repository::{
    CourseRepository, MatchRepository, PlayerRepository, ScorecardChange, ScorecardRepository,
};
