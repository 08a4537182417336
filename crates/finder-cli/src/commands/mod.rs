//! Command implementations.

pub mod extract;
pub mod health;
pub mod profile;
pub mod queries;
pub mod recommend;

pub use self::extract::execute_extract;
pub use self::health::execute_health;
pub use self::profile::execute_profile;
pub use self::queries::execute_queries;
pub use self::recommend::execute_recommend;
