//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&MySqlPool` as the first argument. Column lists alias the
//! upper-case schema names to the snake_case model fields and coalesce
//! nullable columns.

pub mod item_repo;
pub mod quiz_repo;
pub mod recipient_repo;
pub mod theme_repo;

pub use item_repo::ItemRepo;
pub use quiz_repo::QuizRepo;
pub use recipient_repo::RecipientRepo;
pub use theme_repo::ThemeRepo;
