//! Row models and request DTOs.
//!
//! Every nullable column is coalesced in SQL, so the structs carry plain
//! values and serialize without `null`s.

pub mod item;
pub mod quiz;
pub mod recipient;
pub mod theme;

pub use item::Item;
pub use quiz::Quiz;
pub use recipient::RecipientRequest;
pub use theme::Theme;
