//! Domain model types (pure).

pub mod brand;
pub mod error;
pub mod key_action;

pub use brand::{looped, BrandEntry, Logo, LogoFactory, IMAGE_PLACEHOLDER};
pub use error::AppError;
pub use key_action::KeyAction;
