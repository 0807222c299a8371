pub mod api;
pub mod button;
pub mod error;
pub mod handler;

pub use button::{ButtonLabel, Container, LikeButton, MemoryButton, Notice};
pub use error::{Error, ErrorKind};
pub use handler::LikeToggleHandler;
