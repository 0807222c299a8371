pub mod modules;
pub mod types;

pub use modules::likes::{
    ButtonLabel, Container, Error, ErrorKind, LikeButton, LikeToggleHandler, MemoryButton, Notice,
};
pub use types::{Config, ConfigError, Context, ToContext};
