use super::error::{Error, ErrorKind, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

pub const CAFE_ID_ATTRIBUTE: &str = "cafe-data-id";
pub const USER_ID_ATTRIBUTE: &str = "logged-user";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonLabel {
    Like,
    Liked,
}

impl ButtonLabel {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Like => "Like",
            Self::Liked => "Liked",
        }
    }
}

impl fmt::Display for ButtonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Non-blocking message shown next to the button when a toggle fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&Error> for Notice {
    fn from(err: &Error) -> Self {
        let message = match err.kind() {
            ErrorKind::Network => "Could not reach the server, please try again.",
            ErrorKind::Parse => "The server sent an unexpected response.",
            ErrorKind::Server => "The server could not update your like.",
            ErrorKind::Input => "This cafe cannot be liked right now.",
        };

        Self {
            kind: err.kind(),
            message: message.to_string(),
        }
    }
}

/// Element holding the cafe and user attributes the handler reads on click.
#[derive(Clone, Debug, Default)]
pub struct Container {
    attributes: HashMap<String, String>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_cafe(cafe_id: impl ToString, user_id: impl ToString) -> Self {
        Self::new()
            .with_attribute(CAFE_ID_ATTRIBUTE, cafe_id)
            .with_attribute(USER_ID_ATTRIBUTE, user_id)
    }

    pub fn with_attribute(mut self, name: &str, value: impl ToString) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn cafe_id(&self) -> Result<i64> {
        let raw = self.attr(CAFE_ID_ATTRIBUTE);
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .ok_or_else(|| Error::InvalidAttribute {
                name: CAFE_ID_ATTRIBUTE,
                value: raw.map(str::to_string),
            })
    }

    /// Taken verbatim; only absence is rejected.
    pub fn user_id(&self) -> Result<String> {
        self.attr(USER_ID_ATTRIBUTE)
            .map(str::to_string)
            .ok_or(Error::InvalidAttribute {
                name: USER_ID_ATTRIBUTE,
                value: None,
            })
    }
}

/// The display surface a [`LikeToggleHandler`](super::handler::LikeToggleHandler) drives.
pub trait LikeButton: Send + Sync {
    fn container(&self) -> Container;
    fn label(&self) -> ButtonLabel;
    fn set_label(&self, label: ButtonLabel);
    fn notify(&self, notice: Notice);
}

#[derive(Debug)]
struct ButtonState {
    label: ButtonLabel,
    notices: Vec<Notice>,
}

/// In-process button. Clones share the same label.
#[derive(Clone, Debug)]
pub struct MemoryButton {
    container: Container,
    state: Arc<Mutex<ButtonState>>,
}

impl MemoryButton {
    pub fn new(container: Container, label: ButtonLabel) -> Self {
        Self {
            container,
            state: Arc::new(Mutex::new(ButtonState {
                label,
                notices: vec![],
            })),
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.lock().notices.clone()
    }

    fn lock(&self) -> MutexGuard<'_, ButtonState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LikeButton for MemoryButton {
    fn container(&self) -> Container {
        self.container.clone()
    }

    fn label(&self) -> ButtonLabel {
        self.lock().label
    }

    fn set_label(&self, label: ButtonLabel) {
        self.lock().label = label;
    }

    fn notify(&self, notice: Notice) {
        self.lock().notices.push(notice);
    }
}
