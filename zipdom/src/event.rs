/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The value of an input element changed
    Input { target: String, value: String },
    /// Mouse click. `target` is the deepest element under the pointer, if any
    Click { target: Option<String> },
    /// A form was submitted
    Submit { target: String },
}

impl Event {
    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
        }
    }

    /// Click that landed on no element at all.
    pub fn click_nowhere() -> Self {
        Self::Click { target: None }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Self::Submit {
            target: target.into(),
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Input { target, .. } | Self::Submit { target } => Some(target),
            Self::Click { target } => target.as_deref(),
        }
    }
}
