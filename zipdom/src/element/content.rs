#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Text field value. Placeholder is shown while the value is empty.
    Input {
        value: String,
        placeholder: Option<String>,
    },
}
