/// Which registration field a validator is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Username,
    Password,
}

pub const VALIDATION_FALLBACK: &str = "An error occurred. Please try again.";

impl FieldKind {
    /// Query parameter carrying the raw field value.
    pub fn query_param(self) -> &'static str {
        match self {
            FieldKind::Username => "username",
            FieldKind::Password => "password",
        }
    }

    /// Prompt shown for an empty field; no request is made in that case.
    pub fn empty_prompt(self) -> &'static str {
        match self {
            FieldKind::Username => "Please enter a username",
            FieldKind::Password => "Please enter a password",
        }
    }

    /// Split the server text into the lines to render, with a line break
    /// between consecutive entries. Only password messages are multi-line.
    /// HTML entities in the text are decoded; the lines are shown as text.
    pub fn message_lines(self, raw: &str) -> Vec<String> {
        let text = html_escape::decode_html_entities(raw);
        match self {
            FieldKind::Username => vec![text.into_owned()],
            FieldKind::Password => text.split("\r\n").map(str::to_string).collect(),
        }
    }
}

/// What a validator's message slot currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationMessage {
    #[default]
    Blank,
    Prompt(&'static str),
    Server(Vec<String>),
    Failed,
}

impl ValidationMessage {
    pub fn lines(&self) -> Vec<String> {
        match self {
            ValidationMessage::Blank => Vec::new(),
            ValidationMessage::Prompt(prompt) => vec![prompt.to_string()],
            ValidationMessage::Server(lines) => lines.clone(),
            ValidationMessage::Failed => vec![VALIDATION_FALLBACK.to_string()],
        }
    }
}
