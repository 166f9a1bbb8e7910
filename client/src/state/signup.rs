//! Signup form state and the status message shown under it.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

/// Style of the status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Error }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SignupState {
    /// Email input value.
    pub email: String,
    /// Selected activity; empty while the placeholder option is selected.
    pub activity: String,
    pub message: Option<StatusMessage>,
    pub message_visible: bool,
    /// Bumped on every `show_message` so hide timers can tell whether the
    /// message they were scheduled for is still the one on screen.
    pub message_seq: u64,
}

impl SignupState {
    /// Display `message` and return the token its hide timer must present.
    pub fn show_message(&mut self, message: StatusMessage) -> u64 {
        self.message = Some(message);
        self.message_visible = true;
        self.message_seq += 1;
        self.message_seq
    }

    /// Hide the message if it is still the one `seq` was issued for.
    pub fn hide_message(&mut self, seq: u64) -> bool {
        if seq != self.message_seq {
            return false;
        }
        self.message_visible = false;
        true
    }

    /// Clear both form fields, as a native `<form>` reset would.
    pub fn reset_form(&mut self) {
        self.email.clear();
        self.activity.clear();
    }

    /// Drop the selected activity if the selector no longer offers it, so the
    /// stored choice never differs from what the placeholder shows.
    pub fn retain_activity(&mut self, options: &[String]) -> bool {
        if self.activity.is_empty() || options.iter().any(|o| *o == self.activity) {
            return false;
        }
        self.activity.clear();
        true
    }

    /// Class attribute for the message element: the style class, plus
    /// `hidden` when nothing should be shown.
    pub fn message_class(&self) -> String {
        match (&self.message, self.message_visible) {
            (Some(message), true) => message.kind.css_class().to_owned(),
            (Some(message), false) => format!("{} hidden", message.kind.css_class()),
            (None, _) => "hidden".to_owned(),
        }
    }

    pub fn message_text(&self) -> String {
        self.message.as_ref().map(|m| m.text.clone()).unwrap_or_default()
    }
}
