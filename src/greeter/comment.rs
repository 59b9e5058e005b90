use crate::utils::text::substitute_name;

/// A comment that can be posted to an issue or a pull request.
pub struct Comment {
    text: String,
}

impl Comment {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn render(&self) -> String {
        self.text.clone()
    }
}

/// Builds the welcome comment for the given author from a message template.
///
/// Returns `None` when the resolved message is blank; nothing should be posted
/// in that case.
pub fn welcome_comment(template: &str, author: &str) -> Option<Comment> {
    let text = substitute_name(template, author);
    if text.trim().is_empty() {
        return None;
    }
    Some(Comment::new(text))
}
