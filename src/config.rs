/// Default message posted on a user's first issue.
pub const DEFAULT_ISSUE_MESSAGE: &str = "Hi @{{name}}! Thanks for bringing this issue to our \
attention. The community welcomes you and will take a look as soon as possible.";

/// Default message posted on a user's first pull request.
pub const DEFAULT_PR_MESSAGE: &str = "Hi @{{name}}! Congrats on opening your first pull request \
here. The community welcomes you and looks forward to reviewing your contribution.";

/// When should an opened contribution receive a welcome message.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GreetingPolicy {
    /// Post only when this is the author's first contribution of the given kind.
    #[default]
    FirstContribution,
    /// Post on every opened contribution and only log the result of the
    /// first-contribution check.
    Always,
}

/// Configuration of the bot, built from its inputs.
#[derive(Clone, Debug, Default)]
pub struct GreeterConfig {
    /// Message template for opened issues.
    pub issue_message: Option<String>,
    /// Message template for opened pull requests.
    pub pr_message: Option<String>,
    pub policy: GreetingPolicy,
}

impl GreeterConfig {
    /// Message template used for issues. A missing or blank supplied template
    /// falls back to the built-in default.
    pub fn issue_template(&self) -> &str {
        resolve_template(self.issue_message.as_deref(), DEFAULT_ISSUE_MESSAGE)
    }

    /// Message template used for pull requests.
    pub fn pr_template(&self) -> &str {
        resolve_template(self.pr_message.as_deref(), DEFAULT_PR_MESSAGE)
    }
}

fn resolve_template<'a>(supplied: Option<&'a str>, default: &'a str) -> &'a str {
    match supplied {
        Some(template) if !template.trim().is_empty() => template,
        _ => default,
    }
}
