/// Result of a single call to the text-generation collaborator.
///
/// Every failure (unreachable service, model error, timeout, bad payload)
/// collapses into `Unavailable`; callers pick their own fallback text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Success(String),
    Unavailable,
}

impl Generation {
    pub fn or_fallback(self, fallback: impl FnOnce() -> String) -> String {
        match self {
            Generation::Success(text) => text,
            Generation::Unavailable => fallback(),
        }
    }
}

/// Which copy to use when composing a recipe description.
///
/// `/get_recipe` and `/chat` word their no-match message and LLM fallback
/// differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeStyle {
    Recipe,
    Chat,
}
