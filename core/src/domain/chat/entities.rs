/// What a free-text chat message is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Looks like a list of ingredients; route to the matcher.
    Ingredients,
    Chat,
}
