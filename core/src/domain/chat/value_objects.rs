pub const EMPTY_QUERY_MESSAGE: &str = "Please provide a query.";
pub const CHAT_NO_MATCH_MESSAGE: &str =
    "Sorry, I couldn't find a recipe with those ingredients. Try something else!";

#[derive(Debug, Clone)]
pub struct ChatInput {
    pub query: String,
}

/// A fixed reply returned when the whole message equals one of `phrases`.
#[derive(Debug, Clone, Copy)]
pub struct CannedReply {
    pub phrases: &'static [&'static str],
    pub response: &'static str,
}

/// Checked in order: greetings, then status questions, then farewells.
pub const CANNED_REPLIES: [CannedReply; 3] = [
    CannedReply {
        phrases: &[
            "hi",
            "hello",
            "hey",
            "greetings",
            "good morning",
            "good afternoon",
            "good evening",
        ],
        response: "Hello! How can I help you today? Try entering some ingredients for recipe suggestions!",
    },
    CannedReply {
        phrases: &["how are you", "how are you?", "how's it going"],
        response: "I'm doing great, thanks! Ready to suggest some recipes. What ingredients do you have?",
    },
    CannedReply {
        phrases: &["bye", "goodbye", "see you", "thanks", "thank you"],
        response: "Goodbye! Come back anytime for more recipe ideas.",
    },
];

/// Exact match against the canned phrases, after trimming and lower-casing.
pub fn canned_reply(query: &str) -> Option<&'static str> {
    let normalized = query.trim().to_lowercase();
    CANNED_REPLIES
        .iter()
        .find(|reply| reply.phrases.contains(&normalized.as_str()))
        .map(|reply| reply.response)
}
