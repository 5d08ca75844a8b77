// ATS scoring engine.
// Vocabulary → keyword extraction → set comparison → weighted score + suggestions.
// Everything below `handlers` is synchronous and free of HTTP types.

pub mod comparator;
pub mod engine;
pub mod experience;
pub mod extractor;
pub mod formatting;
pub mod handlers;
pub mod suggestions;
pub mod vocabulary;
