// Résumé upload: turns an uploaded PDF, DOCX or plain-text file into normalized text
// that can be fed to the scoring endpoints.

pub mod handlers;
pub mod parser;
