//! Feedback for a guess against a known secret

use crate::core::{GuessLine, Word, WordError, classify};

/// Result of classifying one guess
pub struct ClassifyResult {
    pub guess: String,
    pub secret: String,
    pub line: GuessLine,
}

/// Compute the feedback line `guess` earns against `secret`
///
/// # Errors
///
/// Returns `WordError` if either word is not a valid 5-letter word.
pub fn classify_words(guess: &str, secret: &str) -> Result<ClassifyResult, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    Ok(ClassifyResult {
        line: classify(&guess, &secret),
        guess: guess.text().to_string(),
        secret: secret.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_normalises_case() {
        let result = classify_words("ABBCE", "aabac").unwrap();
        assert_eq!(result.guess, "abbce");
        assert_eq!(result.line.to_emoji(), "🟩⬜🟩🟨⬜");
    }

    #[test]
    fn classify_rejects_invalid_words() {
        assert!(classify_words("abc", "aabac").is_err());
        assert!(classify_words("abbce", "a4bac").is_err());
    }
}
