use crate::error::{EngineError, Result};
use unicode_general_category::{GeneralCategory, get_general_category};

/// Split `buf` into lower-cased words and sort them byte-wise.
///
/// A word is a maximal run of letters (general category `L`). Everything
/// else, including bytes that are not valid UTF-8, separates words.
///
/// # Errors
///
/// Returns [`EngineError::NoData`] when `buf` contains no letters.
pub fn sorted_tokens(buf: &[u8]) -> Result<Vec<String>> {
    let text = String::from_utf8_lossy(buf);

    let mut tokens: Vec<String> = text
        .split(|c: char| !is_letter(c))
        .filter(|s| !s.is_empty())
        .map(lowercase)
        .collect();

    if tokens.is_empty() {
        return Err(EngineError::NoData);
    }

    // `String` orders by its UTF-8 bytes
    tokens.sort_unstable();
    log::debug!("tokenized {} words", tokens.len());
    Ok(tokens)
}

/// Unicode general category `L`: `Lu`, `Ll`, `Lt`, `Lm` or `Lo`.
#[must_use]
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// One-to-one lower-casing: a letter whose lower case expands to several
/// characters keeps only the first of them.
fn lowercase(word: &str) -> String {
    word.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}
