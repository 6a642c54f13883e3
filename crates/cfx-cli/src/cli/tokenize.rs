//! Split a shell line into words.
//!
//! Whitespace separates words. Single quotes take everything literally;
//! double quotes allow `\"` and `\\` escapes. A backslash outside quotes
//! escapes the next character.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),
    #[error("trailing backslash")]
    TrailingBackslash,
}

/// # Errors
///
/// Returns [`TokenizeError`] for an unterminated quote or a trailing
/// backslash.
pub fn split_line(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err(TokenizeError::UnterminatedQuote('\'')),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\')) => current.push(c),
                            Some(c) => {
                                current.push('\\');
                                current.push(c);
                            }
                            None => return Err(TokenizeError::UnterminatedQuote('"')),
                        },
                        Some(c) => current.push(c),
                        None => return Err(TokenizeError::UnterminatedQuote('"')),
                    }
                }
            }
            '\\' => {
                in_word = true;
                current.push(chars.next().ok_or(TokenizeError::TrailingBackslash)?);
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
