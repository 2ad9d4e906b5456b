//! Natural ("human") ordering of file names.
//!
//! Files are always merged in this order, never in the order they were
//! selected: `clip2.mp4` comes before `clip10.mp4`.

use std::path::{Path, PathBuf};

/// One piece of a natural sort key.
///
/// Text and number tokens alternate in a key, so comparing two keys token by
/// token only ever compares like with like except when one name starts with
/// a digit and the other doesn't. Numbers sort before text in that case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyToken {
    /// A run of ASCII digits, compared by value.
    Number(u128),
    /// Digit runs too long for `u128`, compared by length then lexically.
    LongNumber(String),
    /// A non-digit run, lowercased.
    Text(String),
}

/// Splits `name` into alternating text and number tokens.
///
/// ```rust
/// use vidmerge_core::ordering::{natural_key, KeyToken};
///
/// assert_eq!(
///     natural_key("Clip10.mp4"),
///     vec![
///         KeyToken::Text("clip".into()),
///         KeyToken::Number(10),
///         KeyToken::Text(".mp4".into()),
///     ]
/// );
/// ```
pub fn natural_key(name: &str) -> Vec<KeyToken> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_digits = false;

    for c in name.chars() {
        let is_digit = c.is_ascii_digit();
        if !current.is_empty() && is_digit != in_digits {
            tokens.push(make_token(std::mem::take(&mut current), in_digits));
        }
        in_digits = is_digit;
        current.push(c);
    }
    if !current.is_empty() {
        tokens.push(make_token(current, in_digits));
    }

    tokens
}

fn make_token(run: String, digits: bool) -> KeyToken {
    if !digits {
        return KeyToken::Text(run.to_lowercase());
    }
    match run.parse::<u128>() {
        Ok(n) => KeyToken::Number(n),
        Err(_) => {
            // Keep the order consistent with numeric value: strip leading
            // zeros so that length comparison means magnitude comparison.
            let trimmed = run.trim_start_matches('0');
            KeyToken::LongNumber(format!("{:0>40}{}", trimmed.len(), trimmed))
        }
    }
}

fn file_name_key(path: &Path) -> Vec<KeyToken> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    natural_key(&name)
}

/// Sorts paths in place by the natural key of their file names.
///
/// The sort is stable: paths whose names produce equal keys keep their
/// relative order.
pub fn sort_naturally(paths: &mut [PathBuf]) {
    paths.sort_by_cached_key(|p| file_name_key(p));
}
