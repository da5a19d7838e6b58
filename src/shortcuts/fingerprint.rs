//! Order-independent identifiers for key combinations.
//!
//! Two strategies are available:
//! - `Tokens` sorts whole lowercased tokens, escapes each one and ends it
//!   with a terminator. Key sets that differ after lowercasing always produce
//!   distinct fingerprints, whatever characters the tokens contain.
//! - `Characters` concatenates the tokens, sorts the individual characters and
//!   lowercases the result. Key sets whose concatenations are anagrams of each
//!   other collide (`["ab", "c"]` and `["a", "bc"]`). Kept for compatibility
//!   with combinations keyed under that scheme.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// ASCII unit separator, written after every token. Occurrences inside a
/// token are preceded by `TOKEN_ESCAPE`, as are literal escapes.
const TOKEN_END: char = '\u{1f}';
const TOKEN_ESCAPE: char = '\\';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FingerprintStrategy {
    #[default]
    Tokens,
    Characters,
}

/// Comparable identifier for a multiset of canonical tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.0.chars();
        while let Some(c) = chars.next() {
            match c {
                TOKEN_END if !chars.as_str().is_empty() => f.write_str("+")?,
                TOKEN_END => {}
                TOKEN_ESCAPE => {
                    if let Some(escaped) = chars.next() {
                        write!(f, "{escaped}")?;
                    }
                }
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

impl FingerprintStrategy {
    pub fn fingerprint<I, S>(self, tokens: I) -> Fingerprint
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self {
            Self::Tokens => by_tokens(tokens),
            Self::Characters => by_characters(tokens),
        }
    }
}

fn by_tokens<I, S>(tokens: I) -> Fingerprint
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parts: SmallVec<[String; 4]> = tokens
        .into_iter()
        .map(|t| t.as_ref().to_lowercase())
        .collect();
    parts.sort_unstable();

    let mut encoded = String::new();
    for part in &parts {
        for c in part.chars() {
            if c == TOKEN_END || c == TOKEN_ESCAPE {
                encoded.push(TOKEN_ESCAPE);
            }
            encoded.push(c);
        }
        encoded.push(TOKEN_END);
    }
    Fingerprint(encoded)
}

fn by_characters<I, S>(tokens: I) -> Fingerprint
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut chars: Vec<char> = Vec::new();
    for token in tokens {
        chars.extend(token.as_ref().chars());
    }
    // Lowercasing happens after the sort.
    chars.sort_unstable();
    Fingerprint(chars.into_iter().collect::<String>().to_lowercase())
}
