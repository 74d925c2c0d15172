//! Re-rooting relative resource paths at the site base
//!
//! Qualification ignores relative-path semantics: leading `./`, `../` and
//! `/` components are stripped and whatever follows is appended to the site
//! base. `../x`, `../../x`, `/../../x`, `./../x`, `./x` and `x` all name the
//! same URL.

use crate::error::{IjwtError, Result};
use url::Url;

/// Absolute URL for `path` under `site_base`
///
/// # Errors
///
/// Returns `UnqualifiablePath` when nothing in `path` can be re-rooted
/// (e.g. `""` or `"/"`)
pub fn qualify(site_base: &Url, path: &str) -> Result<String> {
    let suffix =
        rerootable_suffix(path).ok_or_else(|| IjwtError::UnqualifiablePath(path.to_string()))?;
    Ok(format!("{}{}", site_base.as_str(), suffix))
}

/// Leftmost suffix made of a run of dots followed either by the end of the
/// string or by a word character and the rest of the line.
///
/// A suffix of nothing but dots needs at least one dot.
pub fn rerootable_suffix(path: &str) -> Option<&str> {
    let bytes = path.as_bytes();
    (0..bytes.len())
        .filter(|&start| path.is_char_boundary(start))
        .find(|&start| {
            let after_dots = bytes[start..]
                .iter()
                .position(|&b| b != b'.')
                .map_or(bytes.len(), |offset| start + offset);

            if after_dots == bytes.len() {
                return after_dots > start;
            }

            is_word_byte(bytes[after_dots]) && !path[after_dots..].contains(is_line_terminator)
        })
        .map(|start| &path[start..])
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
