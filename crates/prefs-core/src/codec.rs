//! Encoding of path lists into a single preference value
//!
//! Paths are joined with `:`. A `:` or `\` inside a path is escaped with a
//! leading `\`, so any path survives a round trip. Empty paths are dropped
//! in both directions, which makes `""` the encoding of the empty list.

const SEPARATOR: char = ':';
const ESCAPE: char = '\\';

/// Codec between a list of paths and its stored string form.
pub struct PathEncoder;

impl PathEncoder {
    /// Encode `paths` into one string, skipping empty entries.
    pub fn encode_paths<S: AsRef<str>>(paths: &[S]) -> String {
        let mut encoded = String::new();
        for path in paths.iter().map(AsRef::as_ref).filter(|p| !p.is_empty()) {
            if !encoded.is_empty() {
                encoded.push(SEPARATOR);
            }
            for ch in path.chars() {
                if ch == SEPARATOR || ch == ESCAPE {
                    encoded.push(ESCAPE);
                }
                encoded.push(ch);
            }
        }
        encoded
    }

    /// Decode a stored string back into its paths, skipping empty entries.
    ///
    /// A trailing lone `\` has nothing to escape and is kept as-is.
    pub fn decode_paths(value: &str) -> Vec<String> {
        let mut paths = Vec::new();
        let mut current = String::new();
        let mut chars = value.chars();

        while let Some(ch) = chars.next() {
            match ch {
                ESCAPE => current.push(chars.next().unwrap_or(ESCAPE)),
                SEPARATOR => {
                    if !current.is_empty() {
                        paths.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(ch),
            }
        }
        if !current.is_empty() {
            paths.push(current);
        }

        paths
    }
}
