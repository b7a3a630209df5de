use anyhow::{Context, Result};
use regex::Regex;

/// Compiled ignore patterns
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    /// Patterns containing `/`, matched against the path from the root
    anchored: Vec<Regex>,

    /// Patterns without `/`, matched against a single component
    names: Vec<Regex>,
}

impl IgnoreSet {
    /// Compile a list of glob patterns. Blank lines and `#` comments are skipped.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();

        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() || pattern.starts_with('#') {
                continue;
            }

            let body = pattern.trim_end_matches('/');
            let regex = |glob: &str| {
                Regex::new(&glob_to_regex(glob))
                    .with_context(|| format!("Invalid ignore pattern: {}", pattern))
            };

            if body.contains('/') {
                set.anchored.push(regex(body.trim_start_matches('/'))?);
            } else {
                set.names.push(regex(body)?);
            }
        }

        Ok(set)
    }

    pub fn is_empty(&self) -> bool {
        self.anchored.is_empty() && self.names.is_empty()
    }

    /// Whether a `/`-separated relative path, or any directory above it, is ignored
    pub fn is_ignored(&self, path: &str) -> bool {
        let path = path.trim_matches('/');
        if path.is_empty() {
            return false;
        }

        // "a", "a/b", "a/b/c"
        let prefixes = path
            .match_indices('/')
            .map(|(i, _)| &path[..i])
            .chain(std::iter::once(path));

        for prefix in prefixes {
            let name = prefix.rsplit('/').next().unwrap_or(prefix);
            if self.names.iter().any(|re| re.is_match(name))
                || self.anchored.iter().any(|re| re.is_match(prefix))
            {
                return true;
            }
        }

        false
    }
}

/// Translate a glob into an anchored regex
fn glob_to_regex(glob: &str) -> String {
    let mut out = String::from("^");
    let mut rest = glob;

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("**/") {
            out.push_str("(?:.*/)?");
            rest = tail;
        } else if rest == "/**" {
            out.push_str("(?:/.*)?");
            rest = "";
        } else if let Some(tail) = rest.strip_prefix("**") {
            out.push_str(".*");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('*') {
            out.push_str("[^/]*");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('?') {
            out.push_str("[^/]");
            rest = tail;
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                let mut buf = [0u8; 4];
                out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
            rest = chars.as_str();
        }
    }

    out.push('$');
    out
}
