use ahash::AHashSet;

/// Sanitizes a raw identifier candidate into the persistable form: only
/// `[A-Za-z0-9_-]` characters, separator runs collapsed to their first
/// character, leading separators trimmed, and a `step_` prefix applied when
/// the result does not start with an ASCII letter.
///
/// Returns `None` when nothing usable remains, so the caller can fall back to
/// a positional identifier.
pub(crate) fn sanitize_identifier(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut pending_separator: Option<char> = None;

    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if let Some(sep) = pending_separator.take() {
                if !out.is_empty() {
                    out.push(sep);
                }
            }
            out.push(c);
        } else if (c == '_' || c == '-') && pending_separator.is_none() {
            // First separator of a run wins; the rest of the run is dropped.
            pending_separator = Some(c);
        }
    }

    if out.is_empty() {
        return None;
    }
    if !out.starts_with(|c: char| c.is_ascii_alphabetic()) {
        out.insert_str(0, "step_");
    }
    Some(out)
}

/// Hands out unique identifiers, resolving collisions with `_2`, `_3`, ...
/// suffixes. One allocator per namespace (nodes and edges do not share one).
pub(crate) struct IdAllocator {
    used: AHashSet<String>,
}

impl IdAllocator {
    pub(crate) fn new() -> Self {
        Self {
            used: AHashSet::new(),
        }
    }

    /// Claims a unique identifier based on `candidate`, or on `fallback` when
    /// the candidate sanitized to nothing. `fallback` must already be valid.
    pub(crate) fn claim(&mut self, candidate: Option<String>, fallback: &str) -> String {
        let base = candidate.unwrap_or_else(|| fallback.to_string());
        let unique = if self.used.contains(&base) {
            let mut suffix = 2u32;
            loop {
                let attempt = format!("{}_{}", base, suffix);
                if !self.used.contains(&attempt) {
                    break attempt;
                }
                suffix += 1;
            }
        } else {
            base
        };
        self.used.insert(unique.clone());
        unique
    }
}
