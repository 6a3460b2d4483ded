//! Anchor-and-splice patching of the raw workflow text.
//!
//! The original text is never re-serialized; decisions are applied as
//! targeted substitutions anchored on the literal path values, so unrelated
//! formatting and comments stay byte-identical. Anchors are regex-escaped
//! before being embedded in a pattern, and replacements are inserted through
//! a closure so `$` in a path is never treated as a capture reference.
//!
//! All substitutions are global: if the same source path appears in more than
//! one entry, every occurrence is patched.

use regex::{Captures, Regex};

use retrack_core::Decision;

use crate::error::PatchError;

/// Apply a decision list to `raw`, returning the patched text.
///
/// `Unchanged` decisions touch nothing; the text covering them and all
/// surrounding content comes back byte-identical.
pub fn apply(raw: &str, decisions: &[Decision]) -> Result<String, PatchError> {
    let mut text = raw.to_string();
    for decision in decisions {
        match decision {
            Decision::Unchanged(_) => {}
            Decision::Dropped(spec) => {
                text = drop_entry(&text, &spec.source)?;
            }
            Decision::Retargeted { old, new } => {
                text = replace_field(&text, "source", &old.source, &new.source)?;
                // Destination is carried through unchanged on rename, so this
                // substitution rewrites the same text onto itself.
                text = replace_field(&text, "destination", &old.destination, &new.destination)?;
            }
        }
    }
    Ok(text)
}

/// Remove the list-item block starting at `- source: <value>` up to (but not
/// including) the next list-item marker or the end of the section.
fn drop_entry(text: &str, source: &str) -> Result<String, PatchError> {
    let pattern = format!(
        r"(?m)^[ \t]*-[ \t]+source:[ \t]*{}[ \t]*(?:\r?\n|\z)(?:[ \t]+[^-\s][^\n]*(?:\r?\n|\z))*",
        regex::escape(source)
    );
    let re = Regex::new(&pattern)?;
    Ok(re.replace_all(text, "").into_owned())
}

/// Replace the literal value after `<field>:` matching `old` with `new`,
/// requiring the value to fill the rest of the line so path prefixes never
/// match.
fn replace_field(text: &str, field: &str, old: &str, new: &str) -> Result<String, PatchError> {
    let pattern = format!(r"(?m)({field}:[ \t]*){}([ \t\r]*)$", regex::escape(old));
    let re = Regex::new(&pattern)?;
    let patched = re.replace_all(text, |caps: &Captures<'_>| {
        format!("{}{}{}", &caps[1], new, &caps[2])
    });
    Ok(patched.into_owned())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
