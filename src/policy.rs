//! Extension allow/deny policy applied to candidate filenames.

use std::sync::OnceLock;

use crate::constants::policy::{
    ALLOWED_EXTENSIONS, DENIED_ARCHIVE, DENIED_AUDIO, DENIED_DOCUMENT, DENIED_IMAGE, DENIED_MISC,
    DENIED_MODEL, DENIED_VIDEO,
};

/// Pure allow-list predicate over filenames.
///
/// A filename is accepted iff it ends with `.<ext>` for one of the
/// allowed extensions; the match is a case-sensitive suffix check, so
/// `archive.tar.js` is accepted alongside `app.js`. The deny tables in
/// [`crate::constants::policy`] document intentionally excluded formats
/// but are never consulted here — the allow-list is sole authority.
#[derive(Clone, Debug)]
pub struct ExtensionPolicy {
    allowed: Vec<String>,
}

impl Default for ExtensionPolicy {
    fn default() -> Self {
        Self::new(ALLOWED_EXTENSIONS.iter().copied())
    }
}

impl ExtensionPolicy {
    /// Build a policy from extension names given without a leading dot.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed: extensions
                .into_iter()
                .map(|ext| format!(".{}", ext.as_ref()))
                .collect(),
        }
    }

    /// True if `filename` ends with one of the allowed `.<ext>` suffixes.
    pub fn accepts(&self, filename: &str) -> bool {
        self.allowed.iter().any(|suffix| filename.ends_with(suffix))
    }
}

fn denied_suffixes() -> &'static [String] {
    static SUFFIXES: OnceLock<Vec<String>> = OnceLock::new();
    SUFFIXES.get_or_init(|| {
        DENIED_IMAGE
            .iter()
            .chain(DENIED_VIDEO)
            .chain(DENIED_DOCUMENT)
            .chain(DENIED_AUDIO)
            .chain(DENIED_ARCHIVE)
            .chain(DENIED_MODEL)
            .chain(DENIED_MISC)
            .map(|ext| format!(".{ext}"))
            .collect()
    })
}

/// True if `filename` ends with a documented deny-table suffix.
///
/// Kept separate from [`ExtensionPolicy::accepts`] on purpose: current
/// extraction behavior relies on the allow-list being sole authority, and
/// the deny tables exist only to record which formats are intentionally
/// out of scope.
pub fn denied_extension(filename: &str) -> bool {
    denied_suffixes()
        .iter()
        .any(|suffix| filename.ends_with(suffix))
}
