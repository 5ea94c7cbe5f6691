use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An opaque, cheaply-cloneable portal content identifier.
///
/// The portal only ever hands out digit strings, but an ID is never parsed as
/// a number: `"0100"` and `"100"` are different nodes. Identity is exact
/// string equality. The derived ordering is lexical and exists only so that
/// sets of IDs iterate deterministically.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(Arc<str>);

impl ContentId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the ID is made only of ASCII digits (and is non-empty).
    pub fn is_numeric(&self) -> bool {
        is_numeric_segment(&self.0)
    }
}

/// True for a non-empty path segment made only of ASCII digits.
pub(crate) fn is_numeric_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for ContentId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ContentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ContentId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}
