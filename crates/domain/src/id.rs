//! Typed identifier for toasts, backed by a UUID.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Toast`](crate::toast::Toast).
///
/// Also used to derive the DOM id of the rendered element, so a toast can
/// be found again in the document without holding its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(uuid::Uuid);

impl Default for ToastId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl ToastId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// The `id` attribute given to the toast's root element.
    #[must_use]
    pub fn dom_id(self) -> String {
        format!("toast-{}", self.0.simple())
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ToastId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}
