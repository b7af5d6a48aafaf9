use serde::{Deserialize, Serialize};

/// Per-visitor switches that outlive a single page view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFlags {
    pub is_admin: bool,
    pub has_submitted_review: bool,
}
