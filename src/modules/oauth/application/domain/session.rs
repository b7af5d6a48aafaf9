use serde::{Deserialize, Serialize};

use crate::modules::content::application::domain::flags::SessionFlags;
use crate::modules::oauth::application::domain::profile::UserProfile;

/// Server-side state behind one visitor's session cookie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionData {
    pub user: Option<UserProfile>,
    pub flags: SessionFlags,
    /// Set once the "leave a review?" prompt has been shown.
    pub review_prompt_shown: bool,
}

impl SessionData {
    pub fn is_empty(&self) -> bool {
        self == &SessionData::default()
    }
}
