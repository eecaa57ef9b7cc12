use super::ObjectMeta;
use serde::{Deserialize, Serialize};

/// Common fields for all blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockCommon {
    #[serde(flatten)]
    pub meta: ObjectMeta,
    #[serde(default)]
    pub has_children: bool,
}

impl BlockCommon {
    pub fn id(&self) -> &str {
        &self.meta.id
    }
}
