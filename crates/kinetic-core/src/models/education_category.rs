use serde::{Deserialize, Serialize};

use crate::entity::Lookup;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationCategory {
    pub category_id: String,
    pub name: String,
}

impl Lookup for EducationCategory {
    const PATH: &'static str = "/education-post/categories";

    fn id(&self) -> &str {
        &self.category_id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
