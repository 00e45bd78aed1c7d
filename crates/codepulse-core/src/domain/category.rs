use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category entity - a named, slug-identified grouping for blog posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub url_handle: String,
}

impl Category {
    /// Create a new category with a freshly generated ID.
    pub fn new(name: String, url_handle: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            url_handle,
        }
    }

    /// Build a category for an existing ID, e.g. as the input of a full update.
    pub fn with_id(id: Uuid, name: String, url_handle: String) -> Self {
        Self {
            id,
            name,
            url_handle,
        }
    }
}
