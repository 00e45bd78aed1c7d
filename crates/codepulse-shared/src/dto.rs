//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::patch::PatchTarget;

/// Request to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub url_handle: String,
}

/// Request to replace a category's fields; also the target of a patch document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: String,
    pub url_handle: String,
}

impl PatchTarget for UpdateCategoryRequest {
    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        if name.eq_ignore_ascii_case("name") {
            Some(&mut self.name)
        } else if name.eq_ignore_ascii_case("urlHandle") {
            Some(&mut self.url_handle)
        } else {
            None
        }
    }
}

/// Response containing a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub url_handle: String,
}
