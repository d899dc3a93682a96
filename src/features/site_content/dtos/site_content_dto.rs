use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::site_content::models::SiteContent;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiteContentDto {
    pub id: Uuid,
    #[schema(example = "hero")]
    pub section: String,
    pub title: String,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}

impl From<SiteContent> for SiteContentDto {
    fn from(s: SiteContent) -> Self {
        Self {
            id: s.id,
            section: s.section,
            title: s.title,
            description: s.description,
            updated_at: s.updated_at,
        }
    }
}

/// Sections keyed by section name
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct SiteContentMapDto(pub BTreeMap<String, SiteContentDto>);

impl From<BTreeMap<String, SiteContent>> for SiteContentMapDto {
    fn from(map: BTreeMap<String, SiteContent>) -> Self {
        Self(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

/// Request DTO for writing one section
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertSiteContentDto {
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    #[serde(default)]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    #[serde(default)]
    pub description: String,
}
