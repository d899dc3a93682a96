use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for an editable homepage block
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SiteContent {
    pub id: Uuid,
    /// Section key such as "hero" or "about"
    pub section: String,
    pub title: String,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}

/// Key rows by section; a later row wins over an earlier one with the same key
pub fn index_by_section(rows: Vec<SiteContent>) -> BTreeMap<String, SiteContent> {
    rows.into_iter()
        .map(|row| (row.section.clone(), row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(section: &str, title: &str) -> SiteContent {
        SiteContent {
            id: Uuid::new_v4(),
            section: section.to_string(),
            title: title.to_string(),
            description: String::new(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_index_by_section() {
        let map = index_by_section(vec![
            row("hero", "Handmade with love"),
            row("about", "Our story"),
            row("hero", "Crafted to order"),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(map["hero"].title, "Crafted to order");
        assert_eq!(map["about"].title, "Our story");
    }
}
