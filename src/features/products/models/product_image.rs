use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a gallery image attached to a product
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductImage {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    pub position: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Sort gallery images: unpositioned first, then by position, then oldest first.
///
/// Mirrors `ORDER BY position ASC NULLS FIRST, created_at ASC`.
pub fn order_product_images(images: &mut [ProductImage]) {
    // `None < Some(_)` gives nulls-first ordering
    images.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn image(url: &str, position: Option<i32>, minutes: i64) -> ProductImage {
        let base = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        ProductImage {
            id: Uuid::new_v4(),
            product_id: Uuid::nil(),
            url: url.to_string(),
            position,
            created_at: base + Duration::minutes(minutes),
        }
    }

    #[test]
    fn test_null_positions_first_then_ascending() {
        let mut images = vec![
            image("two", Some(2), 0),
            image("none", None, 1),
            image("zero", Some(0), 2),
        ];

        order_product_images(&mut images);

        let urls: Vec<&str> = images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, vec!["none", "zero", "two"]);
    }

    #[test]
    fn test_ties_broken_by_creation_time() {
        let mut images = vec![
            image("late-null", None, 5),
            image("late-one", Some(1), 9),
            image("early-null", None, 1),
            image("early-one", Some(1), 3),
        ];

        order_product_images(&mut images);

        let urls: Vec<&str> = images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, vec!["early-null", "late-null", "early-one", "late-one"]);
    }
}
