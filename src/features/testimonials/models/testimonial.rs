use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for testimonial
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    /// Role or occasion label, e.g. "Bride" or "Anniversary gift"
    pub role: String,
    pub text: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
