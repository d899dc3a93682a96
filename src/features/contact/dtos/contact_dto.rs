use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Contact form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactRequestDto {
    #[validate(custom(
        function = "crate::shared::validation::not_blank",
        message = "Name is required"
    ))]
    #[schema(example = "Asha")]
    pub name: String,

    /// Phone number or email the maker can reply to
    #[validate(custom(
        function = "crate::shared::validation::not_blank",
        message = "Contact is required"
    ))]
    #[schema(example = "asha@example.com")]
    pub contact: String,

    #[validate(
        custom(
            function = "crate::shared::validation::not_blank",
            message = "Message is required"
        ),
        length(max = 2000, message = "Message must not exceed 2000 characters")
    )]
    #[schema(example = "I'd like a custom resin tray for a wedding")]
    pub message: String,
}

/// Pre-filled WhatsApp link
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactLinkDto {
    #[schema(example = "https://wa.me/1234567890?text=Hi%21")]
    pub url: String,
}
