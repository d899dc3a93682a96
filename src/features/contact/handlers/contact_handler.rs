use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::contact::dtos::{ContactLinkDto, ContactRequestDto};
use crate::features::contact::services::ContactLinks;
use crate::shared::types::ApiResponse;

/// Build a WhatsApp link for the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequestDto,
    responses(
        (status = 200, description = "WhatsApp link with the message pre-filled", body = ApiResponse<ContactLinkDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "contact"
)]
pub async fn create_contact_link(
    State(links): State<Arc<ContactLinks>>,
    AppJson(dto): AppJson<ContactRequestDto>,
) -> Result<Json<ApiResponse<ContactLinkDto>>> {
    dto.validate()?;

    let url = links.contact_form_url(&dto.name, &dto.contact, &dto.message);
    Ok(Json(ApiResponse::success(
        Some(ContactLinkDto { url }),
        None,
        None,
    )))
}
