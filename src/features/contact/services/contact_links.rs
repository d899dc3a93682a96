//! WhatsApp deep links.
//!
//! Nothing is sent or stored; callers open the returned URL themselves.

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Builds `https://wa.me/<number>?text=<message>` links for one business number
#[derive(Debug, Clone)]
pub struct ContactLinks {
    number: String,
}

impl ContactLinks {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    /// Plain chat link without a pre-filled message
    pub fn chat_url(&self) -> String {
        format!("{}/{}", WHATSAPP_BASE_URL, self.number)
    }

    pub fn message_url(&self, message: &str) -> String {
        format!("{}?text={}", self.chat_url(), urlencoding::encode(message))
    }

    /// "Enquire / Customize" link on the product page
    pub fn product_enquiry_url(&self, product_name: &str) -> String {
        self.message_url(&format!(
            "Hi! I love the {}. Can you customize it for me?",
            product_name
        ))
    }

    /// Link on a catalog card
    pub fn product_interest_url(&self, product_name: &str) -> String {
        self.message_url(&format!("Hi, I'm interested in {}", product_name))
    }

    pub fn contact_form_url(&self, name: &str, contact: &str, message: &str) -> String {
        self.message_url(&format!(
            "Hi! I'm {}. {}. You can reach me at {}",
            name.trim(),
            message.trim(),
            contact.trim()
        ))
    }
}
