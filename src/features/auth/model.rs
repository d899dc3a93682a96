use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::ROLE_ADMIN;

/// Caller identity extracted from a verified access token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::{create_admin_user, create_visitor_user};

    #[test]
    fn test_admin_role() {
        assert!(create_admin_user().is_admin());
        assert!(!create_visitor_user().is_admin());
    }
}
