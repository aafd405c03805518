//! User registration and partner endpoints.

use crate::client::SnapTradeClient;
use crate::error::Result;
use crate::types::accounts::{
    ApiStatus, PartnerInfo, RegisterUserRequest, RegisterUserResponse, UserAuth,
};

impl SnapTradeClient {
    /// Check that the API is reachable and online.
    ///
    /// **Endpoint:** `GET /`
    pub async fn api_status(&self) -> Result<ApiStatus> {
        self.get("/", &[]).await
    }

    /// Fetch partner details for the configured credentials.
    ///
    /// Doubles as a credential validity check on first run.
    ///
    /// **Endpoint:** `GET /snapTrade/partners`
    pub async fn partner_info(&self) -> Result<PartnerInfo> {
        self.get("/snapTrade/partners", &[]).await
    }

    /// Register a new SnapTrade user and receive their secret.
    ///
    /// **Endpoint:** `POST /snapTrade/registerUser`
    pub async fn register_user(&self, user_id: &str) -> Result<RegisterUserResponse> {
        let req = RegisterUserRequest {
            user_id: user_id.to_owned(),
        };
        self.post("/snapTrade/registerUser", &[], &req).await
    }

    /// Delete a SnapTrade user and all their connections.
    ///
    /// **Endpoint:** `DELETE /snapTrade/deleteUser`
    pub async fn delete_user(&self, user: &UserAuth) -> Result<()> {
        self.delete_no_content("/snapTrade/deleteUser", &user.query())
            .await
    }
}
