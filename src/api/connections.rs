//! Brokerage authorization (connection) endpoints.

use crate::client::SnapTradeClient;
use crate::error::Result;
use crate::types::accounts::UserAuth;
use crate::types::connections::{BrokerageAuthorization, LoginRedirect, LoginRequest};

impl SnapTradeClient {
    /// List the user's brokerage authorizations.
    ///
    /// **Endpoint:** `GET /authorizations`
    pub async fn list_connections(&self, user: &UserAuth) -> Result<Vec<BrokerageAuthorization>> {
        self.get("/authorizations", &user.query()).await
    }

    /// Remove a brokerage authorization and its accounts.
    ///
    /// **Endpoint:** `DELETE /authorizations/{authorizationId}`
    pub async fn remove_connection(&self, user: &UserAuth, authorization_id: &str) -> Result<()> {
        self.delete_no_content(&format!("/authorizations/{authorization_id}"), &user.query())
            .await
    }

    /// Ask the brokerage for fresh holdings data on a connection. Called
    /// after order mutations so the next read reflects the trade.
    ///
    /// **Endpoint:** `POST /authorizations/{authorizationId}/refresh`
    pub async fn refresh_connection(&self, user: &UserAuth, authorization_id: &str) -> Result<()> {
        self.post_no_content(
            &format!("/authorizations/{authorization_id}/refresh"),
            &user.query(),
            &serde_json::json!({}),
        )
        .await
    }

    /// Generate a connection portal login link for the user.
    ///
    /// **Endpoint:** `POST /snapTrade/login`
    pub async fn login_link(&self, user: &UserAuth, req: &LoginRequest) -> Result<LoginRedirect> {
        self.post("/snapTrade/login", &user.query(), req).await
    }
}
