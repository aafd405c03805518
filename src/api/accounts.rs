//! Account information endpoints.

use crate::client::SnapTradeClient;
use crate::error::Result;
use crate::types::accounts::{Account, Balance, UserAuth};
use crate::types::activities::AccountActivitiesResponse;
use crate::types::holdings::AccountHoldings;
use crate::types::orders::{AccountOrderRecord, RecentOrdersResponse};
use crate::types::positions::{OptionPosition, Position};

/// Filters for the account activities endpoint. All fields optional; the
/// server defaults apply when omitted.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    /// Inclusive start date, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Inclusive end date, `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// Comma-separated transaction types.
    pub activity_type: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SnapTradeClient {
    /// List all brokerage accounts connected by the user.
    ///
    /// **Endpoint:** `GET /accounts`
    pub async fn list_accounts(&self, user: &UserAuth) -> Result<Vec<Account>> {
        self.get("/accounts", &user.query()).await
    }

    /// Retrieve per-currency balances for an account.
    ///
    /// **Endpoint:** `GET /accounts/{accountId}/balances`
    pub async fn account_balances(
        &self,
        user: &UserAuth,
        account_id: &str,
    ) -> Result<Vec<Balance>> {
        self.get(&format!("/accounts/{account_id}/balances"), &user.query())
            .await
    }

    /// Retrieve equity positions for an account.
    ///
    /// **Endpoint:** `GET /accounts/{accountId}/positions`
    pub async fn account_positions(
        &self,
        user: &UserAuth,
        account_id: &str,
    ) -> Result<Vec<Position>> {
        self.get(&format!("/accounts/{account_id}/positions"), &user.query())
            .await
    }

    /// Retrieve option holdings for an account.
    ///
    /// **Endpoint:** `GET /accounts/{accountId}/options`
    pub async fn option_holdings(
        &self,
        user: &UserAuth,
        account_id: &str,
    ) -> Result<Vec<OptionPosition>> {
        self.get(&format!("/accounts/{account_id}/options"), &user.query())
            .await
    }

    /// Retrieve the combined holdings payload for an account: the account
    /// record plus balances, positions, and recent orders in one call.
    ///
    /// **Endpoint:** `GET /accounts/{accountId}/holdings`
    pub async fn account_holdings(
        &self,
        user: &UserAuth,
        account_id: &str,
    ) -> Result<AccountHoldings> {
        self.get(&format!("/accounts/{account_id}/holdings"), &user.query())
            .await
    }

    /// Retrieve the full order history for an account.
    ///
    /// **Endpoint:** `GET /accounts/{accountId}/orders`
    pub async fn account_orders(
        &self,
        user: &UserAuth,
        account_id: &str,
    ) -> Result<Vec<AccountOrderRecord>> {
        self.get(&format!("/accounts/{account_id}/orders"), &user.query())
            .await
    }

    /// Retrieve account activities (transactions), newest window first.
    ///
    /// **Endpoint:** `GET /accounts/{accountId}/activities`
    pub async fn account_activities(
        &self,
        user: &UserAuth,
        account_id: &str,
        filter: &ActivityFilter,
    ) -> Result<AccountActivitiesResponse> {
        let mut query = user.query();
        if let Some(start) = &filter.start_date {
            query.push(("startDate", start.clone()));
        }
        if let Some(end) = &filter.end_date {
            query.push(("endDate", end.clone()));
        }
        if let Some(kind) = &filter.activity_type {
            query.push(("type", kind.clone()));
        }
        if let Some(limit) = filter.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = filter.offset {
            query.push(("offset", offset.to_string()));
        }
        self.get(&format!("/accounts/{account_id}/activities"), &query)
            .await
    }

    /// Retrieve recent orders for an account, executed or not.
    ///
    /// **Endpoint:** `GET /accounts/{accountId}/recentOrders`
    pub async fn recent_orders(
        &self,
        user: &UserAuth,
        account_id: &str,
        only_executed: bool,
    ) -> Result<RecentOrdersResponse> {
        let mut query = user.query();
        query.push(("only_executed", only_executed.to_string()));
        self.get(&format!("/accounts/{account_id}/recentOrders"), &query)
            .await
    }
}
