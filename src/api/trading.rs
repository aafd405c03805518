//! Quote and trading endpoints.
//!
//! Order-mutating methods return the parsed response together with the
//! SnapTrade request id header so callers can surface it for support.

use crate::client::SnapTradeClient;
use crate::error::Result;
use crate::types::accounts::UserAuth;
use crate::types::orders::{
    CancelOrderRequest, MlegOrderRequest, OrderResponse, PlaceOrderRequest, ReplaceOrderRequest,
    SimpleOrderRequest,
};
use crate::types::quotes::SymbolQuote;

impl SnapTradeClient {
    /// Fetch quotes for one or more symbols (comma-separated).
    ///
    /// Pass `use_ticker` to look plain tickers up instead of universal
    /// symbol ids; OCC option symbols are accepted either way.
    ///
    /// **Endpoint:** `GET /accounts/{accountId}/quotes`
    pub async fn account_quotes(
        &self,
        user: &UserAuth,
        account_id: &str,
        symbols: &str,
        use_ticker: bool,
    ) -> Result<Vec<SymbolQuote>> {
        let mut query = user.query();
        query.push(("symbols", symbols.to_owned()));
        query.push(("use_ticker", use_ticker.to_string()));
        self.get(&format!("/accounts/{account_id}/quotes"), &query)
            .await
    }

    /// Place an equity order without a prior trade-impact check.
    ///
    /// **Endpoint:** `POST /trade/placeForceOrder`
    pub async fn place_force_order(
        &self,
        user: &UserAuth,
        req: &PlaceOrderRequest,
    ) -> Result<(OrderResponse, Option<String>)> {
        self.post_with_request_id("/trade/placeForceOrder", &user.query(), req)
            .await
    }

    /// Replace a working order, keeping its brokerage order id lineage.
    ///
    /// **Endpoint:** `PUT /accounts/{accountId}/orders/{brokerageOrderId}`
    pub async fn replace_order(
        &self,
        user: &UserAuth,
        account_id: &str,
        brokerage_order_id: &str,
        req: &ReplaceOrderRequest,
    ) -> Result<(OrderResponse, Option<String>)> {
        self.put_with_request_id(
            &format!("/accounts/{account_id}/orders/{brokerage_order_id}"),
            &user.query(),
            req,
        )
        .await
    }

    /// Cancel a working order.
    ///
    /// **Endpoint:** `POST /accounts/{accountId}/orders/cancel`
    pub async fn cancel_order(
        &self,
        user: &UserAuth,
        account_id: &str,
        brokerage_order_id: &str,
    ) -> Result<(OrderResponse, Option<String>)> {
        let req = CancelOrderRequest {
            brokerage_order_id: brokerage_order_id.to_owned(),
        };
        self.post_with_request_id(
            &format!("/accounts/{account_id}/orders/cancel"),
            &user.query(),
            &req,
        )
        .await
    }

    /// Place a multi-leg option order.
    ///
    /// **Endpoint:** `POST /accounts/{accountId}/trading/mleg`
    pub async fn place_mleg_order(
        &self,
        user: &UserAuth,
        account_id: &str,
        req: &MlegOrderRequest,
    ) -> Result<(OrderResponse, Option<String>)> {
        self.post_with_request_id(
            &format!("/accounts/{account_id}/trading/mleg"),
            &user.query(),
            req,
        )
        .await
    }

    /// Place a simple (crypto) order.
    ///
    /// **Endpoint:** `POST /accounts/{accountId}/trading/simple`
    pub async fn place_simple_order(
        &self,
        user: &UserAuth,
        account_id: &str,
        req: &SimpleOrderRequest,
    ) -> Result<(OrderResponse, Option<String>)> {
        self.post_with_request_id(
            &format!("/accounts/{account_id}/trading/simple"),
            &user.query(),
            req,
        )
        .await
    }
}
