//! HTTP client tests against a local mock server.

use wiremock::matchers::{body_partial_json, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use snaptrade_cli::api::accounts::ActivityFilter;
use snaptrade_cli::cli::commands::positions::fetch_quotes;
use snaptrade_cli::cli::Context;
use snaptrade_cli::error::SnapTradeError;
use snaptrade_cli::portfolio::AggregatedPosition;
use snaptrade_cli::settings::SettingsStore;
use snaptrade_cli::types::accounts::{Account, UserAuth};
use snaptrade_cli::types::connections::LoginRequest;
use snaptrade_cli::types::AssetClass;
use snaptrade_cli::SnapTradeClient;

fn client(server: &MockServer) -> SnapTradeClient {
    SnapTradeClient::with_base_url("TESTPARTNER", "test-consumer-key", server.uri())
}

fn user() -> UserAuth {
    UserAuth {
        user_id: "user-1".to_owned(),
        user_secret: "secret-1".to_owned(),
    }
}

#[tokio::test]
async fn requests_carry_auth_query_params_and_signature() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .and(query_param("clientId", "TESTPARTNER"))
        .and(query_param("userId", "user-1"))
        .and(query_param("userSecret", "secret-1"))
        .and(header_exists("Signature"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let accounts: Vec<Account> = client(&server)
        .list_accounts(&user())
        .await
        .expect("request failed");
    assert!(accounts.is_empty());
}

#[tokio::test]
async fn api_error_bodies_become_typed_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "code": "1083",
            "detail": "Signature verification failed",
            "status_code": 401,
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .list_accounts(&user())
        .await
        .expect_err("should fail");
    match err {
        SnapTradeError::Api(body) => {
            assert_eq!(body.code.as_deref(), Some("1083"));
            assert_eq!(body.detail.as_deref(), Some("Signature verification failed"));
        }
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn non_json_errors_fall_back_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client(&server)
        .list_accounts(&user())
        .await
        .expect_err("should fail");
    match err {
        SnapTradeError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("expected HttpStatus error, got {other}"),
    }
}

#[tokio::test]
async fn order_placement_surfaces_the_request_id_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts/acct-1/orders/cancel"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "req-abc-123")
                .set_body_json(serde_json::json!({
                    "brokerage_order_id": "ord-9",
                    "status": "PENDING_CANCEL",
                })),
        )
        .mount(&server)
        .await;

    let (response, request_id) = client(&server)
        .cancel_order(&user(), "acct-1", "ord-9")
        .await
        .expect("request failed");
    assert_eq!(response.brokerage_order_id.as_deref(), Some("ord-9"));
    assert_eq!(request_id.as_deref(), Some("req-abc-123"));
}

#[tokio::test]
async fn quotes_deserialize_from_the_wire_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acct-1/quotes"))
        .and(query_param("symbols", "AAPL"))
        .and(query_param("use_ticker", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "symbol": {"symbol": "AAPL"},
            "bid_price": 2.0,
            "ask_price": 2.4,
            "last_trade_price": 2.2,
        }])))
        .mount(&server)
        .await;

    let quotes = client(&server)
        .account_quotes(&user(), "acct-1", "AAPL", true)
        .await
        .expect("request failed");
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].bid_price, Some(2.0));
    assert_eq!(quotes[0].ask_price, Some(2.4));
}

#[tokio::test]
async fn partner_info_lists_allowed_brokerages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/snapTrade/partners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Test Partner",
            "allowed_brokerages": [
                {"slug": "ALPACA", "display_name": "Alpaca", "allows_trading": true},
                {"slug": "VANGUARD", "display_name": "Vanguard", "allows_trading": false},
            ],
        })))
        .mount(&server)
        .await;

    let partner = client(&server).partner_info().await.expect("request failed");
    let brokers = partner.allowed_brokerages.expect("brokerages present");
    assert_eq!(brokers.len(), 2);
    assert_eq!(brokers[0].slug.as_deref(), Some("ALPACA"));
    assert_eq!(brokers[0].allows_trading, Some(true));
    assert_eq!(brokers[1].allows_trading, Some(false));
}

#[tokio::test]
async fn activity_filters_become_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acct-1/activities"))
        .and(query_param("startDate", "2026-01-01"))
        .and(query_param("endDate", "2026-06-30"))
        .and(query_param("type", "DIVIDEND"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{
                "type": "DIVIDEND",
                "symbol": {"symbol": "AAPL"},
                "amount": 12.5,
                "trade_date": "2026-03-02T00:00:00Z",
            }],
            "pagination": {"total": 240},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = ActivityFilter {
        start_date: Some("2026-01-01".to_owned()),
        end_date: Some("2026-06-30".to_owned()),
        activity_type: Some("DIVIDEND".to_owned()),
        limit: Some(100),
        offset: Some(50),
    };
    let response = client(&server)
        .account_activities(&user(), "acct-1", &filter)
        .await
        .expect("request failed");
    let activities = response.data.expect("data present");
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].display_symbol(), Some("AAPL"));
    assert_eq!(activities[0].amount, Some(12.5));
    assert_eq!(response.pagination.and_then(|p| p.total), Some(240));
}

#[tokio::test]
async fn holdings_payload_parses_positions_and_total_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acct-1/holdings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "account": {"id": "acct-1", "name": "Margin"},
            "balances": [{"currency": {"code": "USD"}, "cash": 1000.0}],
            "positions": [
                {"symbol": {"symbol": {"symbol": "AAPL"}}, "units": 10.0, "price": 200.0},
                {"symbol": {"option_symbol": {"ticker": "AAPL  260116C00100000"}}, "units": 1.0},
            ],
            "orders": [{"brokerage_order_id": "ord-1", "limit_price": 5.0}],
            "total_value": {"value": 2500.0, "currency": "USD"},
        })))
        .mount(&server)
        .await;

    let holdings = client(&server)
        .account_holdings(&user(), "acct-1")
        .await
        .expect("request failed");
    let positions = holdings.positions.expect("positions present");
    assert_eq!(positions[0].display_symbol(), Some("AAPL"));
    assert!(!positions[0].is_option());
    assert!(positions[1].is_option());
    assert_eq!(holdings.orders.expect("orders present")[0].limit_price, Some(5.0));
    assert_eq!(holdings.total_value.expect("total present").value, Some(2500.0));
}

#[tokio::test]
async fn full_order_history_parses_as_a_plain_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acct-1/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "brokerage_order_id": "ord-1",
            "status": "EXECUTED",
            "universal_symbol": {"symbol": "AAPL"},
            "execution_price": "199.5",
        }])))
        .mount(&server)
        .await;

    let orders = client(&server)
        .account_orders(&user(), "acct-1")
        .await
        .expect("request failed");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].display_symbol(), Some("AAPL"));
    assert_eq!(orders[0].execution_price, Some(199.5));
}

#[tokio::test]
async fn reconnect_login_carries_the_authorization_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/snapTrade/login"))
        .and(body_partial_json(serde_json::json!({
            "connectionType": "trade",
            "reconnect": "auth-1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "redirect_uri": "https://app.snaptrade.com/portal",
            "session_id": "sess-1",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = LoginRequest {
        broker: None,
        connection_type: Some("trade".to_owned()),
        reconnect: Some("auth-1".to_owned()),
    };
    let redirect = client(&server)
        .login_link(&user(), &req)
        .await
        .expect("request failed");
    assert_eq!(
        redirect.redirect_uri.as_deref(),
        Some("https://app.snaptrade.com/portal")
    );
}

fn account(id: &str) -> Account {
    Account {
        id: id.to_owned(),
        name: None,
        number: None,
        institution_name: None,
        brokerage_authorization: None,
        balance: None,
    }
}

fn aggregated(symbol: &str) -> AggregatedPosition {
    AggregatedPosition {
        symbol: symbol.to_owned(),
        currency: "USD".to_owned(),
        asset_class: AssetClass::Equity,
        total_quantity: 1.0,
        total_cost_basis: Some(10.0),
        avg_cost_basis: Some(10.0),
    }
}

#[tokio::test]
async fn position_quotes_merge_across_all_accounts() {
    let server = MockServer::start().await;
    // The first brokerage quotes AAPL but returns an empty book for SHOP.
    Mock::given(method("GET"))
        .and(path("/accounts/acct-1/quotes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"symbol": {"symbol": "AAPL"}, "last_trade_price": 200.0},
            {"symbol": {"symbol": "SHOP"}},
        ])))
        .expect(1)
        .mount(&server)
        .await;
    // SHOP is only quotable at the brokerage that holds it.
    Mock::given(method("GET"))
        .and(path("/accounts/acct-2/quotes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"symbol": {"symbol": "SHOP"}, "last_trade_price": 80.0},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = Context {
        client: client(&server),
        store: SettingsStore::load_from(dir.path().join("settings.json")).expect("empty store"),
        use_last_account: false,
    };
    let accounts = [account("acct-1"), account("acct-2")];
    let positions = [aggregated("AAPL"), aggregated("SHOP")];

    let quotes = fetch_quotes(&ctx, &user(), &accounts, &positions).await;
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes["AAPL"].last, Some(200.0));
    assert_eq!(quotes["SHOP"].last, Some(80.0));
}

#[tokio::test]
async fn position_quotes_survive_one_failing_account() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acct-1/quotes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/accounts/acct-2/quotes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"symbol": {"symbol": "SHOP"}, "last_trade_price": 80.0},
        ])))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = Context {
        client: client(&server),
        store: SettingsStore::load_from(dir.path().join("settings.json")).expect("empty store"),
        use_last_account: false,
    };
    let accounts = [account("acct-1"), account("acct-2")];
    let positions = [aggregated("SHOP")];

    let quotes = fetch_quotes(&ctx, &user(), &accounts, &positions).await;
    assert_eq!(quotes["SHOP"].last, Some(80.0));
}
