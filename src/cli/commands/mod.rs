//! Individual subcommand implementations.

pub mod accounts;
pub mod activities;
pub mod balances;
pub mod brokers;
pub mod cancel_order;
pub mod connect;
pub mod connections;
pub mod disconnect;
pub mod holdings;
pub mod orders;
pub mod positions;
pub mod profiles;
pub mod quote;
pub mod recent_orders;
pub mod reconnect;
pub mod status;
pub mod trade;
