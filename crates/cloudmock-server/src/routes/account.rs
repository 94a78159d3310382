//! Account routes: `/api/v1/account`

use axum::routing::get;
use axum::{Json, Router};

use cloudmock_core::account::Account;

/// Build the account router.
pub fn router() -> Router {
    Router::new().route("/", get(get_account))
}

/// Return the fixed account. No input, no validation, no failure mode.
async fn get_account() -> Json<Account> {
    Json(Account::sample())
}
