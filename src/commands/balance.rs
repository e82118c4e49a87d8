use crate::services::balance_service::{self, BalanceService};

pub async fn execute(balances: &BalanceService, address: &str) -> Vec<String> {
    balance_service::check_wallet(balances, address).await
}
