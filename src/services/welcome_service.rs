/// Reply to the start command
pub const WELCOME_MESSAGE: &str = "Welcome to the Wallet Balance Checker Bot! Send me your wallet address to check the balances on Ethereum and BSC.";
