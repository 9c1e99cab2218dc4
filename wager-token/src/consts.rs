use near_sdk::Balance;

pub const TOKEN_NAME: &str = "Wager Token";
pub const TOKEN_SYMBOL: &str = "WAGER";
pub const TOKEN_DECIMALS: u8 = 18;

// 1,000 WAGER at 18 decimals, minted once per account
pub const FAUCET_AMOUNT: Balance = 1_000_000_000_000_000_000_000;
