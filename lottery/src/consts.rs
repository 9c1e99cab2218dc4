use near_sdk::{Balance, Gas, ONE_YOCTO};

pub const GAS_MINT_TICKET: Gas = Gas(10_000_000_000_000);
pub const GAS_BET_CALLBACK: Gas = Gas(5_000_000_000_000);

pub const GAS_NFT_TOKEN: Gas = Gas(5_000_000_000_000);
pub const GAS_TICKET_INFO: Gas = Gas(5_000_000_000_000);
pub const GAS_CLAIM_WINNINGS_CALLBACK: Gas = Gas(30_000_000_000_000);
pub const GAS_BURN_TICKET: Gas = Gas(10_000_000_000_000);
pub const GAS_BURN_TICKET_CALLBACK: Gas = Gas(15_000_000_000_000);
pub const GAS_FT_TRANSFER: Gas = Gas(3_000_000_000_000);

pub const FT_TRANSFER_BOND: Balance = ONE_YOCTO;
