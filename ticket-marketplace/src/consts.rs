use near_sdk::{Balance, Gas, ONE_YOCTO};

pub const GAS_NFT_TRANSFER: Gas = Gas(10_000_000_000_000);
pub const GAS_FT_TRANSFER: Gas = Gas(3_000_000_000_000);
pub const GAS_BUY_TICKET_CALLBACK: Gas = Gas(15_000_000_000_000);
pub const GAS_PAY_SELLER_CALLBACK: Gas = Gas(5_000_000_000_000);

pub const NFT_TRANSFER_BOND: Balance = ONE_YOCTO;
pub const FT_TRANSFER_BOND: Balance = ONE_YOCTO;
