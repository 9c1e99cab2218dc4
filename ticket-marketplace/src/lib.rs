pub mod consts;
pub use consts::*;

pub mod storage;
pub use storage::*;

pub mod contract;
pub use contract::*;

pub mod ft_receiver;
pub use ft_receiver::*;

pub mod nft_receiver;
pub use nft_receiver::*;

pub mod callbacks;
pub use callbacks::*;

pub mod views;
pub use views::*;

pub mod tests;
pub use tests::*;
