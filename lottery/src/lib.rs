pub mod consts;
pub use consts::*;

pub mod storage;
pub use storage::*;

pub mod math;

pub mod contract;
pub use contract::*;

pub mod ft_receiver;
pub use ft_receiver::*;

pub mod callbacks;
pub use callbacks::*;

pub mod views;
pub use views::*;

pub mod modifiers;
pub use modifiers::*;

pub use tests::*;
