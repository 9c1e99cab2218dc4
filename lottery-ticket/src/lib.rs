pub mod storage;
pub use storage::*;

pub mod contract;
pub use contract::*;

pub mod views;
pub use views::*;

pub mod modifiers;
pub use modifiers::*;

pub use tests::*;
