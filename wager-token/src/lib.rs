pub mod consts;
pub use consts::*;

pub mod storage;
pub use storage::*;

pub mod contract;
pub use contract::*;

pub use tests::*;
