pub mod block;
pub mod input;
pub mod output;
pub mod transaction;

pub use block::{Block, BlockHeader};
pub use input::Input;
pub use output::Output;
pub use transaction::{ConfirmedTransaction, Transaction};
