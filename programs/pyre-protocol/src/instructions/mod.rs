pub mod algorithm;
pub mod authorize_operator;
pub mod buyback;
pub mod deposit;
pub mod initialize;
pub mod pause;
pub mod update_signals;

pub use algorithm::*;
pub use authorize_operator::*;
pub use buyback::*;
pub use deposit::*;
pub use initialize::*;
pub use pause::*;
pub use update_signals::*;
