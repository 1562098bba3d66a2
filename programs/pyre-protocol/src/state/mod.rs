pub mod history;
pub mod market;
pub mod operator;
pub mod treasury;

pub use history::*;
pub use market::*;
pub use operator::*;
pub use treasury::*;
