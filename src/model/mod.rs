//! Pure data structures shared by the ledger, the API boundary and the editor session.

pub mod catalog;
pub mod line;
pub mod order;

pub use catalog::*;
pub use line::*;
pub use order::*;
