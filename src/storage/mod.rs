//! Data persistence and file operations

pub mod opportunities;
pub mod simulations;
pub mod reports;

pub use opportunities::*;
pub use simulations::*;
pub use reports::*;
