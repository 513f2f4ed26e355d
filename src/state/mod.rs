mod catalog;
mod session;

pub use catalog::Catalog;
pub use session::{PrizeHistory, Session};
