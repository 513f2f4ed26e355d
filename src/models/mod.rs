mod category;
mod dish;
mod prize;

pub use category::Category;
pub use dish::Dish;
pub use prize::Prize;
