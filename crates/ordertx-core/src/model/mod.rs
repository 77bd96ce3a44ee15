pub mod menu;
pub mod order;
pub mod submission;

pub use menu::{Category, MenuItem};
pub use order::{Order, OrderLineItem, RegisteredOrder};
pub use submission::{OrderSubmission, OrderedMenu};
