pub mod models;
pub mod repository;

pub use models::{Order, OrderDraft, OrderStatus};
pub use repository::OrderRepository;
