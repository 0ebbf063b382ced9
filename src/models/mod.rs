pub mod order;
pub mod restaurant;
pub mod user;

pub use order::{Order, OrderItemRequest, OrderLine, OrderRequest, OrderRestaurant, OrderStatus};
pub use restaurant::{Menu, MenuItem, NewMenuItem, Restaurant};
pub use user::{RestaurantRegistration, UserProfile, UserRegistration};
