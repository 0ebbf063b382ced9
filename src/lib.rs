//! # foods24-rs
//!
//! A Rust client library for the Foods24 food-ordering API.
//! Browses restaurants and menus, maintains a client-side shopping cart,
//! places orders, polls order history, and handles auth for end users and
//! restaurant partners.
//!
//! ## Endpoints covered
//!
//! | Area | Endpoint | Client surface |
//! |------|----------|----------------|
//! | Auth | `POST /auth/{user,restaurant}/{login,register}` | `FoodsApi::login_*`, `register_*`, [`AuthFlow`] |
//! | Browsing | `GET /api/restaurants`, `GET /api/restaurants/{id}` | `FoodsApi::restaurants`, `restaurant` |
//! | Orders | `POST /order`, `GET /order/user` | `FoodsApi::submit_order`, `order_history`, [`OrderHistoryPoller`] |
//! | Profile | `GET/PUT /auth/user/me` | `FoodsApi::profile`, `update_profile` |
//! | Partner menu | `GET /restaurant/menu`, `POST/PUT/DELETE /restaurant/menu/item` | `FoodsApi::partner_menu`, `add/update/delete_menu_item` |
//!
//! The cart never touches the network: it is plain in-memory state scoped to
//! one restaurant, with derived totals (see [`Cart`]).
//!
//! ## Quick Start
//!
//! ```no_run
//! use foods24_rs::{Cart, FoodsApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = FoodsApi::new("https://foods24-be.vercel.app");
//!     let session = api.login_user("asha@example.com", "hunter2").await?;
//!
//!     let restaurants = api.restaurants(&session).await?;
//!     let restaurant = api.restaurant(&session, &restaurants[0].id).await?;
//!
//!     let mut cart = Cart::for_restaurant(&restaurant.id);
//!     for item in restaurant.menu_items().iter().take(2) {
//!         cart.add_item(item);
//!     }
//!     println!("{} items, total {}", cart.item_count(), cart.total());
//!
//!     api.submit_order(&session, &cart.order_request()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! The library includes a binary for convenient CLI usage:
//!
//! ```bash
//! # Log in (token is saved for later invocations)
//! cargo run --release -- login asha@example.com hunter2
//!
//! # Browse
//! cargo run --release -- restaurants
//! cargo run --release -- menu <restaurant_id> --category Starters
//!
//! # Order two of one item and one of another
//! cargo run --release -- order <restaurant_id> <item_id>:2 <item_id>
//!
//! # One-shot history, or keep watching on the 10s poll
//! cargo run --release -- history
//! cargo run --release -- history --watch
//!
//! # Restaurant partners
//! cargo run --release -- --role restaurant login owner@spice.in s3cret
//! cargo run --release -- add-item "Paneer Tikka" 220 "char-grilled"
//! ```

pub mod api;
pub mod auth;
pub mod cart;
pub mod error;
pub mod menu;
pub mod models;
pub mod poll;
pub mod token_store;
pub mod utils;

pub use api::{FoodsApi, DEFAULT_API_URL};
pub use auth::{AuthFlow, RestaurantAuth, Session, UserAuth};
pub use cart::{Cart, CartLine};
pub use error::ApiError;
pub use menu::{categories, filter_by_category, ALL_CATEGORIES, DEFAULT_CATEGORY};
pub use models::{
    Menu, MenuItem, NewMenuItem, Order, OrderItemRequest, OrderLine, OrderRequest,
    OrderRestaurant, OrderStatus, Restaurant, RestaurantRegistration, UserProfile,
    UserRegistration,
};
pub use poll::{OrderHistoryPoller, DEFAULT_POLL_INTERVAL};
