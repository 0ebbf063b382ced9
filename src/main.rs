mod api;
mod auth;
mod cart;
mod error;
mod menu;
mod models;
mod poll;
mod token_store;
mod utils;

use anyhow::{anyhow, Result};
use api::{FoodsApi, DEFAULT_API_URL};
use auth::{AuthFlow, RestaurantAuth, Session, UserAuth};
use cart::Cart;
use error::ApiError;
use models::{NewMenuItem, Order, RestaurantRegistration, UserProfile, UserRegistration};
use poll::{OrderHistoryPoller, DEFAULT_POLL_INTERVAL};

const DEFAULT_TOKEN_FILE: &str = "foods24_token.json";

fn print_usage(bin: &str) {
    eprintln!("Usage:");
    eprintln!("  {} [flags] <command> [args]", bin);
    eprintln!();
    eprintln!("  Flags:");
    eprintln!("    --api-url <url>      API base URL (default: {})", DEFAULT_API_URL);
    eprintln!("    --role <role>        user | restaurant (default: user)");
    eprintln!("    --token-file <path>  where the bearer token lives (default: {})", DEFAULT_TOKEN_FILE);
    eprintln!("    --category <name>    filter for the menu command ('all' for everything)");
    eprintln!("    --watch              keep polling for the history command");
    eprintln!();
    eprintln!("  Commands:");
    eprintln!("    login <email> <password>");
    eprintln!("    register-user <name> <email> <phone> <password>");
    eprintln!("    register-restaurant <name> <location> <phone> <email> <password>");
    eprintln!("    logout");
    eprintln!("    restaurants");
    eprintln!("    menu <restaurant_id>");
    eprintln!("    order <restaurant_id> <item_id[:qty]>...");
    eprintln!("    history");
    eprintln!("    profile");
    eprintln!("    update-profile <name> <email> <phone>");
    eprintln!("    partner-menu");
    eprintln!("    add-item <name> <price> [description]");
    eprintln!("    update-item <item_id> <name> <price> [description]");
    eprintln!("    delete-item <item_id>");
    eprintln!();
    eprintln!("  Example:");
    eprintln!("    {} order 64fa12 it-1:2 it-7", bin);
}

struct Flags {
    api_url: String,
    role: String,
    token_file: String,
    category: Option<String>,
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raw_args: Vec<String> = std::env::args().collect();
    let bin = raw_args[0].clone();

    let mut flags = Flags {
        api_url: DEFAULT_API_URL.to_string(),
        role: "user".to_string(),
        token_file: DEFAULT_TOKEN_FILE.to_string(),
        category: None,
        watch: false,
    };
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < raw_args.len() {
        match raw_args[i].as_str() {
            "--api-url" | "--role" | "--token-file" | "--category" => {
                let flag = raw_args[i].clone();
                i += 1;
                if i >= raw_args.len() {
                    eprintln!("{} requires a value", flag);
                    std::process::exit(1);
                }
                let value = raw_args[i].clone();
                match flag.as_str() {
                    "--api-url" => flags.api_url = value,
                    "--role" => flags.role = value,
                    "--token-file" => flags.token_file = value,
                    _ => flags.category = Some(value),
                }
            }
            "--watch" => flags.watch = true,
            _ => positional.push(raw_args[i].clone()),
        }
        i += 1;
    }

    if positional.is_empty() {
        print_usage(&bin);
        std::process::exit(1);
    }

    let command = positional.remove(0);
    let args = positional;

    if let Err(e) = run_command(&command, &args, &flags).await {
        if e.downcast_ref::<ApiError>().is_some_and(|e| e.is_auth()) {
            eprintln!("Not authenticated. Run `{} login <email> <password>` first.", bin);
        } else {
            eprintln!("{}: {}", command, e);
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run_command(command: &str, args: &[String], flags: &Flags) -> Result<()> {
    let api = FoodsApi::new(&flags.api_url);

    match (command, args.len()) {
        ("login", 2) => match flags.role.as_str() {
            "user" => do_login(UserAuth::new(api), &args[0], &args[1], &flags.token_file).await,
            "restaurant" => {
                do_login(RestaurantAuth::new(api), &args[0], &args[1], &flags.token_file).await
            }
            other => Err(anyhow!("Unknown role: '{}'. Use user or restaurant.", other)),
        },
        ("register-user", 4) => {
            let session = UserAuth::new(api)
                .register(&UserRegistration {
                    name: args[0].clone(),
                    email: args[1].clone(),
                    phone: args[2].clone(),
                    password: args[3].clone(),
                })
                .await?;
            token_store::save_session(&session, &flags.token_file)?;
            eprintln!("Registered user {} and logged in.", args[1]);
            Ok(())
        }
        ("register-restaurant", 5) => {
            let session = RestaurantAuth::new(api)
                .register(&RestaurantRegistration {
                    name: args[0].clone(),
                    location: args[1].clone(),
                    phone: args[2].clone(),
                    email: args[3].clone(),
                    password: args[4].clone(),
                })
                .await?;
            token_store::save_session(&session, &flags.token_file)?;
            eprintln!("Registered restaurant {} and logged in.", args[0]);
            Ok(())
        }
        ("logout", 0) => {
            token_store::clear_session(&flags.token_file)?;
            eprintln!("Logged out.");
            Ok(())
        }
        ("restaurants", 0) => {
            let session = load_session(&flags.token_file)?;
            let restaurants = api.restaurants(&session).await?;
            println!("{}", serde_json::to_string_pretty(&restaurants)?);
            Ok(())
        }
        ("menu", 1) => {
            let session = load_session(&flags.token_file)?;
            let restaurant = api.restaurant(&session, &args[0]).await?;
            let items = restaurant.menu_items();
            eprintln!("Categories: {}", menu::categories(items).join(", "));
            let selection = flags.category.as_deref().unwrap_or(menu::ALL_CATEGORIES);
            let filtered = menu::filter_by_category(items, selection);
            println!("{}", serde_json::to_string_pretty(&filtered)?);
            Ok(())
        }
        ("order", n) if n >= 2 => {
            let session = load_session(&flags.token_file)?;
            do_order(&api, &session, &args[0], &args[1..]).await
        }
        ("history", 0) => {
            let session = load_session(&flags.token_file)?;
            if flags.watch {
                watch_history(&api, session).await
            } else {
                let orders = api.order_history(&session).await?;
                println!("{}", serde_json::to_string_pretty(&orders)?);
                Ok(())
            }
        }
        ("profile", 0) => {
            let session = load_session(&flags.token_file)?;
            let profile = api.profile(&session).await?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
            Ok(())
        }
        ("update-profile", 3) => {
            let session = load_session(&flags.token_file)?;
            let profile = UserProfile {
                name: args[0].clone(),
                email: args[1].clone(),
                phone: args[2].clone(),
            };
            api.update_profile(&session, &profile).await?;
            eprintln!("Profile updated.");
            Ok(())
        }
        ("partner-menu", 0) => {
            let session = load_session(&flags.token_file)?;
            let menu = api.partner_menu(&session).await?;
            println!("{}", serde_json::to_string_pretty(&menu.items)?);
            Ok(())
        }
        ("add-item", n) if n == 2 || n == 3 => {
            let session = load_session(&flags.token_file)?;
            api.add_menu_item(&session, &parse_new_item(&args[0], &args[1], args.get(2))?)
                .await?;
            eprintln!("Added {}.", args[0]);
            Ok(())
        }
        ("update-item", n) if n == 3 || n == 4 => {
            let session = load_session(&flags.token_file)?;
            api.update_menu_item(
                &session,
                &args[0],
                &parse_new_item(&args[1], &args[2], args.get(3))?,
            )
            .await?;
            eprintln!("Updated {}.", args[0]);
            Ok(())
        }
        ("delete-item", 1) => {
            let session = load_session(&flags.token_file)?;
            api.delete_menu_item(&session, &args[0]).await?;
            eprintln!("Deleted {}.", args[0]);
            Ok(())
        }
        _ => Err(anyhow!(
            "Unknown command or wrong arguments: '{}'. Run with no args for usage.",
            command
        )),
    }
}

fn load_session(token_file: &str) -> Result<Session> {
    token_store::load_session(token_file).map_err(|_| anyhow!(ApiError::Unauthenticated))
}

async fn do_login<A: AuthFlow>(auth: A, email: &str, password: &str, token_file: &str) -> Result<()> {
    let session = auth.login(email, password).await?;
    token_store::save_session(&session, token_file)?;
    eprintln!("Logged in as {} ({}).", email, auth.role());
    Ok(())
}

fn parse_new_item(name: &str, price: &str, description: Option<&String>) -> Result<NewMenuItem> {
    let price: f64 = price
        .parse()
        .map_err(|_| anyhow!("Price must be a number, got '{}'", price))?;
    Ok(NewMenuItem {
        name: name.to_string(),
        price,
        description: description.cloned(),
        category: None,
    })
}

/// Split an `item_id[:qty]` pick. A missing quantity means 1; an explicit 0
/// or non-numeric quantity is rejected rather than silently adjusted.
fn parse_pick(pick: &str) -> Result<(&str, u32)> {
    match pick.split_once(':') {
        Some((id, qty)) => {
            let qty: u32 = qty
                .parse()
                .map_err(|_| anyhow!("Bad quantity in '{}'", pick))?;
            if qty == 0 {
                return Err(anyhow!("Quantity must be at least 1 in '{}'", pick));
            }
            Ok((id, qty))
        }
        None => Ok((pick, 1)),
    }
}

/// Build a cart from `item_id[:qty]` picks against the restaurant's live
/// menu, show the lines, then submit.
async fn do_order(
    api: &FoodsApi,
    session: &Session,
    restaurant_id: &str,
    picks: &[String],
) -> Result<()> {
    let restaurant = api.restaurant(session, restaurant_id).await?;
    let mut cart = Cart::for_restaurant(&restaurant.id);

    for pick in picks {
        let (item_id, quantity) = parse_pick(pick)?;

        let item = restaurant
            .menu_items()
            .iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| anyhow!("'{}' is not on {}'s menu", item_id, restaurant.name))?;

        cart.add_item(item);
        if quantity > 1 {
            cart.change_quantity(item_id, i64::from(quantity) - 1);
        }
    }

    for line in cart.lines() {
        eprintln!(
            "  {} x {} = {}",
            line.quantity,
            line.name,
            utils::format_price(line.price * f64::from(line.quantity))
        );
    }
    eprintln!(
        "Total: {} ({} items)",
        utils::format_price(cart.total()),
        cart.item_count()
    );

    api.submit_order(session, &cart.order_request()).await?;
    cart.clear();
    eprintln!("Order placed with {}.", restaurant.name);
    Ok(())
}

fn print_history_summary(orders: &[Order]) {
    for order in orders {
        let restaurant = order
            .restaurant
            .as_ref()
            .map(|r| r.name.as_str())
            .unwrap_or("Unknown Restaurant");
        println!(
            "{}  {:<12} {:<24} {}",
            order.created_at,
            order.status.label(),
            restaurant,
            utils::format_price(order.total_amount)
        );
    }
}

/// `history --watch`: print a summary every time the poller lands a new
/// snapshot, until interrupted.
async fn watch_history(api: &FoodsApi, session: Session) -> Result<()> {
    let mut poller = OrderHistoryPoller::spawn(api.api_url(), session, DEFAULT_POLL_INTERVAL);
    eprintln!(
        "[watch] refreshing every {}s, Ctrl-C to stop",
        DEFAULT_POLL_INTERVAL.as_secs()
    );

    while poller.changed().await {
        let orders = poller.latest();
        eprintln!("[watch] {} order(s)", orders.len());
        print_history_summary(&orders);
    }

    Ok(())
}
