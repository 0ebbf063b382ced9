pub fn remove_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url[..url.len() - 1].to_string()
    } else {
        url.to_string()
    }
}

/// Render a price for display. Rounding lives here, never in the cart.
pub fn format_price(price: f64) -> String {
    format!("₹{:.2}", price)
}
