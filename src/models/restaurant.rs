use serde::{Deserialize, Serialize};

/// A purchasable dish on a restaurant's menu.
///
/// Owned by the menu data fetched from the API; the cart copies the display
/// fields it needs at add time and never mutates the source item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Unit price as a plain JSON number. No minor-unit handling; rounding is
    /// a rendering concern, not a model concern.
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Missing categories fall into the "Other" bucket, see `crate::menu`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Strikethrough price shown next to a discounted item.
    #[serde(
        rename = "originalPrice",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<f64>,
}

/// A restaurant's menu as the API nests it: `{ "items": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Menu {
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// A restaurant as returned by `/api/restaurants` (list, no menu) and
/// `/api/restaurants/{id}` (with nested menu).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "r_name")]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<Menu>,
}

impl Restaurant {
    /// The menu items, or an empty slice when the API omitted the menu
    /// (the list endpoint does).
    pub fn menu_items(&self) -> &[MenuItem] {
        self.menu.as_ref().map(|m| m.items.as_slice()).unwrap_or(&[])
    }
}

/// Body for creating or editing a menu item from the partner dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMenuItem {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_restaurant_with_nested_menu() {
        let json = r#"{
            "_id": "64fa12",
            "r_name": "Spice Garden",
            "location": "MG Road",
            "phone": "9876543210",
            "menu": {
                "items": [
                    {
                        "_id": "it-1",
                        "name": "Paneer Tikka",
                        "price": 220,
                        "category": "Starters",
                        "originalPrice": 260
                    },
                    { "_id": "it-2", "name": "Lassi", "price": 60 }
                ]
            }
        }"#;

        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, "64fa12");
        assert_eq!(r.name, "Spice Garden");
        assert_eq!(r.menu_items().len(), 2);
        assert_eq!(r.menu_items()[0].original_price, Some(260.0));
        assert_eq!(r.menu_items()[1].category, None);
        assert_eq!(r.menu_items()[1].description, None);
    }

    #[test]
    fn restaurant_without_menu_has_no_items() {
        let json = r#"{ "_id": "a", "r_name": "Dosa Hut", "location": "", "phone": "" }"#;
        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert!(r.menu_items().is_empty());
    }

    #[test]
    fn new_menu_item_skips_absent_optionals() {
        let item = NewMenuItem {
            name: "Idli".to_string(),
            price: 40.0,
            description: None,
            category: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Idli", "price": 40.0 }));
    }
}
