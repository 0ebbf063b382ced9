use serde::{Deserialize, Serialize};

/// Profile returned by `GET /auth/user/me` and sent back by `PUT`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Body for `POST /auth/user/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Body for `POST /auth/restaurant/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantRegistration {
    pub email: String,
    pub password: String,
    #[serde(rename = "r_name")]
    pub name: String,
    pub location: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurant_registration_uses_r_name_on_the_wire() {
        let reg = RestaurantRegistration {
            email: "owner@spice.in".to_string(),
            password: "s3cret".to_string(),
            name: "Spice Garden".to_string(),
            location: "MG Road".to_string(),
            phone: "98765".to_string(),
        };
        let json = serde_json::to_value(&reg).unwrap();
        assert_eq!(json["r_name"], "Spice Garden");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn profile_tolerates_missing_fields() {
        let p: UserProfile = serde_json::from_str(r#"{ "name": "Asha" }"#).unwrap();
        assert_eq!(p.name, "Asha");
        assert_eq!(p.email, "");
    }
}
