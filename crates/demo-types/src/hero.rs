//! Hero types

use serde::{Deserialize, Serialize};

/// Hero creation request
///
/// Unknown fields are ignored, so a client-supplied `id` never reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCreate {
    pub name: String,
    pub secret_name: String,
    #[serde(default)]
    pub age: Option<i64>,
}

/// A stored hero, as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i64>,
}

impl Hero {
    pub fn from_create(id: i64, hero: HeroCreate) -> Self {
        Self {
            id,
            name: hero.name,
            secret_name: hero.secret_name,
            age: hero.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_without_age() {
        let hero: HeroCreate =
            serde_json::from_str(r#"{"name":"Deadpond","secret_name":"Dive Wilson"}"#).unwrap();
        assert_eq!(hero.age, None);
    }

    #[test]
    fn test_create_ignores_client_id() {
        let hero: HeroCreate = serde_json::from_str(
            r#"{"id":42,"name":"Rusty-Man","secret_name":"Tommy Sharp","age":48}"#,
        )
        .unwrap();
        assert_eq!(hero.age, Some(48));
    }

    #[test]
    fn test_public_hero_serializes_null_age() {
        let hero = Hero::from_create(
            1,
            HeroCreate {
                name: "Spider-Boy".to_string(),
                secret_name: "Pedro Parqueador".to_string(),
                age: None,
            },
        );
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Spider-Boy",
                "secret_name": "Pedro Parqueador",
                "age": null
            })
        );
    }
}
