use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{from_str, Value};
use std::fs;

#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize)]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub team: String,
    pub avatar: String,
}

// Create
impl Developer {
    /// The built-in roster, used when no roster file is given.
    pub fn reference() -> Vec<Self> {
        vec![
            Self::new("1", "Alice Johnson", "Frontend", "AJ"),
            Self::new("2", "Bob Smith", "Backend", "BS"),
            Self::new("3", "Carol Williams", "DevOps", "CW"),
            Self::new("4", "David Brown", "Frontend", "DB"),
            Self::new("5", "Eve Davis", "Backend", "ED"),
        ]
    }

    pub fn from_config(path: &str) -> crate::model::Result<Vec<Self>> {
        let json_str = fs::read_to_string(path)?;
        Self::parse(&json_str)
    }

    fn new(
        id: impl ToString,
        name: impl ToString,
        team: impl ToString,
        avatar: impl ToString,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            team: team.to_string(),
            avatar: avatar.to_string(),
        }
    }
}

// Parser
impl Developer {
    fn parse(json_str: &str) -> crate::model::Result<Vec<Self>> {
        let elements: IndexMap<String, Value> = from_str(json_str)?;
        let mut result = Vec::new();
        for (name, details) in elements {
            let Some(id) = details["id"].as_str() else {
                return Err("Not found 'id' field".into());
            };
            let Some(team) = details["team"].as_str() else {
                return Err("Not found 'team' field".into());
            };
            let Some(avatar) = details["avatar"].as_str() else {
                return Err("Not found 'avatar' field".into());
            };
            let new = Self::new(id, name, team, avatar);
            result.push(new);
        }
        Ok(result)
    }
}
