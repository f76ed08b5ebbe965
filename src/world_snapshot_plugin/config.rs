// a strongly typed schema for the locator config and the world snapshot it carries

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct PlayerConfig {
    pub name: String,
    #[serde(default)]
    pub position: [f32; 3],
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObjectConfig {
    DynamicObject {
        object_id: u64,
        name: Option<String>,
        #[serde(default)]
        position: [f32; 3],
        container_id: Option<u64>,
        #[serde(default)]
        client_object: bool,
    },
    Mobile {
        object_id: u64,
        name: Option<String>,
        #[serde(default)]
        position: [f32; 3],
    },
    PermanentObject {
        permanent_id: i32,
        name: Option<String>,
        #[serde(default)]
        position: [f32; 3],
    },
    Panel {
        panel_id: String,
        #[serde(default = "visible_by_default")]
        visible: bool,
    },
}

fn visible_by_default() -> bool {
    true
}

impl ObjectConfig {
    /// Short human-readable label for spawn logs.
    pub fn label(&self) -> String {
        match self {
            ObjectConfig::DynamicObject { object_id, name, .. } => {
                format!("dynamic object {} '{}'", object_id, name.as_deref().unwrap_or(""))
            }
            ObjectConfig::Mobile { object_id, name, .. } => {
                format!("mobile {} '{}'", object_id, name.as_deref().unwrap_or(""))
            }
            ObjectConfig::PermanentObject { permanent_id, name, .. } => {
                format!("permanent object {} '{}'", permanent_id, name.as_deref().unwrap_or(""))
            }
            ObjectConfig::Panel { panel_id, .. } => format!("panel '{}'", panel_id),
        }
    }
}
