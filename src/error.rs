use bevy::prelude::Entity;
use bevy::reflect::ApplyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Field '{field}' not found on '{type_path}'")]
    FieldNotFound { type_path: String, field: String },

    #[error("Failed to apply value to field '{field}': {source}")]
    FieldApply {
        field: String,
        #[source]
        source: ApplyError,
    },

    #[error("Type '{0}' is not a registered reflectable component")]
    UnregisteredComponent(String),

    #[error("Entity {0} does not exist")]
    MissingEntity(Entity),
}
