use crate::shared::paging::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Product colour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: i64,
    pub name: String,
}

impl Entity for Color {
    fn entity_id(&self) -> EntityId {
        EntityId::Int(self.id)
    }
}
