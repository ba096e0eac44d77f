use crate::shared::paging::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Entity for Category {
    fn entity_id(&self) -> EntityId {
        EntityId::Int(self.id)
    }
}
