use crate::shared::paging::{Entity, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub id: i64,
    pub name: String,
}

impl Entity for Size {
    fn entity_id(&self) -> EntityId {
        EntityId::Int(self.id)
    }
}
