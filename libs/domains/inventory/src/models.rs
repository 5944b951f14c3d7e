use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

/// Store-assigned category identifier (positive autoincrement integer)
pub type CategoryId = i64;

/// Store-assigned equipment identifier (positive autoincrement integer)
pub type EquipmentId = i64;

/// Physical condition of an equipment item
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Condition {
    New,
    Used,
    Refurbished,
}

/// Category entity - a named grouping referenced by equipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, assigned by the store
    pub id: CategoryId,
    /// Display name
    pub name: String,
}

/// Equipment entity - an inventory record as returned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Unique identifier, assigned by the store
    pub id: EquipmentId,
    /// Item name
    pub name: String,
    /// Physical condition
    pub condition: Condition,
    /// Units on hand, always positive
    pub quantity: i64,
    /// Owning category; resolved against the category directory for display
    pub category_id: CategoryId,
}

/// Validated wire payload for creating or replacing an equipment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDraft {
    #[validate(length(min = 1))]
    pub name: String,
    pub condition: Condition,
    #[validate(range(min = 1))]
    pub quantity: i64,
    pub category_id: CategoryId,
}

/// In-progress form state. Selections stay optional until the form controller
/// has validated every field and converted it into an [`EquipmentDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub condition: Option<Condition>,
    pub quantity: i64,
    pub category_id: Option<CategoryId>,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            condition: None,
            quantity: 1,
            category_id: None,
        }
    }
}

impl FormDraft {
    /// Prefill a draft from an existing record, for the edit path
    pub fn from_equipment(equipment: &Equipment) -> Self {
        Self {
            name: equipment.name.clone(),
            condition: Some(equipment.condition),
            quantity: equipment.quantity,
            category_id: Some(equipment.category_id),
        }
    }
}
