//! Domain Models
//!
//! The grocery item entity and its closed category set.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Product category, a fixed set shown in the item form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    Produce,
    Fruits,
    Dairy,
    DairyAlternatives,
    Bakery,
    FrozenFoods,
    CannedGoods,
    DryGoods,
    Snacks,
    Beverages,
    Household,
    #[default]
    Other,
}

impl Category {
    /// Every category, in form display order
    pub const ALL: [Category; 12] = [
        Category::Produce,
        Category::Fruits,
        Category::Dairy,
        Category::DairyAlternatives,
        Category::Bakery,
        Category::FrozenFoods,
        Category::CannedGoods,
        Category::DryGoods,
        Category::Snacks,
        Category::Beverages,
        Category::Household,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Fruits => "Fruits",
            Category::Dairy => "Dairy",
            Category::DairyAlternatives => "Dairy Alternatives",
            Category::Bakery => "Bakery",
            Category::FrozenFoods => "Frozen Foods",
            Category::CannedGoods => "Canned Goods",
            Category::DryGoods => "Dry Goods",
            Category::Snacks => "Snacks",
            Category::Beverages => "Beverages",
            Category::Household => "Household",
            Category::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Produce" => Category::Produce,
            "Fruits" => Category::Fruits,
            "Dairy" => Category::Dairy,
            "Dairy Alternatives" => Category::DairyAlternatives,
            "Bakery" => Category::Bakery,
            "Frozen Foods" => Category::FrozenFoods,
            "Canned Goods" => Category::CannedGoods,
            "Dry Goods" => Category::DryGoods,
            "Snacks" => Category::Snacks,
            "Beverages" => Category::Beverages,
            "Household" => Category::Household,
            _ => Category::Other,
        }
    }
}

// Persisted records store the display string; unknown strings fall back
// to Other rather than failing the whole read.
impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Category::from_str(&s))
    }
}

/// A single grocery list entry, the sole persisted entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Opaque unique id, system-minted, immutable after creation
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub category: Category,
    pub notes: String,
    pub completed: bool,
}

impl GroceryItem {
    /// Attach a freshly minted id to a form draft
    pub fn from_draft(id: String, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            quantity: draft.quantity.max(1),
            category: draft.category,
            notes: draft.notes,
            completed: draft.completed,
        }
    }
}

/// The id-less shape produced by the add/edit form
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: u32,
    pub category: Category,
    pub notes: String,
    pub completed: bool,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1,
            category: Category::Other,
            notes: String::new(),
            completed: false,
        }
    }
}

impl ItemDraft {
    /// Seed the edit form from an existing item
    pub fn seeded_from(item: &GroceryItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            category: item.category,
            notes: item.notes.clone(),
            completed: item.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = ItemDraft::default();
        assert_eq!(draft.quantity, 1);
        assert_eq!(draft.category, Category::Other);
        assert!(!draft.completed);
    }

    #[test]
    fn test_from_draft_clamps_quantity() {
        let draft = ItemDraft {
            name: "Milk".to_string(),
            quantity: 0,
            ..ItemDraft::default()
        };
        let item = GroceryItem::from_draft("a1".to_string(), draft);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id, "a1");
    }

    #[test]
    fn test_category_serializes_as_display_string() {
        let json = serde_json::to_value(Category::DairyAlternatives).unwrap();
        assert_eq!(json, serde_json::json!("Dairy Alternatives"));
    }

    #[test]
    fn test_unknown_category_falls_back_to_other() {
        let cat: Category = serde_json::from_value(serde_json::json!("Pet Supplies")).unwrap();
        assert_eq!(cat, Category::Other);
    }

    #[test]
    fn test_item_round_trips_through_serde() {
        let item = GroceryItem {
            id: "abc".to_string(),
            name: "Bread".to_string(),
            quantity: 2,
            category: Category::Bakery,
            notes: "whole grain".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: GroceryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
