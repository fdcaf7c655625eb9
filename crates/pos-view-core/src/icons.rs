//! # Category Icons
//!
//! Static keyword lookup from a category name to a display icon.
//! First matching keyword wins; names that match nothing get [`CategoryIcon::Label`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Icon shown next to a category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum CategoryIcon {
    Star,
    Coffee,
    CupSoda,
    Beer,
    IceCream,
    Cake,
    Soup,
    Noodles,
    Rice,
    Salad,
    Fish,
    Drumstick,
    Pizza,
    Sandwich,
    Cookie,
    Label,
}

/// Ordered keyword table. Thai and English keywords share one table so a
/// bilingual menu resolves the same way.
const KEYWORDS: &[(&str, CategoryIcon)] = &[
    ("coffee", CategoryIcon::Coffee),
    ("กาแฟ", CategoryIcon::Coffee),
    ("tea", CategoryIcon::Coffee),
    ("ชา", CategoryIcon::Coffee),
    ("beer", CategoryIcon::Beer),
    ("เบียร์", CategoryIcon::Beer),
    ("alcohol", CategoryIcon::Beer),
    ("drink", CategoryIcon::CupSoda),
    ("เครื่องดื่ม", CategoryIcon::CupSoda),
    ("juice", CategoryIcon::CupSoda),
    ("น้ำ", CategoryIcon::CupSoda),
    ("ice cream", CategoryIcon::IceCream),
    ("ไอศกรีม", CategoryIcon::IceCream),
    ("cake", CategoryIcon::Cake),
    ("เค้ก", CategoryIcon::Cake),
    ("dessert", CategoryIcon::Cake),
    ("ของหวาน", CategoryIcon::Cake),
    ("soup", CategoryIcon::Soup),
    ("ต้ม", CategoryIcon::Soup),
    ("แกง", CategoryIcon::Soup),
    ("noodle", CategoryIcon::Noodles),
    ("ก๋วยเตี๋ยว", CategoryIcon::Noodles),
    ("บะหมี่", CategoryIcon::Noodles),
    ("rice", CategoryIcon::Rice),
    ("ข้าว", CategoryIcon::Rice),
    ("salad", CategoryIcon::Salad),
    ("ยำ", CategoryIcon::Salad),
    ("ส้มตำ", CategoryIcon::Salad),
    ("seafood", CategoryIcon::Fish),
    ("fish", CategoryIcon::Fish),
    ("ปลา", CategoryIcon::Fish),
    ("ทะเล", CategoryIcon::Fish),
    ("chicken", CategoryIcon::Drumstick),
    ("ไก่", CategoryIcon::Drumstick),
    ("grill", CategoryIcon::Drumstick),
    ("ย่าง", CategoryIcon::Drumstick),
    ("pizza", CategoryIcon::Pizza),
    ("sandwich", CategoryIcon::Sandwich),
    ("bread", CategoryIcon::Sandwich),
    ("ขนมปัง", CategoryIcon::Sandwich),
    ("snack", CategoryIcon::Cookie),
    ("ขนม", CategoryIcon::Cookie),
];

/// Resolves the icon for a category name.
pub fn resolve_icon(name: &str, favorites: &str) -> CategoryIcon {
    if name == favorites {
        return CategoryIcon::Star;
    }

    let lowered = name.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(CategoryIcon::Label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert_eq!(resolve_icon("Iced COFFEE", "favorites"), CategoryIcon::Coffee);
        assert_eq!(resolve_icon("Soft Drinks", "favorites"), CategoryIcon::CupSoda);
        assert_eq!(resolve_icon("ข้าวผัด", "favorites"), CategoryIcon::Rice);
    }

    #[test]
    fn test_first_keyword_wins() {
        // "tea" precedes "drink" in the table
        assert_eq!(resolve_icon("Tea Drinks", "favorites"), CategoryIcon::Coffee);
    }

    #[test]
    fn test_fallback_and_favorites() {
        assert_eq!(resolve_icon("Specials", "favorites"), CategoryIcon::Label);
        assert_eq!(resolve_icon("favorites", "favorites"), CategoryIcon::Star);
    }
}
