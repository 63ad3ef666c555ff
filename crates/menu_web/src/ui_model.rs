//! Class names and row models shared by wasm and native builds.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test what
//! the menu renders on the host.

use khmer_menu::catalog::{Category, MenuItem};
use khmer_menu::switcher::CategorySwitcher;
use khmer_menu::time::Millis;
use khmer_menu::viewport::DeviceClass;

pub const ITEM_CLASS: &str = "menu-item animate-on-scroll fade-up";

/// Config is read from `<script id="menu-config" type="application/json">`.
pub const CONFIG_ELEMENT_ID: &str = "menu-config";

pub fn section_class(device: DeviceClass) -> &'static str {
    match device {
        DeviceClass::Mobile => "menu-section is-mobile",
        DeviceClass::Desktop => "menu-section",
    }
}

pub fn category_button_class(is_active: bool) -> &'static str {
    if is_active {
        "menu-category-btn active"
    } else {
        "menu-category-btn"
    }
}

pub fn items_class(fading: bool) -> &'static str {
    if fading {
        "menu-items items-fading"
    } else {
        "menu-items"
    }
}

/// One rendered dish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    /// `{category}-{index}`. A new category means new keys, so the rows are
    /// rebuilt and their entrance animation starts over.
    pub key: String,
    pub index: usize,
    pub item: MenuItem,
    pub style: String,
}

pub fn item_rows(switcher: &CategorySwitcher) -> Vec<ItemRow> {
    let category = switcher.displayed();
    category
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| ItemRow {
            key: item_key(category, index),
            index,
            item: *item,
            style: item_style(switcher.stagger_delay_ms(index)),
        })
        .collect()
}

pub fn item_key(category: Category, index: usize) -> String {
    format!("{}-{}", category.id(), index)
}

pub fn item_style(delay_ms: Millis) -> String {
    format!("animation-delay: {delay_ms}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_render_lists_starters() {
        let s = CategorySwitcher::default();
        let rows = item_rows(&s);
        let summary: Vec<(&str, &str)> = rows.iter().map(|r| (r.item.name, r.item.price)).collect();
        assert_eq!(
            summary,
            vec![("Nem Nuong", "$12"), ("Pleah Sach Ko", "$14"), ("Num Krok", "$10")]
        );
        assert_eq!(rows[0].key, "starters-0");
        assert_eq!(rows[2].style, "animation-delay: 100ms");
    }

    #[test]
    fn beverages_click_renders_drinks_after_the_swap() {
        let mut s = CategorySwitcher::default();
        s.select(Category::Drinks, 0);
        assert_eq!(item_rows(&s)[0].key, "starters-0");

        s.tick(300);
        let rows = item_rows(&s);
        let summary: Vec<(&str, &str)> = rows.iter().map(|r| (r.item.name, r.item.price)).collect();
        assert_eq!(
            summary,
            vec![("Teuk Ampou", "$6"), ("Teuk Krolok", "$5"), ("Sra Sor", "$8")]
        );
        assert!(rows.iter().all(|r| r.key.starts_with("drinks-")));
    }

    #[test]
    fn class_helpers_follow_state() {
        assert_eq!(section_class(DeviceClass::Mobile), "menu-section is-mobile");
        assert_eq!(section_class(DeviceClass::Desktop), "menu-section");
        assert_eq!(category_button_class(true), "menu-category-btn active");
        assert_eq!(category_button_class(false), "menu-category-btn");
        assert_eq!(items_class(true), "menu-items items-fading");
        assert_eq!(items_class(false), "menu-items");
    }
}
