//! The fixed menu: four categories, three dishes each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// Image shown when a dish has no photo of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Starters,
    Mains,
    Desserts,
    Drinks,
}

impl Category {
    pub fn id(self) -> &'static str {
        match self {
            Category::Starters => "starters",
            Category::Mains => "mains",
            Category::Desserts => "desserts",
            Category::Drinks => "drinks",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Starters => "Appetizers",
            Category::Mains => "Main Dishes",
            Category::Desserts => "Desserts",
            Category::Drinks => "Beverages",
        }
    }

    pub fn aria_label(self) -> String {
        format!("View {}", self.display_name())
    }

    /// Dishes listed under this category, in menu order.
    pub fn items(self) -> &'static [MenuItem] {
        match self {
            Category::Starters => STARTERS,
            Category::Mains => MAINS,
            Category::Desserts => DESSERTS,
            Category::Drinks => DRINKS,
        }
    }

    /// Tab order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Starters,
            Category::Mains,
            Category::Desserts,
            Category::Drinks,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.id() == s.trim())
            .ok_or_else(|| MenuError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image: &'static str,
}

impl MenuItem {
    pub fn image_src(&self) -> &'static str {
        if self.image.trim().is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            self.image
        }
    }
}

const STARTERS: &[MenuItem] = &[
    MenuItem {
        name: "Nem Nuong",
        description: "Grilled pork skewers marinated in lemongrass and Khmer spices, served with pickled vegetables",
        price: "$12",
        image: "/images/nemnuong.jpg",
    },
    MenuItem {
        name: "Pleah Sach Ko",
        description: "Traditional Khmer beef ceviche with lime juice, fish sauce, and fresh herbs",
        price: "$14",
        image: "/images/pleahsachko.jpg",
    },
    MenuItem {
        name: "Num Krok",
        description: "Crispy rice flour and coconut dumplings with green onions and a sweet-savory dipping sauce",
        price: "$10",
        image: "/images/numkrok.jpg",
    },
];

const MAINS: &[MenuItem] = &[
    MenuItem {
        name: "Amok Trey",
        description: "Cambodia's national dish - steamed fish curry with coconut milk and kroeung spice paste in banana leaf",
        price: "$24",
        image: "/images/amok.jpg",
    },
    MenuItem {
        name: "Khor Sach Chrouk",
        description: "Caramelized pork belly slow-cooked in palm sugar, fish sauce, and Kampot pepper",
        price: "$22",
        image: "/images/khor.jpg",
    },
    MenuItem {
        name: "Somlor Machu Kreung",
        description: "Traditional sour soup with morning glory, pineapple, and your choice of fish or chicken",
        price: "$18",
        image: "/images/somlor.jpg",
    },
];

const DESSERTS: &[MenuItem] = &[
    MenuItem {
        name: "Num Ansom Chek",
        description: "Sticky rice and banana wrapped in banana leaf, steamed and served with coconut cream",
        price: "$8",
        image: "/images/ansom.jpg",
    },
    MenuItem {
        name: "Sankya Lapov",
        description: "Traditional pumpkin custard made with coconut milk and palm sugar",
        price: "$9",
        image: "/images/sankya.jpg",
    },
    MenuItem {
        name: "Chek Ktih",
        description: "Caramelized bananas in coconut milk with tapioca pearls and sesame seeds",
        price: "$7",
        image: "/images/chek.jpg",
    },
];

const DRINKS: &[MenuItem] = &[
    MenuItem {
        name: "Teuk Ampou",
        description: "Fresh sugar cane juice with lime and a hint of salt",
        price: "$6",
        image: "/images/terk.jpg",
    },
    MenuItem {
        name: "Teuk Krolok",
        description: "Traditional Cambodian iced coffee with sweetened condensed milk",
        price: "$5",
        image: "/images/mixfruitsmoothie.jpg",
    },
    MenuItem {
        name: "Sra Sor",
        description: "House-made rice wine infused with local herbs and spices",
        price: "$8",
        image: "/images/whitewhiskey.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_inventory_is_stable() {
        let all = Category::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], Category::default());

        let mut ids: Vec<&'static str> = all.iter().copied().map(Category::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);

        for c in all {
            assert!(!c.display_name().trim().is_empty());
            assert_eq!(c.items().len(), 3);
            for item in c.items() {
                assert!(item.price.starts_with('$'));
                assert!(item.image_src().starts_with("/images/"));
            }
        }
    }

    #[test]
    fn starters_render_in_menu_order() {
        let rendered: Vec<(&str, &str)> = Category::Starters
            .items()
            .iter()
            .map(|i| (i.name, i.price))
            .collect();
        assert_eq!(
            rendered,
            vec![("Nem Nuong", "$12"), ("Pleah Sach Ko", "$14"), ("Num Krok", "$10")]
        );
    }

    #[test]
    fn beverages_tab_maps_to_drinks() {
        let beverages = Category::all()
            .iter()
            .copied()
            .find(|c| c.display_name() == "Beverages")
            .unwrap();
        assert_eq!(beverages.id(), "drinks");
        let names: Vec<&str> = beverages.items().iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Teuk Ampou", "Teuk Krolok", "Sra Sor"]);
    }

    #[test]
    fn parses_ids_and_rejects_unknown() {
        for c in Category::all() {
            assert_eq!(c.id().parse::<Category>().unwrap(), *c);
            assert_eq!(c.to_string(), c.id());
        }
        let err = "specials".parse::<Category>().unwrap_err();
        assert!(matches!(err, MenuError::UnknownCategory(ref s) if s == "specials"));
    }

    #[test]
    fn serializes_as_lowercase_id() {
        let json = serde_json::to_string(&Category::Desserts).unwrap();
        assert_eq!(json, "\"desserts\"");
        let back: Category = serde_json::from_str("\"mains\"").unwrap();
        assert_eq!(back, Category::Mains);
    }

    #[test]
    fn missing_image_falls_back_to_placeholder() {
        let item = MenuItem {
            name: "Bai Sach Chrouk",
            description: "Pork and rice",
            price: "$9",
            image: "",
        };
        assert_eq!(item.image_src(), PLACEHOLDER_IMAGE);
        assert_eq!(Category::Drinks.aria_label(), "View Beverages");
    }
}
