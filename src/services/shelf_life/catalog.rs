//! Embedded USDA-derived shelf-life table.
//!
//! Entry order is load-bearing: the match engine keeps the first entry on a
//! score tie, so declaration order is the tie-break. Table content is part
//! of the matching contract and must not drift between deployments.

use super::inference::CATEGORY_HINTS;
use super::types::{Category, ShelfLifeEntry};
use crate::types::errors::TableError;

/// Known products with their receipt keywords and shelf life in days.
pub static CATALOG: &[ShelfLifeEntry] = &[
    // ── Dairy ──
    ShelfLifeEntry {
        name: "Whole Milk",
        keywords: &[
            "milk", "whole milk", "2% milk", "skim milk", "1% milk", "mlk", "pc milk", "2 pc milk",
        ],
        category: Category::Dairy,
        emoji: "🥛",
        shelf_days: 7,
    },
    ShelfLifeEntry {
        name: "Heavy Cream",
        keywords: &["cream", "heavy cream", "whipping cream", "half and half"],
        category: Category::Dairy,
        emoji: "🥛",
        shelf_days: 10,
    },
    ShelfLifeEntry {
        name: "Butter",
        keywords: &["butter", "unsalted butter", "salted butter"],
        category: Category::Dairy,
        emoji: "🧈",
        shelf_days: 30,
    },
    ShelfLifeEntry {
        name: "Yogurt",
        keywords: &["yogurt", "greek yogurt", "yoghurt"],
        category: Category::Dairy,
        emoji: "🥛",
        shelf_days: 14,
    },
    ShelfLifeEntry {
        name: "Cheddar Cheese",
        keywords: &["cheddar", "cheddar cheese"],
        category: Category::Dairy,
        emoji: "🧀",
        shelf_days: 28,
    },
    ShelfLifeEntry {
        name: "Mozzarella",
        keywords: &["mozzarella", "fresh mozzarella"],
        category: Category::Dairy,
        emoji: "🧀",
        shelf_days: 14,
    },
    ShelfLifeEntry {
        name: "Cheese (Sliced)",
        keywords: &["cheese", "american cheese", "sliced cheese", "swiss"],
        category: Category::Dairy,
        emoji: "🧀",
        shelf_days: 14,
    },
    ShelfLifeEntry {
        name: "Cream Cheese",
        keywords: &["cream cheese", "philadelphia"],
        category: Category::Dairy,
        emoji: "🧀",
        shelf_days: 14,
    },
    ShelfLifeEntry {
        name: "Sour Cream",
        keywords: &["sour cream"],
        category: Category::Dairy,
        emoji: "🥛",
        shelf_days: 14,
    },
    ShelfLifeEntry {
        name: "Cottage Cheese",
        keywords: &["cottage cheese"],
        category: Category::Dairy,
        emoji: "🧀",
        shelf_days: 7,
    },
    ShelfLifeEntry {
        name: "Eggs",
        keywords: &[
            "eggs", "large eggs", "egg", "dozen eggs", "egs", "wht eggs", "lg wht eggs", "mp eggs",
        ],
        category: Category::Dairy,
        emoji: "🥚",
        shelf_days: 21,
    },
    // ── Meat & Poultry ──
    ShelfLifeEntry {
        name: "Chicken Breast",
        keywords: &[
            "chicken",
            "chicken breast",
            "chkn",
            "chicken brst",
            "bnls sknls chkn",
            "ckn",
            "ckn brst",
            "rotis ckn",
        ],
        category: Category::Meat,
        emoji: "🍗",
        shelf_days: 2,
    },
    ShelfLifeEntry {
        name: "Ground Beef",
        keywords: &["ground beef", "grnd beef", "hamburger", "beef"],
        category: Category::Meat,
        emoji: "🥩",
        shelf_days: 2,
    },
    ShelfLifeEntry {
        name: "Steak",
        keywords: &["steak", "ribeye", "sirloin", "ny strip", "filet"],
        category: Category::Meat,
        emoji: "🥩",
        shelf_days: 3,
    },
    ShelfLifeEntry {
        name: "Pork Chops",
        keywords: &["pork", "pork chops", "pork loin"],
        category: Category::Meat,
        emoji: "🥩",
        shelf_days: 3,
    },
    ShelfLifeEntry {
        name: "Bacon",
        keywords: &["bacon", "turkey bacon"],
        category: Category::Meat,
        emoji: "🥓",
        shelf_days: 7,
    },
    ShelfLifeEntry {
        name: "Deli Meat",
        keywords: &[
            "deli",
            "deli meat",
            "turkey deli",
            "ham deli",
            "lunch meat",
            "salami",
            "prosciutto",
        ],
        category: Category::Meat,
        emoji: "🥩",
        shelf_days: 5,
    },
    ShelfLifeEntry {
        name: "Hot Dogs",
        keywords: &["hot dog", "hot dogs", "franks", "sausage", "bratwurst"],
        category: Category::Meat,
        emoji: "🌭",
        shelf_days: 7,
    },
    ShelfLifeEntry {
        name: "Ground Turkey",
        keywords: &["ground turkey", "turkey"],
        category: Category::Meat,
        emoji: "🍗",
        shelf_days: 2,
    },
    // ── Seafood ──
    ShelfLifeEntry {
        name: "Fresh Salmon",
        keywords: &["salmon", "fresh salmon", "salmon fillet"],
        category: Category::Seafood,
        emoji: "🐟",
        shelf_days: 2,
    },
    ShelfLifeEntry {
        name: "Shrimp",
        keywords: &["shrimp", "prawns"],
        category: Category::Seafood,
        emoji: "🦐",
        shelf_days: 2,
    },
    ShelfLifeEntry {
        name: "Tilapia",
        keywords: &["tilapia", "fish", "fish fillet", "cod", "catfish"],
        category: Category::Seafood,
        emoji: "🐟",
        shelf_days: 2,
    },
    ShelfLifeEntry {
        name: "Crab Meat",
        keywords: &["crab", "crab meat"],
        category: Category::Seafood,
        emoji: "🦀",
        shelf_days: 2,
    },
    // ── Fruits ──
    ShelfLifeEntry {
        name: "Bananas",
        keywords: &["banana", "bananas", "org bnnas", "bnna", "bnn", "bnna ylw"],
        category: Category::Fruit,
        emoji: "🍌",
        shelf_days: 5,
    },
    ShelfLifeEntry {
        name: "Apples",
        keywords: &["apple", "apples", "gala", "fuji", "granny smith"],
        category: Category::Fruit,
        emoji: "🍎",
        shelf_days: 21,
    },
    ShelfLifeEntry {
        name: "Strawberries",
        keywords: &["strawberry", "strawberries", "berries"],
        category: Category::Fruit,
        emoji: "🍓",
        shelf_days: 5,
    },
    ShelfLifeEntry {
        name: "Blueberries",
        keywords: &["blueberry", "blueberries"],
        category: Category::Fruit,
        emoji: "🫐",
        shelf_days: 7,
    },
    ShelfLifeEntry {
        name: "Grapes",
        keywords: &["grape", "grapes"],
        category: Category::Fruit,
        emoji: "🍇",
        shelf_days: 7,
    },
    ShelfLifeEntry {
        name: "Oranges",
        keywords: &["orange", "oranges", "navel", "clementine", "mandarin"],
        category: Category::Fruit,
        emoji: "🍊",
        shelf_days: 14,
    },
    ShelfLifeEntry {
        name: "Lemons",
        keywords: &["lemon", "lemons", "lime", "limes"],
        category: Category::Fruit,
        emoji: "🍋",
        shelf_days: 21,
    },
    ShelfLifeEntry {
        name: "Avocados",
        keywords: &["avocado", "avocados"],
        category: Category::Fruit,
        emoji: "🥑",
        shelf_days: 4,
    },
    ShelfLifeEntry {
        name: "Watermelon",
        keywords: &["watermelon", "melon", "cantaloupe", "honeydew"],
        category: Category::Fruit,
        emoji: "🍉",
        shelf_days: 5,
    },
    ShelfLifeEntry {
        name: "Peaches",
        keywords: &["peach", "peaches", "nectarine", "plum"],
        category: Category::Fruit,
        emoji: "🍑",
        shelf_days: 4,
    },
    // ── Vegetables ──
    ShelfLifeEntry {
        name: "Lettuce",
        keywords: &["lettuce", "romaine", "iceberg", "spring mix", "salad mix", "greens"],
        category: Category::Vegetable,
        emoji: "🥬",
        shelf_days: 7,
    },
    ShelfLifeEntry {
        name: "Tomatoes",
        keywords: &["tomato", "tomatoes", "cherry tomato", "grape tomato"],
        category: Category::Vegetable,
        emoji: "🍅",
        shelf_days: 7,
    },
    ShelfLifeEntry {
        name: "Bell Peppers",
        keywords: &["bell pepper", "bell peppers", "pepper", "peppers"],
        category: Category::Vegetable,
        emoji: "🫑",
        shelf_days: 10,
    },
    ShelfLifeEntry {
        name: "Broccoli",
        keywords: &["broccoli", "broccoli florets"],
        category: Category::Vegetable,
        emoji: "🥦",
        shelf_days: 5,
    },
    ShelfLifeEntry {
        name: "Carrots",
        keywords: &["carrot", "carrots", "baby carrots"],
        category: Category::Vegetable,
        emoji: "🥕",
        shelf_days: 21,
    },
    ShelfLifeEntry {
        name: "Spinach",
        keywords: &["spinach", "baby spinach"],
        category: Category::Vegetable,
        emoji: "🥬",
        shelf_days: 5,
    },
    ShelfLifeEntry {
        name: "Onions",
        keywords: &["onion", "onions", "red onion", "yellow onion"],
        category: Category::Vegetable,
        emoji: "🧅",
        shelf_days: 30,
    },
    ShelfLifeEntry {
        name: "Potatoes",
        keywords: &["potato", "potatoes", "russet", "yukon"],
        category: Category::Vegetable,
        emoji: "🥔",
        shelf_days: 21,
    },
    ShelfLifeEntry {
        name: "Garlic",
        keywords: &["garlic"],
        category: Category::Vegetable,
        emoji: "🧄",
        shelf_days: 30,
    },
    ShelfLifeEntry {
        name: "Mushrooms",
        keywords: &["mushroom", "mushrooms", "baby bella"],
        category: Category::Vegetable,
        emoji: "🍄",
        shelf_days: 5,
    },
    ShelfLifeEntry {
        name: "Celery",
        keywords: &["celery"],
        category: Category::Vegetable,
        emoji: "🥬",
        shelf_days: 14,
    },
    ShelfLifeEntry {
        name: "Cucumbers",
        keywords: &["cucumber", "cucumbers"],
        category: Category::Vegetable,
        emoji: "🥒",
        shelf_days: 7,
    },
    ShelfLifeEntry {
        name: "Corn",
        keywords: &["corn", "corn on the cob", "sweet corn"],
        category: Category::Vegetable,
        emoji: "🌽",
        shelf_days: 3,
    },
    ShelfLifeEntry {
        name: "Green Beans",
        keywords: &["green bean", "green beans", "string beans"],
        category: Category::Vegetable,
        emoji: "🫛",
        shelf_days: 5,
    },
    ShelfLifeEntry {
        name: "Zucchini",
        keywords: &["zucchini", "squash", "yellow squash"],
        category: Category::Vegetable,
        emoji: "🥒",
        shelf_days: 5,
    },
    // ── Bakery ──
    ShelfLifeEntry {
        name: "White Bread",
        keywords: &[
            "bread",
            "white bread",
            "wheat bread",
            "sandwich bread",
            "wonder bread",
            "brd",
            "brd wht",
            "wht brd",
        ],
        category: Category::Bakery,
        emoji: "🍞",
        shelf_days: 5,
    },
    ShelfLifeEntry {
        name: "Tortillas",
        keywords: &["tortilla", "tortillas", "wraps", "flour tortilla"],
        category: Category::Bakery,
        emoji: "🫓",
        shelf_days: 14,
    },
    ShelfLifeEntry {
        name: "Bagels",
        keywords: &["bagel", "bagels"],
        category: Category::Bakery,
        emoji: "🥯",
        shelf_days: 5,
    },
    ShelfLifeEntry {
        name: "Muffins",
        keywords: &["muffin", "muffins"],
        category: Category::Bakery,
        emoji: "🧁",
        shelf_days: 3,
    },
    ShelfLifeEntry {
        name: "Croissants",
        keywords: &["croissant", "croissants", "pastry"],
        category: Category::Bakery,
        emoji: "🥐",
        shelf_days: 3,
    },
    // ── Beverages ──
    ShelfLifeEntry {
        name: "Orange Juice",
        keywords: &["orange juice", "oj", "juice"],
        category: Category::Beverage,
        emoji: "🍊",
        shelf_days: 10,
    },
    ShelfLifeEntry {
        name: "Almond Milk",
        keywords: &["almond milk", "oat milk", "soy milk", "plant milk"],
        category: Category::Beverage,
        emoji: "🥛",
        shelf_days: 7,
    },
    // ── Prepared / Deli ──
    ShelfLifeEntry {
        name: "Hummus",
        keywords: &["hummus"],
        category: Category::Prepared,
        emoji: "🫘",
        shelf_days: 7,
    },
    ShelfLifeEntry {
        name: "Guacamole",
        keywords: &["guacamole", "guac"],
        category: Category::Prepared,
        emoji: "🥑",
        shelf_days: 3,
    },
    ShelfLifeEntry {
        name: "Salsa (Fresh)",
        keywords: &["salsa", "pico de gallo", "fresh salsa"],
        category: Category::Prepared,
        emoji: "🫙",
        shelf_days: 5,
    },
    ShelfLifeEntry {
        name: "Tofu",
        keywords: &["tofu", "firm tofu", "silken tofu"],
        category: Category::Prepared,
        emoji: "🧊",
        shelf_days: 5,
    },
    ShelfLifeEntry {
        name: "Pasta (Fresh)",
        keywords: &["fresh pasta", "ravioli", "tortellini"],
        category: Category::Prepared,
        emoji: "🍝",
        shelf_days: 3,
    },
    // ── Condiments (opened) ──
    ShelfLifeEntry {
        name: "Ketchup",
        keywords: &["ketchup"],
        category: Category::Condiment,
        emoji: "🍅",
        shelf_days: 60,
    },
    ShelfLifeEntry {
        name: "Mayonnaise",
        keywords: &["mayo", "mayonnaise"],
        category: Category::Condiment,
        emoji: "🫙",
        shelf_days: 60,
    },
    ShelfLifeEntry {
        name: "Mustard",
        keywords: &["mustard"],
        category: Category::Condiment,
        emoji: "🟡",
        shelf_days: 90,
    },
];

/// Validate the embedded tables.
///
/// Call once at process startup. Every check here is a packaging invariant;
/// the per-line pipeline assumes they hold and never re-checks them.
pub fn validate() -> Result<(), TableError> {
    for entry in CATALOG {
        if entry.shelf_days < 1 {
            return Err(TableError::InvalidShelfDays {
                name: entry.name,
                days: entry.shelf_days,
            });
        }
        if entry.keywords.is_empty() {
            return Err(TableError::NoKeywords { name: entry.name });
        }
        if entry.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(TableError::BlankKeyword { name: entry.name });
        }
    }

    for category in Category::ALL {
        if category.default_shelf_days() < 1 {
            return Err(TableError::InvalidCategoryDefault {
                category,
                days: category.default_shelf_days(),
            });
        }
    }

    for (category, hints) in CATEGORY_HINTS {
        if hints.is_empty() {
            return Err(TableError::NoHints {
                category: *category,
            });
        }
        if hints.iter().any(|h| h.trim().is_empty()) {
            return Err(TableError::BlankHint {
                category: *category,
            });
        }
    }

    Ok(())
}
