//! # Seed Data Generator
//!
//! Populates the database with the demo electronics catalog.
//!
//! ## Usage
//! ```bash
//! # Seed ./voltstore.db (or VOLT_DB_PATH)
//! cargo run -p volt-db --bin seed
//!
//! # Specify database path
//! cargo run -p volt-db --bin seed -- --db ./data/voltstore.db
//! ```
//!
//! ## Seeded Data
//! Four categories and fifteen items:
//! - Televisions (5 items)
//! - Computers (5 items)
//! - Mobile Phones (3 items)
//! - Home Appliances (2 items)
//!
//! Records are written through the repositories, not the form rules: the
//! demo data includes category names with spaces and items with empty
//! descriptions, which the storefront forms would reject.

use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use volt_core::{route_for, Category, CategoryFields, Item, ItemFields, Money};
use volt_db::{Database, DbConfig};

/// `(name, description)`
const CATEGORIES: &[(&str, &str)] = &[
    (
        "Televisions",
        "Display devices that use electronics to produce images and sound.",
    ),
    (
        "Computers",
        "Electronic machines that can store, retrieve, and process data.",
    ),
    (
        "Mobile Phones",
        "Handheld devices that can make and receive calls, send and receive text messages, access the internet, and run a variety of applications.",
    ),
    (
        "Home Appliances",
        "Electronic devices that are used for household tasks.",
    ),
];

/// `(name, description, price in cents, index into CATEGORIES, stock)`
const ITEMS: &[(&str, &str, i64, usize, i64)] = &[
    (
        "Samsung 55 inches Class Crystal UHD TU-8000 Series LED 4K Smart TV",
        "Enjoy stunning visuals with this Samsung 4K TV featuring vivid colors and clear details. Smart TV capabilities allow you to stream your favorite shows and movies.",
        59999,
        0,
        4,
    ),
    (
        "LG 65 inches Class C2 Series OLED Smart TV",
        "Experience exceptional picture quality with this LG OLED TV. Self-lit pixels deliver deep blacks and perfect contrast for an immersive viewing experience.",
        179999,
        0,
        2,
    ),
    (
        "TCL 32 inches Class 3-Series HD Roku Smart TV",
        "This budget-friendly TCL TV offers great value with HD resolution and built-in Roku for easy access to streaming services.",
        19999,
        0,
        1,
    ),
    (
        "Sony 43 inches Class X80K Series LED 4K HDR Smart TV",
        "Immerse yourself in vibrant colors and realistic details with this Sony 4K HDR TV. Smart features allow for easy content access and control.",
        74999,
        0,
        0,
    ),
    (
        "Vizio 70 inches Class V-Series 4K LED Smart TV",
        "Enjoy a larger-than-life viewing experience with this Vizio 70 inches 4K TV. Perfect for family movie nights or watching sporting events.",
        89999,
        0,
        5,
    ),
    (
        "Apple MacBook Air M2 Chip - 13.6 inches Liquid Retina Display, 8GB RAM, 256GB SSD",
        "The new MacBook Air features the powerful M2 chip for smooth performance and long battery life. The sleek design is perfect for on-the-go users.",
        119900,
        1,
        6,
    ),
    (
        "Microsoft Surface Laptop Studio - 14.4 inches Touchscreen, Intel Core i7 Processor, 16GB RAM, 512GB SSD",
        "This versatile laptop can transform from a traditional laptop to a tablet mode for drawing and note-taking. Powerful specs handle demanding tasks.",
        159900,
        1,
        10,
    ),
    (
        "HP Pavilion Desktop - Intel Core i5 Processor, 8GB RAM, 512GB SSD",
        "This affordable desktop computer offers good performance for everyday tasks like browsing the web and working on documents. Great for home or office use.",
        59999,
        1,
        11,
    ),
    (
        "ASUS ROG Strix G15 Advantage Edition Gaming Laptop - AMD Ryzen 9 Processor, 16GB RAM, 1TB SSD, RTX 3060 Graphics",
        "This powerful gaming laptop can handle even the most demanding games with ease. High refresh rate display and dedicated graphics card provide a smooth and immersive gaming experience.",
        189999,
        1,
        8,
    ),
    (
        "Acer Chromebook Spin 713 - 13.5 inches Touchscreen Chromebook, Intel Core i5 Processor, 8GB RAM, 256GB SSD",
        "This Chromebook offers a fast and secure browsing experience with a long battery life. The touchscreen display provides added versatility.",
        64999,
        1,
        2,
    ),
    (
        "Samsung Galaxy S22 Ultra - 6.8 inches Dynamic AMOLED 2X Display, Snapdragon 8 Gen 1 Processor, 128GB Storage",
        "",
        109900,
        2,
        5,
    ),
    (
        "Google Pixel 6 Pro - 6.7 inches LTPO OLED Display, Google Tensor Chip, 128GB Storage",
        "",
        89900,
        2,
        9,
    ),
    (
        "Motorola Moto G Stylus (2022) - 6.8 inches LCD Display, MediaTek Helio G88 Processor, 128GB Storage",
        "",
        29900,
        2,
        7,
    ),
    (
        "Refrigerator (20 cu. ft., Stainless Steel)",
        "This spacious refrigerator features ample storage for all your groceries. The stainless steel finish adds a sleek touch to your kitchen.",
        79999,
        3,
        2,
    ),
    (
        "Robot Vacuum Cleaner",
        "Effortlessly clean your floors with this robot vacuum cleaner. It automatically navigates your home, picking up dirt and debris.",
        24999,
        3,
        1,
    ),
];

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,volt=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut config = DbConfig::from_env()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config.database_path = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Voltstore Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: $VOLT_DB_PATH or ./voltstore.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Voltstore Catalog Seed Data Generator");
    println!("========================================");
    println!("Database: {}", config.database_path.display());
    println!();

    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.categories().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} categories", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Creating categories...");

    let mut categories = Vec::with_capacity(CATEGORIES.len());
    for (name, description) in CATEGORIES {
        let category = Category::new(CategoryFields {
            name: name.to_string(),
            description: description.to_string(),
        });
        db.categories().insert(&category).await?;
        println!("  {:<16} {}", category.name, route_for(&category));
        categories.push(category);
    }

    println!();
    println!("Creating items...");

    for (name, description, price_cents, category_idx, stock) in ITEMS {
        let item = Item::new(ItemFields {
            name: name.to_string(),
            description: description.to_string(),
            price: Money::from_cents(*price_cents),
            number_in_stock: *stock,
            category_id: categories[*category_idx].id.clone(),
        });

        if let Err(e) = db.items().insert(&item).await {
            eprintln!("Failed to insert {}: {}", item.name, e);
            continue;
        }
        println!("  {:>10}  {}", item.price().to_string(), route_for(&item));
    }

    let summary = db.catalog().summary().await?;
    info!(
        categories = summary.categories,
        items = summary.items,
        "Seed complete"
    );

    println!();
    println!(
        "✓ Seeded {} categories and {} items",
        summary.categories, summary.items
    );

    db.close().await;
    Ok(())
}
