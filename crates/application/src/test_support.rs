//! Catalog fixtures shared by the service tests.

use chrono::{TimeZone, Utc};
use core::str::FromStr;
use rust_decimal::Decimal;

use catalog_infra::InMemoryItemRepository;
use catalog_items::{
    Category, Item, ItemAttribute, NewItem, NewPicture, NewSeller, Picture, Price, Seller,
};

pub fn seller(id: u64, reputation: &str, power: Option<&str>) -> Seller {
    Seller::new(NewSeller {
        id,
        nickname: format!("SELLER_{id}"),
        reputation_level: Some(reputation.to_string()),
        power_seller_status: power.map(str::to_string),
        transactions_completed: Some(100),
        transactions_canceled: Some(4),
        rating_positive: Some(Decimal::from_str("0.92").unwrap()),
        rating_negative: Some(Decimal::from_str("0.03").unwrap()),
        rating_neutral: Some(Decimal::from_str("0.05").unwrap()),
        ..Default::default()
    })
    .unwrap()
}

pub fn attribute(id: &str, value: &str, unit: Option<&str>) -> ItemAttribute {
    ItemAttribute::new(id, id, value, unit.map(str::to_string), "string").unwrap()
}

pub fn picture(id: &str) -> Picture {
    Picture::new(NewPicture {
        picture_id: id.to_string(),
        url: format!("http://img/{id}.jpg"),
        secure_url: format!("https://img/{id}.jpg"),
        ..Default::default()
    })
    .unwrap()
}

pub fn new_item(id: &str, title: &str, category_id: &str, cents: i64, sold: u32) -> NewItem {
    NewItem {
        id: id.to_string(),
        title: title.to_string(),
        price: Price::of_minor_units(cents, "ARS", 2).unwrap(),
        condition: "new".to_string(),
        available_quantity: Some(5),
        sold_quantity: Some(sold),
        permalink: None,
        status: None,
        description: None,
        listing_type_id: None,
        buying_mode: None,
        free_shipping: false,
        local_pick_up: false,
        created_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        last_updated: None,
        category: Category::new(category_id, &format!("Category {category_id}"), None).unwrap(),
        seller: seller(1001, "5_green", None),
        attributes: Vec::new(),
        pictures: Vec::new(),
        shipping_methods: Vec::new(),
        payment_method: None,
        warranty: None,
    }
}

pub fn item_in(id: &str, title: &str, category_id: &str, cents: i64, sold: u32) -> Item {
    Item::new(new_item(id, title, category_id, cents, sold)).unwrap()
}

/// Four active listings plus a paused one:
///
/// | id | title | category | price | sold | seller |
/// |---|---|---|---|---|---|
/// | MLA1 | Samsung Galaxy S23 | MLA1055 | 999.00 | 150 | 1001 |
/// | MLA2 | Samsung Galaxy A54 | MLA1055 | 500.00 | 60 | 1002 |
/// | MLA3 | iPhone 15 | MLA1055 | 1500.00 | 5 | 1001 |
/// | MLA4 | Notebook Lenovo | MLA1648 | 800.00 | 20 | 1003 |
/// | MLA5 (paused) | Samsung Galaxy S22 | MLA1055 | 700.00 | 300 | 1001 |
pub fn catalog_items() -> Vec<Item> {
    vec![
        Item::new(NewItem {
            attributes: vec![
                attribute("BRAND", "Samsung", None),
                attribute("MODEL", "Galaxy S23", None),
                attribute("STORAGE", "128", Some("GB")),
            ],
            pictures: vec![picture("S23")],
            ..new_item("MLA1", "Samsung Galaxy S23", "MLA1055", 99_900, 150)
        })
        .unwrap(),
        Item::new(NewItem {
            attributes: vec![
                attribute("BRAND", "Samsung", None),
                attribute("STORAGE", "256", Some("GB")),
            ],
            seller: seller(1002, "4_light_green", None),
            ..new_item("MLA2", "Samsung Galaxy A54", "MLA1055", 50_000, 60)
        })
        .unwrap(),
        Item::new(NewItem {
            attributes: vec![attribute("BRAND", "Apple", None), attribute("COLOR", "Negro", None)],
            ..new_item("MLA3", "iPhone 15", "MLA1055", 150_000, 5)
        })
        .unwrap(),
        Item::new(NewItem {
            attributes: vec![attribute("BRAND", "Lenovo", None)],
            seller: seller(1003, "3_yellow", Some("platinum")),
            ..new_item("MLA4", "Notebook Lenovo", "MLA1648", 80_000, 20)
        })
        .unwrap(),
        Item::new(NewItem {
            attributes: vec![attribute("BRAND", "Motorola", None)],
            status: Some("paused".to_string()),
            ..new_item("MLA5", "Samsung Galaxy S22", "MLA1055", 70_000, 300)
        })
        .unwrap(),
    ]
}

pub fn catalog() -> InMemoryItemRepository {
    InMemoryItemRepository::new(catalog_items())
}
