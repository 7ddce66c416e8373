use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use catalog_infra::InMemoryItemRepository;
use catalog_items::{
    build_criteria, Category, Item, ItemAttribute, ItemRepository, NewItem, NewSeller, Price,
    SearchRequest, Seller,
};
use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;

const CATEGORIES: [&str; 4] = ["MLA1055", "MLA1648", "MLA3697", "MLA1000"];
const BRANDS: [&str; 5] = ["Samsung", "Apple", "Motorola", "Lenovo", "Sony"];

/// Deterministic synthetic catalog; every tenth item is paused.
fn catalog(size: usize) -> Vec<Item> {
    let epoch = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();

    (0..size)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            let brand = BRANDS[i % BRANDS.len()];
            let item = Item::new(NewItem {
                id: format!("MLA{i:010}"),
                title: format!("{brand} producto {i}"),
                price: Price::of_minor_units(((i * 7_919) % 2_000_000) as i64 + 1_000, "ARS", 2)
                    .unwrap(),
                condition: if i % 3 == 0 { "used" } else { "new" }.to_string(),
                available_quantity: Some(10),
                sold_quantity: Some(((i * 31) % 1_000) as u32),
                permalink: None,
                status: None,
                description: None,
                listing_type_id: None,
                buying_mode: None,
                free_shipping: i % 2 == 0,
                local_pick_up: false,
                created_date: Some(epoch + Duration::hours(i as i64)),
                last_updated: None,
                category: Category::new(category, category, None).unwrap(),
                seller: Seller::new(NewSeller {
                    id: (i % 50) as u64 + 1,
                    nickname: format!("SELLER_{}", i % 50),
                    reputation_level: Some(if i % 4 == 0 { "5_green" } else { "4_light_green" }.into()),
                    ..NewSeller::default()
                })
                .unwrap(),
                attributes: vec![ItemAttribute::new("BRAND", "Marca", brand, None, "string").unwrap()],
                pictures: vec![],
                shipping_methods: vec![],
                payment_method: None,
                warranty: None,
            })
            .unwrap();

            if i % 10 == 9 {
                item.with_status("paused").unwrap()
            } else {
                item
            }
        })
        .collect()
}

fn bench_search_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_execution");

    for size in [100usize, 1_000, 10_000].iter() {
        let repository = InMemoryItemRepository::new(catalog(*size));
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("relevance", size), size, |b, _| {
            let criteria = build_criteria(SearchRequest::default());
            b.iter(|| black_box(repository.search(black_box(&criteria))));
        });

        group.bench_with_input(BenchmarkId::new("filtered_price_asc", size), size, |b, _| {
            let criteria = build_criteria(SearchRequest {
                query: Some("samsung".into()),
                category: Some("MLA1055".into()),
                min_price: Some(Decimal::from(100)),
                max_price: Some(Decimal::from(15_000)),
                free_shipping: Some(true),
                sort: Some("price_asc".into()),
                limit: Some(20),
                ..SearchRequest::default()
            });
            b.iter(|| black_box(repository.search(black_box(&criteria))));
        });
    }

    group.finish();
}

fn bench_listing_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing_queries");
    let repository = InMemoryItemRepository::new(catalog(10_000));

    group.bench_function("best_sellers", |b| {
        b.iter(|| black_box(repository.find_best_sellers(black_box(20))));
    });

    group.bench_function("trending_by_category", |b| {
        b.iter(|| black_box(repository.find_trending_by_category(black_box("MLA1648"), 10)));
    });

    group.bench_function("distinct_brands", |b| {
        b.iter(|| black_box(repository.distinct_attribute_values(black_box("BRAND"), None)));
    });

    group.finish();
}

criterion_group!(benches, bench_search_execution, bench_listing_queries);
criterion_main!(benches);
