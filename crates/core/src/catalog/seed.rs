//! The mock product catalog.
//!
//! Fifteen hardcoded products stand in for a real datastore. Stores seeded
//! from here get their own copy; edits never outlive the process.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use super::{ColorOption, Product, Review, SizeOption};
use crate::types::{ProductCategory, ProductId, ReviewId, UserId};

fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn sizes(entries: &[(&str, bool)]) -> Vec<SizeOption> {
    entries
        .iter()
        .map(|&(value, available)| SizeOption::new(value, available))
        .collect()
}

fn colors(entries: &[(&str, &str, &str)]) -> Vec<ColorOption> {
    entries
        .iter()
        .map(|&(name, hex, image)| ColorOption {
            name: name.to_owned(),
            hex: hex.to_owned(),
            image: Some(image.to_owned()),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    product_id: &str,
    user_id: &str,
    user_name: &str,
    rating: u8,
    title: &str,
    comment: &str,
    created: DateTime<Utc>,
    helpful: u32,
) -> Review {
    Review {
        id: ReviewId::new(id),
        product_id: ProductId::new(product_id),
        user_id: UserId::new(user_id),
        user_name: user_name.to_owned(),
        rating,
        title: title.to_owned(),
        comment: comment.to_owned(),
        verified: true,
        created_at: created,
        helpful,
    }
}

const IMG_A: &str = "https://images.unsplash.com/photo-1542291026-7eec264c27ff";
const IMG_B: &str = "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa";
const IMG_C: &str = "https://images.unsplash.com/photo-1608231387042-66d1773070a5";
const IMG_D: &str = "https://images.unsplash.com/photo-1549298916-b41d501d3772";

fn large(url: &str) -> String {
    format!("{url}?w=800")
}

fn small(url: &str) -> &'static str {
    // Color swatches use the 400px rendition of the same four photos.
    match url {
        _ if url == IMG_A => "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400",
        _ if url == IMG_B => "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa?w=400",
        _ if url == IMG_C => "https://images.unsplash.com/photo-1608231387042-66d1773070a5?w=400",
        _ => "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=400",
    }
}

/// Build the full 15-product mock catalog.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Air Max 270 React".to_owned(),
            description: "The Air Max 270 React brings the comfort of React foam to the iconic \
                          Air Max 270 silhouette. Experience all-day comfort with a full-length \
                          React foam midsole and large-volume Max Air unit."
                .to_owned(),
            price: usd(15999),
            original_price: Some(usd(17999)),
            images: vec![large(IMG_A), large(IMG_B), large(IMG_C)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-b3b84a83a9c5d3f6a8c7c8d9e0f1g2h3".to_owned(),
            ),
            sizes: sizes(&[
                ("7", true),
                ("8", true),
                ("9", true),
                ("10", true),
                ("11", false),
                ("12", true),
            ]),
            colors: colors(&[
                ("Black/White", "#000000", small(IMG_A)),
                ("University Blue", "#0033A0", small(IMG_B)),
                ("Triple White", "#FFFFFF", small(IMG_C)),
            ]),
            stock: 150,
            category: ProductCategory::Running,
            collection: Some("Air Max".to_owned()),
            rating: 4.5,
            reviews: vec![
                review(
                    "r1",
                    "1",
                    "u1",
                    "Mike Johnson",
                    5,
                    "Amazing comfort!",
                    "These shoes are incredibly comfortable for daily wear. The React foam \
                     really makes a difference.",
                    day(2024, 1, 15),
                    12,
                ),
                review(
                    "r2",
                    "1",
                    "u2",
                    "Sarah Chen",
                    4,
                    "Great shoes but runs small",
                    "Love the style and comfort, but I had to size up. Otherwise excellent \
                     quality.",
                    day(2024, 1, 20),
                    8,
                ),
            ],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 20),
        },
        Product {
            id: ProductId::new("2"),
            name: "Air Jordan 1 Retro High".to_owned(),
            description: "The Air Jordan 1 Retro High brings you the classic basketball shoe \
                          that started it all. Premium leather upper with iconic colorways and \
                          the legendary Jordan branding."
                .to_owned(),
            price: usd(19999),
            original_price: None,
            images: vec![large(IMG_D), large(IMG_A), large(IMG_C)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-a1b2c3d4e5f6g7h8i9j0k1l2m3n4o5".to_owned(),
            ),
            sizes: sizes(&[
                ("7", true),
                ("8", true),
                ("9", true),
                ("10", true),
                ("11", true),
                ("12", false),
            ]),
            colors: colors(&[
                ("Bred", "#000000", small(IMG_A)),
                ("Chicago", "#DC143C", small(IMG_D)),
                ("Royal Blue", "#0033A0", small(IMG_C)),
            ]),
            stock: 89,
            category: ProductCategory::Basketball,
            collection: Some("Air Jordan".to_owned()),
            rating: 4.8,
            reviews: vec![review(
                "r3",
                "2",
                "u3",
                "BasketballFan92",
                5,
                "Iconic!",
                "These are classics for a reason. Great quality and style that never goes out \
                 of fashion.",
                day(2024, 1, 10),
                25,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 18),
        },
        Product {
            id: ProductId::new("3"),
            name: "React Infinity Run Flyknit".to_owned(),
            description: "React Infinity Run Flyknit features 270 degrees of foam support \
                          underfoot to help keep you comfortable as you clock kays. Designed \
                          for daily training."
                .to_owned(),
            price: usd(14999),
            original_price: Some(usd(15999)),
            images: vec![large(IMG_C), large(IMG_A), large(IMG_B)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-f6g7h8i9j0k1l2m3n4o5p6q7r8s9t0u1v2"
                    .to_owned(),
            ),
            sizes: sizes(&[
                ("6", true),
                ("7", true),
                ("8", true),
                ("9", false),
                ("10", true),
                ("11", true),
            ]),
            colors: colors(&[
                ("Black/White", "#000000", small(IMG_C)),
                ("Ocean", "#006994", small(IMG_A)),
                ("Volt", "#FFFF00", small(IMG_B)),
            ]),
            stock: 76,
            category: ProductCategory::Running,
            collection: Some("React".to_owned()),
            rating: 4.3,
            reviews: vec![review(
                "r4",
                "3",
                "u4",
                "Runner4Life",
                4,
                "Great for marathon training",
                "Perfect for long runs. The React foam provides excellent cushioning.",
                day(2024, 1, 12),
                15,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 16),
        },
        Product {
            id: ProductId::new("4"),
            name: "Dunk Low Retro".to_owned(),
            description: "The Dunk Low Retro brings back the old-school college basketball look \
                          with crisp leather overlays and retro colorways. Perfect for casual \
                          wear."
                .to_owned(),
            price: usd(11999),
            original_price: None,
            images: vec![large(IMG_A), large(IMG_C), large(IMG_D)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-u2v3w4x5y6z7a8b9c0d1e2f3g4h5i6j7k8l9"
                    .to_owned(),
            ),
            sizes: sizes(&[
                ("5", true),
                ("6", true),
                ("7", true),
                ("8", true),
                ("9", true),
                ("10", true),
            ]),
            colors: colors(&[
                ("Panda", "#000000", small(IMG_A)),
                ("Syracuse", "#FF6600", small(IMG_C)),
                ("Kentucky", "#0033A0", small(IMG_D)),
            ]),
            stock: 134,
            category: ProductCategory::Casual,
            collection: Some("Dunk".to_owned()),
            rating: 4.6,
            reviews: vec![review(
                "r5",
                "4",
                "u5",
                "Sneakerhead23",
                5,
                "Perfect everyday shoe",
                "Love the retro style and comfort. Great value for the price.",
                day(2024, 1, 14),
                18,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 19),
        },
        Product {
            id: ProductId::new("5"),
            name: "LeBron XX".to_owned(),
            description: "The LeBron XX basketball shoes are built for king-sized performance. \
                          Featuring Max Air cushioning and responsive foam for explosive plays \
                          on the court."
                .to_owned(),
            price: usd(24999),
            original_price: None,
            images: vec![large(IMG_B), large(IMG_C), large(IMG_A)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-m0n1o2p3q4r5s6t7u8v9w0x1y2z3a4b5c6d7"
                    .to_owned(),
            ),
            sizes: sizes(&[
                ("7", true),
                ("8", true),
                ("9", true),
                ("10", false),
                ("11", true),
                ("12", true),
            ]),
            colors: colors(&[
                ("Purple", "#6B46C1", small(IMG_B)),
                ("Black/Gold", "#000000", small(IMG_C)),
                ("Lakers Yellow", "#FFD700", small(IMG_A)),
            ]),
            stock: 45,
            category: ProductCategory::Basketball,
            collection: Some("LeBron".to_owned()),
            rating: 4.7,
            reviews: vec![review(
                "r6",
                "5",
                "u6",
                "HooperPro",
                5,
                "Elite performance",
                "Best basketball shoes I've played in. Great ankle support and cushioning.",
                day(2024, 1, 11),
                22,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 17),
        },
        Product {
            id: ProductId::new("6"),
            name: "Air Force 1 '07".to_owned(),
            description: "The Air Force 1 '07 brings back the classic basketball shoe with \
                          premium leather and the iconic Air-Sole unit. A timeless streetwear \
                          staple."
                .to_owned(),
            price: usd(10999),
            original_price: None,
            images: vec![large(IMG_A), large(IMG_D), large(IMG_C)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-e8f9g0h1i2j3k4l5m6n7o8p9q0r1s2t3u4"
                    .to_owned(),
            ),
            sizes: sizes(&[
                ("6", true),
                ("7", true),
                ("8", true),
                ("9", true),
                ("10", true),
                ("11", true),
                ("12", true),
            ]),
            colors: colors(&[
                ("Triple White", "#FFFFFF", small(IMG_A)),
                ("Triple Black", "#000000", small(IMG_D)),
                ("Black/White", "#333333", small(IMG_C)),
            ]),
            stock: 198,
            category: ProductCategory::Casual,
            collection: Some("Air Force".to_owned()),
            rating: 4.4,
            reviews: vec![review(
                "r7",
                "6",
                "u7",
                "ClassicSneakerFan",
                4,
                "Timeless style",
                "Can't go wrong with AF1s. Comfortable and stylish for everyday wear.",
                day(2024, 1, 13),
                31,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 21),
        },
        Product {
            id: ProductId::new("7"),
            name: "Pegasus 40".to_owned(),
            description: "Pegasus 40 road running shoes feature a breathable mesh upper and \
                          responsive cushioning. Your trusted partner for daily runs."
                .to_owned(),
            price: usd(13999),
            original_price: Some(usd(14999)),
            images: vec![large(IMG_C), large(IMG_A), large(IMG_B)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-v5w6x7y8z9a0b1c2d3e4f5g6h7i8j9k0l1"
                    .to_owned(),
            ),
            sizes: sizes(&[
                ("6", true),
                ("7", true),
                ("8", false),
                ("9", true),
                ("10", true),
                ("11", true),
            ]),
            colors: colors(&[
                ("Blue/White", "#0033A0", small(IMG_C)),
                ("Black/Volt", "#000000", small(IMG_A)),
                ("Grey/Orange", "#808080", small(IMG_B)),
            ]),
            stock: 112,
            category: ProductCategory::Running,
            collection: Some("Pegasus".to_owned()),
            rating: 4.5,
            reviews: vec![review(
                "r8",
                "7",
                "u8",
                "DailyRunner",
                5,
                "Reliable daily trainer",
                "Perfect for my daily 5k runs. Comfortable and durable.",
                day(2024, 1, 9),
                14,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 15),
        },
        Product {
            id: ProductId::new("8"),
            name: "SB Dunk Low Pro".to_owned(),
            description: "SB Dunk Low Pro combines classic Dunk style with skate-specific \
                          performance. Padded collar and Zoom Air unit for boardfeel and impact \
                          protection."
                .to_owned(),
            price: usd(11999),
            original_price: None,
            images: vec![large(IMG_D), large(IMG_C), large(IMG_A)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-m2n3o4p5q6r7s8t9u0v1w2x3y4z5a6b7c8d9"
                    .to_owned(),
            ),
            sizes: sizes(&[
                ("7", true),
                ("8", true),
                ("9", true),
                ("10", true),
                ("11", false),
                ("12", true),
            ]),
            colors: colors(&[
                ("Pine Green", "#228B22", small(IMG_D)),
                ("Blue/White", "#0033A0", small(IMG_C)),
                ("Purple/Black", "#800080", small(IMG_A)),
            ]),
            stock: 67,
            category: ProductCategory::Skateboarding,
            collection: Some("SB".to_owned()),
            rating: 4.2,
            reviews: vec![review(
                "r9",
                "8",
                "u9",
                "SkateLife",
                4,
                "Great for skating",
                "Perfect grip and boardfeel. Love the style too.",
                day(2024, 1, 8),
                11,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 14),
        },
        Product {
            id: ProductId::new("9"),
            name: "Blazer Mid '77".to_owned(),
            description: "Blazer Mid '77 brings vintage basketball style to modern streetwear. \
                          Classic leather upper with comfortable padding and timeless design."
                .to_owned(),
            price: usd(9999),
            original_price: None,
            images: vec![large(IMG_C), large(IMG_A), large(IMG_B)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-e0f1g2h3i4j5k6l7m8n9o0p1q2r3s4t5u6"
                    .to_owned(),
            ),
            sizes: sizes(&[
                ("6", true),
                ("7", false),
                ("8", true),
                ("9", true),
                ("10", true),
                ("11", true),
            ]),
            colors: colors(&[
                ("Vintage Green", "#228B22", small(IMG_C)),
                ("Vintage Red", "#DC143C", small(IMG_A)),
                ("White/Black", "#FFFFFF", small(IMG_B)),
            ]),
            stock: 93,
            category: ProductCategory::Casual,
            collection: Some("Blazer".to_owned()),
            rating: 4.3,
            reviews: vec![review(
                "r10",
                "9",
                "u10",
                "VintageVibes",
                4,
                "Love the retro look",
                "Great vintage style. Comfortable for all-day wear.",
                day(2024, 1, 7),
                9,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 13),
        },
        Product {
            id: ProductId::new("10"),
            name: "Air Zoom Pegasus 39".to_owned(),
            description: "Air Zoom Pegasus 39 road running shoes feature responsive cushioning \
                          and a lightweight mesh upper. Built for everyday training runs."
                .to_owned(),
            price: usd(14999),
            original_price: None,
            images: vec![large(IMG_A), large(IMG_C), large(IMG_B)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-v7w8x9y0z1a2b3c4d5e6f7g8h9i0j1k2l3"
                    .to_owned(),
            ),
            sizes: sizes(&[
                ("5", true),
                ("6", true),
                ("7", true),
                ("8", true),
                ("9", true),
                ("10", false),
            ]),
            colors: colors(&[
                ("Black/White", "#000000", small(IMG_A)),
                ("Blue/White", "#0033A0", small(IMG_C)),
                ("Grey/Volt", "#808080", small(IMG_B)),
            ]),
            stock: 87,
            category: ProductCategory::Running,
            collection: Some("Pegasus".to_owned()),
            rating: 4.6,
            reviews: vec![review(
                "r11",
                "10",
                "u11",
                "MarathonRunner",
                5,
                "Excellent for long runs",
                "Great cushioning and durability. My go-to shoe for marathons.",
                day(2024, 1, 6),
                20,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 12),
        },
        Product {
            id: ProductId::new("11"),
            name: "GT Run".to_owned(),
            description: "GT Run basketball shoes are designed for explosive court performance. \
                          Featuring advanced cushioning and lockdown support for quick cuts and \
                          jumps."
                .to_owned(),
            price: usd(17999),
            original_price: None,
            images: vec![large(IMG_B), large(IMG_A), large(IMG_C)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-m4n5o6p7q8r9s0t1u2v3w4x5y6z7a8b9c0d"
                    .to_owned(),
            ),
            sizes: sizes(&[
                ("7", true),
                ("8", true),
                ("9", true),
                ("10", true),
                ("11", true),
                ("12", true),
            ]),
            colors: colors(&[
                ("Blue/White", "#0033A0", small(IMG_B)),
                ("Red/Black", "#DC143C", small(IMG_A)),
                ("Green/White", "#228B22", small(IMG_C)),
            ]),
            stock: 56,
            category: ProductCategory::Basketball,
            collection: Some("GT".to_owned()),
            rating: 4.4,
            reviews: vec![review(
                "r12",
                "11",
                "u12",
                "CourtWarrior",
                4,
                "Great for indoor courts",
                "Excellent grip and support. Perfect for my weekly games.",
                day(2024, 1, 5),
                16,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 11),
        },
        Product {
            id: ProductId::new("12"),
            name: "Air Max 90".to_owned(),
            description: "Air Max 90 brings retro running style to modern comfort. Features the \
                          iconic Max Air unit and classic design elements that made it \
                          legendary."
                .to_owned(),
            price: usd(12999),
            original_price: Some(usd(13999)),
            images: vec![large(IMG_D), large(IMG_C), large(IMG_A)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-e1f2g3h4i5j6k7l8m9n0o1p2q3r4s5t6u7"
                    .to_owned(),
            ),
            sizes: sizes(&[
                ("6", true),
                ("7", true),
                ("8", true),
                ("9", false),
                ("10", true),
                ("11", true),
                ("12", true),
            ]),
            colors: colors(&[
                ("Triple White", "#FFFFFF", small(IMG_D)),
                ("Triple Black", "#000000", small(IMG_C)),
                ("Infrared", "#FF0000", small(IMG_A)),
            ]),
            stock: 125,
            category: ProductCategory::Casual,
            collection: Some("Air Max".to_owned()),
            rating: 4.7,
            reviews: vec![review(
                "r13",
                "12",
                "u13",
                "RetroLover",
                5,
                "Classic comfort",
                "Still one of the most comfortable shoes after all these years.",
                day(2024, 1, 4),
                28,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 10),
        },
        Product {
            id: ProductId::new("13"),
            name: "Mercurial Vapor 15".to_owned(),
            description: "Mercurial Vapor 15 football shoes feature lightweight materials and \
                          excellent traction for explosive speed on firm ground surfaces."
                .to_owned(),
            price: usd(19999),
            original_price: None,
            images: vec![large(IMG_C), large(IMG_A), large(IMG_B)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-v8w9x0y1z2a3b4c5d6e7f8g9h0i1j2k3l4m5"
                    .to_owned(),
            ),
            sizes: sizes(&[
                ("6", true),
                ("7", true),
                ("8", true),
                ("9", true),
                ("10", true),
                ("11", false),
                ("12", true),
            ]),
            colors: colors(&[
                ("Volt/Black", "#FFFF00", small(IMG_C)),
                ("Royal Blue", "#0033A0", small(IMG_A)),
                ("Crimson", "#DC143C", small(IMG_B)),
            ]),
            stock: 73,
            category: ProductCategory::Football,
            collection: Some("Mercurial".to_owned()),
            rating: 4.5,
            reviews: vec![review(
                "r14",
                "13",
                "u14",
                "SoccerPro",
                5,
                "Lightning fast",
                "Amazing speed and traction. Perfect for my game.",
                day(2024, 1, 3),
                19,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 9),
        },
        Product {
            id: ProductId::new("14"),
            name: "Court Vision Low".to_owned(),
            description: "Court Vision Low brings classic basketball heritage to modern street \
                          style. Leather and synthetic upper with traditional basketball shoe \
                          details."
                .to_owned(),
            price: usd(8999),
            original_price: Some(usd(9999)),
            images: vec![large(IMG_C), large(IMG_A), large(IMG_B)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-n6o7p8q9r0s1t2u3v4w5x6y7z8a9b0c1d2"
                    .to_owned(),
            ),
            sizes: sizes(&[
                ("5", true),
                ("6", true),
                ("7", true),
                ("8", true),
                ("9", true),
                ("10", true),
                ("11", true),
                ("12", false),
            ]),
            colors: colors(&[
                ("White/Black", "#FFFFFF", small(IMG_C)),
                ("Black/White", "#000000", small(IMG_A)),
                ("Navy/White", "#001F3F", small(IMG_B)),
            ]),
            stock: 156,
            category: ProductCategory::Casual,
            collection: Some("Court".to_owned()),
            rating: 4.1,
            reviews: vec![review(
                "r15",
                "14",
                "u15",
                "StreetStyle",
                4,
                "Great value",
                "Love the retro basketball style at an affordable price.",
                day(2024, 1, 2),
                13,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 8),
        },
        Product {
            id: ProductId::new("15"),
            name: "Air Zoom Winflo 9".to_owned(),
            description: "Air Zoom Winflo 9 road running shoes offer responsive cushioning and \
                          breathable mesh upper. Perfect for daily training and tempo runs."
                .to_owned(),
            price: usd(12999),
            original_price: None,
            images: vec![large(IMG_A), large(IMG_C), large(IMG_B)],
            model_url: Some(
                "https://my.spline.design/uncopyedeign-e3f4g5h6i7j8k9l0m1n2o3p4q5r6s7t8u9v"
                    .to_owned(),
            ),
            sizes: sizes(&[
                ("6", true),
                ("7", false),
                ("8", true),
                ("9", true),
                ("10", true),
                ("11", true),
            ]),
            colors: colors(&[
                ("Grey/White", "#808080", small(IMG_A)),
                ("Black/White", "#000000", small(IMG_C)),
                ("Blue/White", "#0033A0", small(IMG_B)),
            ]),
            stock: 98,
            category: ProductCategory::Running,
            collection: Some("Winflo".to_owned()),
            rating: 4.3,
            reviews: vec![review(
                "r16",
                "15",
                "u16",
                "TempoRunner",
                4,
                "Great for tempo runs",
                "Good balance of comfort and responsiveness for faster runs.",
                day(2024, 1, 1),
                10,
            )],
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 1, 7),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_and_unique() {
        let products = products();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<String> = (1..=15).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_sale_prices_exceed_current_prices() {
        for product in products() {
            if let Some(original) = product.original_price {
                assert!(
                    original > product.price,
                    "{} sale price invariant violated",
                    product.name
                );
            }
        }
    }

    #[test]
    fn test_reviews_reference_their_product() {
        for product in products() {
            for review in &product.reviews {
                assert_eq!(review.product_id, product.id);
                assert!((1..=5).contains(&review.rating));
            }
        }
    }

    #[test]
    fn test_every_product_is_complete() {
        for product in products() {
            assert!(!product.images.is_empty());
            assert!(!product.sizes.is_empty());
            assert!(!product.colors.is_empty());
            assert!(product.collection.is_some());
            assert!((0.0..=5.0).contains(&product.rating));
        }
    }
}
