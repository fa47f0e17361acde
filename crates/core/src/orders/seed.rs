//! The mock order book.
//!
//! Five hardcoded orders cover every interesting status for the admin
//! back-office. Line prices are purchase-time snapshots and deliberately
//! independent of the live catalog.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use super::{Address, Order, OrderItem, PaymentMethod};
use crate::types::{OrderId, OrderItemId, OrderStatus, PaymentType, ProductId, UserId, VariantId};

fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn item(id: &str, product_id: &str, variant_id: &str, quantity: u32, price: Decimal) -> OrderItem {
    OrderItem {
        id: OrderItemId::new(id),
        product_id: ProductId::new(product_id),
        variant_id: VariantId::new(variant_id),
        quantity,
        price,
    }
}

#[allow(clippy::too_many_arguments)]
fn address(
    first_name: &str,
    last_name: &str,
    address1: &str,
    city: &str,
    state: &str,
    zip_code: &str,
    phone: Option<&str>,
) -> Address {
    Address {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        company: None,
        address1: address1.to_owned(),
        address2: None,
        city: city.to_owned(),
        state: state.to_owned(),
        zip_code: zip_code.to_owned(),
        country: "USA".to_owned(),
        phone: phone.map(str::to_owned),
    }
}

fn card(id: &str, last4: &str, brand: &str, expiry: Option<(u8, u16)>) -> PaymentMethod {
    PaymentMethod {
        id: id.to_owned(),
        kind: PaymentType::CreditCard,
        last4: Some(last4.to_owned()),
        brand: Some(brand.to_owned()),
        expiry_month: expiry.map(|(m, _)| m),
        expiry_year: expiry.map(|(_, y)| y),
    }
}

fn wallet(id: &str, kind: PaymentType) -> PaymentMethod {
    PaymentMethod {
        id: id.to_owned(),
        kind,
        last4: None,
        brand: None,
        expiry_month: None,
        expiry_year: None,
    }
}

/// Build the five mock orders.
#[must_use]
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-001"),
            user_id: UserId::new("u1"),
            items: vec![
                item("oi1", "1", "v1-1", 1, usd(15999)),
                item("oi2", "6", "v6-1", 2, usd(10999)),
            ],
            status: OrderStatus::Delivered,
            total_amount: usd(39997),
            subtotal: usd(37997),
            tax: usd(3040),
            shipping: Decimal::ZERO,
            discount: None,
            shipping_address: address(
                "John",
                "Smith",
                "123 Main St",
                "New York",
                "NY",
                "10001",
                Some("555-0100"),
            ),
            billing_address: address("John", "Smith", "123 Main St", "New York", "NY", "10001", None),
            payment_method: card("pm1", "4242", "Visa", Some((12, 2025))),
            tracking_number: Some("TRK1234567890".to_owned()),
            created_at: at(2024, 1, 15, 10, 30),
            updated_at: at(2024, 1, 20, 14, 20),
        },
        Order {
            id: OrderId::new("ORD-002"),
            user_id: UserId::new("u2"),
            items: vec![item("oi3", "2", "v2-1", 1, usd(19999))],
            status: OrderStatus::Shipped,
            total_amount: usd(21599),
            subtotal: usd(19999),
            tax: usd(1600),
            shipping: Decimal::ZERO,
            discount: None,
            shipping_address: address(
                "Sarah",
                "Johnson",
                "456 Oak Ave",
                "Los Angeles",
                "CA",
                "90001",
                Some("555-0101"),
            ),
            billing_address: address(
                "Sarah",
                "Johnson",
                "456 Oak Ave",
                "Los Angeles",
                "CA",
                "90001",
                None,
            ),
            payment_method: card("pm2", "5555", "Mastercard", None),
            tracking_number: Some("TRK0987654321".to_owned()),
            created_at: at(2024, 1, 18, 15, 45),
            updated_at: at(2024, 1, 20, 9, 30),
        },
        Order {
            id: OrderId::new("ORD-003"),
            user_id: UserId::new("u3"),
            items: vec![
                item("oi4", "5", "v5-1", 1, usd(24999)),
                item("oi5", "3", "v3-1", 1, usd(14999)),
            ],
            status: OrderStatus::Processing,
            total_amount: usd(43198),
            subtotal: usd(39998),
            tax: usd(3200),
            shipping: Decimal::ZERO,
            discount: None,
            shipping_address: address(
                "Mike",
                "Chen",
                "789 Elm St",
                "Chicago",
                "IL",
                "60601",
                Some("555-0102"),
            ),
            billing_address: address("Mike", "Chen", "789 Elm St", "Chicago", "IL", "60601", None),
            payment_method: wallet("pm3", PaymentType::Paypal),
            tracking_number: None,
            created_at: at(2024, 1, 20, 11, 20),
            updated_at: at(2024, 1, 20, 11, 20),
        },
        Order {
            id: OrderId::new("ORD-004"),
            user_id: UserId::new("u4"),
            items: vec![item("oi6", "4", "v4-1", 3, usd(11999))],
            status: OrderStatus::Pending,
            total_amount: usd(38897),
            subtotal: usd(35997),
            tax: usd(2900),
            shipping: Decimal::ZERO,
            discount: None,
            shipping_address: address(
                "Emily",
                "Davis",
                "321 Pine Rd",
                "Houston",
                "TX",
                "77001",
                Some("555-0103"),
            ),
            billing_address: address("Emily", "Davis", "321 Pine Rd", "Houston", "TX", "77001", None),
            payment_method: card("pm4", "1111", "Amex", None),
            tracking_number: None,
            created_at: at(2024, 1, 21, 8, 15),
            updated_at: at(2024, 1, 21, 8, 15),
        },
        Order {
            id: OrderId::new("ORD-005"),
            user_id: UserId::new("u5"),
            items: vec![item("oi7", "7", "v7-1", 1, usd(13999))],
            status: OrderStatus::Delivered,
            total_amount: usd(15119),
            subtotal: usd(13999),
            tax: usd(1120),
            shipping: Decimal::ZERO,
            discount: None,
            shipping_address: address(
                "Alex",
                "Martinez",
                "654 Maple Dr",
                "Phoenix",
                "AZ",
                "85001",
                Some("555-0104"),
            ),
            billing_address: address(
                "Alex",
                "Martinez",
                "654 Maple Dr",
                "Phoenix",
                "AZ",
                "85001",
                None,
            ),
            payment_method: wallet("pm5", PaymentType::ApplePay),
            tracking_number: Some("TRK1122334455".to_owned()),
            created_at: at(2024, 1, 12, 14, 30),
            updated_at: at(2024, 1, 17, 10, 0),
        },
    ]
}
