//! Demo data set.
//!
//! Seeds the store with the sample customers, orders, and one open ticket
//! used by the demo deployment and the end-to-end tests. Ticket seeding
//! goes through the store's normal ID allocation so the sequence continues
//! correctly after the seeded tickets.

use chrono::NaiveDate;
use coralbay_core::{CustomerId, Email, LoyaltyTier, OrderId, OrderStatus, Priority, TicketStatus};
use rust_decimal::Decimal;

use crate::models::{Customer, LineItem, Order, Ticket};

use super::EntityStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn email(s: &str) -> Email {
    Email::parse(s).expect("valid seed email")
}

/// Install the demo data set.
pub fn seed_demo_data(store: &EntityStore) {
    store.insert_customer(Customer {
        id: CustomerId::new("CUST-123"),
        name: "John Doe".into(),
        email: email("john.doe@email.com"),
        phone: "+1-555-0123".into(),
        registration_date: date(2024, 1, 15),
        loyalty_tier: LoyaltyTier::Gold,
        total_orders: 15,
        total_spent: Decimal::new(599_985, 2),
    });
    store.insert_customer(Customer {
        id: CustomerId::new("CUST-456"),
        name: "Jane Smith".into(),
        email: email("jane.smith@email.com"),
        phone: "+1-555-0456".into(),
        registration_date: date(2024, 3, 22),
        loyalty_tier: LoyaltyTier::Silver,
        total_orders: 8,
        total_spent: Decimal::new(279_992, 2),
    });

    store.insert_order(Order {
        id: OrderId::new("ORD-001"),
        customer_id: CustomerId::new("CUST-123"),
        customer_email: email("john.doe@email.com"),
        customer_name: "John Doe".into(),
        items: vec![
            LineItem {
                product: "Laptop".into(),
                quantity: 1,
                unit_price: Decimal::new(99_999, 2),
            },
            LineItem {
                product: "Mouse".into(),
                quantity: 1,
                unit_price: Decimal::new(2_999, 2),
            },
        ],
        total: Decimal::new(102_998, 2),
        status: OrderStatus::Shipped,
        order_date: date(2025, 6, 20),
        tracking_number: Some("TRK123456789".into()),
        estimated_delivery: date(2025, 6, 28),
        shipping_address: "123 Main St, Anytown, ST 12345".into(),
        cancellation_reason: None,
        cancellation_date: None,
        refund_amount: None,
        refund_reason: None,
        refund_date: None,
        address_updated_date: None,
    });
    store.insert_order(Order {
        id: OrderId::new("ORD-002"),
        customer_id: CustomerId::new("CUST-456"),
        customer_email: email("jane.smith@email.com"),
        customer_name: "Jane Smith".into(),
        items: vec![LineItem {
            product: "Smartphone".into(),
            quantity: 1,
            unit_price: Decimal::new(69_999, 2),
        }],
        total: Decimal::new(69_999, 2),
        status: OrderStatus::Processing,
        order_date: date(2025, 6, 25),
        tracking_number: None,
        estimated_delivery: date(2025, 6, 30),
        shipping_address: "456 Oak Ave, Another City, ST 67890".into(),
        cancellation_reason: None,
        cancellation_date: None,
        refund_amount: None,
        refund_reason: None,
        refund_date: None,
        address_updated_date: None,
    });

    let created = date(2025, 6, 26);
    store.insert_ticket(Ticket {
        id: store.next_ticket_id(),
        customer_id: CustomerId::new("CUST-123"),
        customer_email: email("john.doe@email.com"),
        customer_name: "John Doe".into(),
        subject: "Damaged item received".into(),
        description: "The laptop I received has a crack on the screen".into(),
        status: TicketStatus::Open,
        priority: Priority::High,
        created_date: created,
        last_updated: created,
        agent_assigned: None,
        order_id: Some(OrderId::new("ORD-001")),
    });
}
