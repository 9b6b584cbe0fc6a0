//! fixed data served by the kiosk endpoints until a real store backs them

use crate::server::model::item::MenuItem;
use crate::server::model::order::{KitchenOrder, OrderLine, OrderSummary};
use crate::server::model::table::Table;

pub(crate) fn menu() -> Vec<MenuItem> {
    [(1, "Pizza"), (2, "Burger"), (3, "Kartof")]
        .into_iter()
        .map(|(id, name)| MenuItem {
            id,
            name: name.to_string(),
            price: 1.0,
        })
        .collect()
}

pub(crate) fn tables() -> Vec<Table> {
    vec![
        Table {
            id: 1,
            name: "Masa 1".to_string(),
            status: "free".to_string(),
        },
        Table {
            id: 2,
            name: "Masa 2".to_string(),
            status: "busy".to_string(),
        },
    ]
}

pub(crate) fn kitchen_orders() -> Vec<KitchenOrder> {
    vec![KitchenOrder {
        order_id: 1,
        items: vec![OrderLine { item_id: 1, qty: 2 }],
    }]
}

pub(crate) fn order_summaries() -> Vec<OrderSummary> {
    vec![OrderSummary {
        order_id: 1,
        amount: 20.0,
    }]
}
