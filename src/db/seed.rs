//! Sample data loaded at startup.

use chrono::Duration;

use super::Tables;
use crate::models::{Customer, Driver, Order, OrderTopping, Timestamp, Topping};

/// Build the sample tables. Order times are placed relative to `now`.
pub fn sample_tables(now: Timestamp) -> Tables {
    let drivers = [(1, "Speed Racer"), (2, "Captain Falcon"), (3, "Vin Diesel")]
        .into_iter()
        .map(|(id, name)| Driver {
            id,
            name: name.to_string(),
        })
        .collect();

    let customers = [
        (1, "Mario Mario", "Mushroom Kingdom"),
        (2, "Luigi Mario", "Haunted Mansion"),
        (3, "Princess Peach", "Peach's Castle"),
        (4, "Bowser", "Lava Land"),
        (5, "Toadstool", "Toad's Hut"),
    ]
    .into_iter()
    .map(|(id, name, address)| Customer {
        id,
        name: name.to_string(),
        address: address.to_string(),
    })
    .collect();

    let toppings = [
        (1, "Cheese"),
        (2, "Sour Cream"),
        (3, "Bacon Bits"),
        (4, "Chives"),
        (5, "Butter"),
    ]
    .into_iter()
    .map(|(id, name)| Topping {
        id,
        name: name.to_string(),
    })
    .collect();

    let orders = [
        Order {
            id: 1,
            customer_id: 1,
            driver_id: Some(1),
            placed_on: now - Duration::hours(4),
            delivered_on: None,
        },
        Order {
            id: 2,
            customer_id: 3,
            driver_id: Some(2),
            placed_on: now - Duration::hours(3),
            delivered_on: Some(now),
        },
        Order {
            id: 3,
            customer_id: 4,
            driver_id: None,
            placed_on: now - Duration::hours(1),
            delivered_on: None,
        },
    ]
    .into_iter()
    .collect();

    let order_toppings = [(1, 1, 1), (2, 1, 3), (3, 2, 2), (4, 2, 5)]
        .into_iter()
        .map(|(id, order_id, topping_id)| OrderTopping {
            id,
            order_id,
            topping_id,
        })
        .collect();

    Tables {
        drivers,
        customers,
        toppings,
        orders,
        order_toppings,
    }
}
