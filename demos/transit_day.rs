//! Transit dispatch walkthrough
//!
//! Seeds a small network, simulates a traffic incident, then plays through
//! a scheduled operating day, printing the most critical route after each
//! event.
//!
//! ```bash
//! cargo run --example transit_day
//! ```

use vecheap::transit::{Route, RouteUpdate, TransitNetwork};

fn seed(network: &mut TransitNetwork) {
    let routes = [
        Route::new(1, "Line 1", "North Terminal", "Downtown")
            .density(0.7)
            .delay(5)
            .importance(0.6)
            .resources(3),
        Route::new(2, "Line 2", "Downtown", "South Terminal")
            .density(0.5)
            .delay(2)
            .importance(0.8)
            .resources(4),
        Route::new(3, "Line 3", "East Terminal", "West Terminal")
            .density(0.6)
            .delay(3)
            .importance(0.5)
            .resources(2),
        Route::new(4, "Line 4", "Central Plaza", "Airport")
            .density(0.4)
            .delay(1)
            .importance(0.9)
            .resources(2),
        Route::new(5, "Line 5", "University", "Shopping District")
            .density(0.3)
            .importance(0.3)
            .resources(5),
        Route::new(6, "Line 6", "North Quarter", "Industrial Park")
            .density(0.6)
            .delay(4)
            .importance(0.5)
            .resources(3),
    ];
    for route in routes {
        network.add_route(route);
    }
}

fn print_most_critical(network: &TransitNetwork) {
    match network.most_critical() {
        Some(route) => println!(
            "  most critical: {} ({} -> {}), score {:.2}",
            route.name,
            route.origin,
            route.destination,
            route.criticality()
        ),
        None => println!("  network is empty"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut network = TransitNetwork::new();
    seed(&mut network);

    println!("Initial route scores:");
    for id in 1..=6 {
        if let Some(route) = network.route(id) {
            println!("  {}: score {:.2}", route.name, route.criticality());
        }
    }
    print_most_critical(&network);

    println!("\nAccident reported on Line 2 (+10 min delay)");
    network.record_delay(2, 10)?;
    print_most_critical(&network);

    // A scheduled operating day: (time, event, route updates).
    let events: [(&str, &str, Vec<(u32, RouteUpdate)>); 6] = [
        (
            "08:00",
            "morning peak",
            vec![
                (1, RouteUpdate::new().density(0.9)),
                (2, RouteUpdate::new().density(0.85)),
                (5, RouteUpdate::new().density(0.8)),
            ],
        ),
        (
            "09:30",
            "accident",
            vec![(3, RouteUpdate::new().delay(18))],
        ),
        (
            "11:00",
            "reinforcement",
            vec![(1, RouteUpdate::new().resources(8))],
        ),
        (
            "15:00",
            "connectivity change",
            vec![(2, RouteUpdate::new().importance(0.95))],
        ),
        (
            "17:00",
            "evening peak",
            vec![
                (1, RouteUpdate::new().density(0.95)),
                (6, RouteUpdate::new().density(0.85)),
            ],
        ),
        (
            "21:00",
            "wind-down",
            vec![
                (1, RouteUpdate::new().density(0.5)),
                (2, RouteUpdate::new().density(0.4)),
                (5, RouteUpdate::new().density(0.2)),
            ],
        ),
    ];

    println!("\n=== Operating day ===");
    for (time, event, updates) in events {
        println!("[{time}] {event}");
        for (id, update) in updates {
            network.update_route(id, update)?;
        }
        print_most_critical(&network);
    }

    println!("\nEnd-of-day optimization plan:");
    for (route, action) in &network.optimization_plan() {
        println!(
            "  {} (score {:.2}): {}",
            route.name,
            route.criticality(),
            action
        );
    }

    Ok(())
}
