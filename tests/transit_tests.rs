//! Scenario tests for the transit dispatch consumer
//!
//! These play through an operating day the way a dispatcher would: seed
//! routes, apply events as they come in, and check that the network keeps
//! surfacing the route most in need of attention.

use vecheap::transit::{Action, Route, RouteUpdate, TransitError, TransitNetwork};

fn seed_network() -> TransitNetwork {
    let mut network = TransitNetwork::new();
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
            .delay(0)
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
    network
}

#[test]
fn seeded_network_surfaces_the_worst_route() {
    let network = seed_network();
    assert_eq!(network.len(), 6);
    // Line 1: 0.7*10 + 5*5 + 0.6*3 - 3*2 = 27.8, the highest score.
    let critical = network.most_critical().unwrap();
    assert_eq!(critical.id, 1);
    assert!((critical.criticality() - 27.8).abs() < 1e-9);
}

#[test]
fn an_operating_day_of_events() {
    let mut network = seed_network();

    // 08:00 peak: density spikes on the commuter lines.
    network
        .update_route(1, RouteUpdate::new().density(0.9))
        .unwrap();
    network
        .update_route(2, RouteUpdate::new().density(0.85))
        .unwrap();
    assert_eq!(network.most_critical().unwrap().id, 1);

    // 09:30 accident on Line 3.
    network.record_delay(3, 15).unwrap();
    assert_eq!(network.most_critical().unwrap().id, 3);

    // 11:00 reinforcement: extra vehicles assigned to Line 3.
    let vehicles = network.route(3).unwrap().available_resources;
    network
        .update_route(3, RouteUpdate::new().resources(vehicles + 5))
        .unwrap();
    // Still the worst; the delay dominates the added resources.
    assert_eq!(network.most_critical().unwrap().id, 3);

    // Dispatch works the backlog in criticality order.
    let first = network.dispatch_most_critical().unwrap();
    let second = network.dispatch_most_critical().unwrap();
    assert_eq!(first.id, 3);
    assert_eq!(second.id, 1);
    assert!(first.criticality() >= second.criticality());
    assert_eq!(network.len(), 4);
}

#[test]
fn every_mutation_refreshes_the_ordering() {
    let mut network = seed_network();

    // Push each route to the top in turn by inflating its delay.
    for id in [5, 4, 2, 6] {
        network.record_delay(id, 60).unwrap();
        assert_eq!(network.most_critical().unwrap().id, id);
    }
}

#[test]
fn dispatching_everything_empties_the_network() {
    let mut network = seed_network();
    let mut scores = Vec::new();
    while let Some(route) = network.dispatch_most_critical() {
        scores.push(route.criticality());
    }
    assert_eq!(scores.len(), 6);
    assert!(network.is_empty());
    assert!(network.most_critical().is_none());
    assert!(network.dispatch_most_critical().is_none());
    // Strictly non-increasing criticality.
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn unknown_ids_are_reported() {
    let mut network = seed_network();
    let err = network.record_delay(42, 10).unwrap_err();
    assert_eq!(err, TransitError::UnknownRoute(42));
    assert_eq!(err.to_string(), "no route with id 42");
}

#[test]
fn plan_prefers_acute_interventions() {
    let mut network = seed_network();
    network
        .update_route(1, RouteUpdate::new().density(0.95).resources(2))
        .unwrap();
    network.record_delay(3, 20).unwrap();

    let plan = network.optimization_plan();
    assert_eq!(plan.len(), 5);

    let action_for = |id: u32| plan.iter().find(|(r, _)| r.id == id).map(|(_, a)| *a);
    assert_eq!(action_for(3), Some(Action::ExpressService));
    assert_eq!(action_for(1), Some(Action::IncreaseFrequency));
    // A quiet route, if ranked at all, only gets monitored.
    if let Some(action) = action_for(5) {
        assert_eq!(action, Action::Monitor);
    }
}
