//! Transit route dispatch built on [`PriorityHeap`]
//!
//! A worked consumer of the heap: a transit network tracks routes by id and
//! keeps the most critical route at the root of a heap so dispatchers can
//! peek or process it in O(log n). Criticality is a derived score over a
//! route's live fields, recomputed on demand rather than cached.
//!
//! # Rebuild on update
//!
//! The heap has no decrease-key, so whenever a route's fields change the
//! network rebuilds the heap from the id map by reinserting every route —
//! O(n log n) per mutation. This mirrors how such dispatch systems are
//! commonly written against plain binary heaps and is a known algorithmic
//! limitation of the approach, not an oversight.
//!
//! # Example
//!
//! ```rust
//! use vecheap::transit::{Route, TransitNetwork};
//!
//! let mut network = TransitNetwork::new();
//! network.add_route(Route::new(1, "Line 1", "North Terminal", "Downtown")
//!     .density(0.9)
//!     .delay(8)
//!     .importance(0.8)
//!     .resources(3));
//! network.add_route(Route::new(2, "Line 2", "Downtown", "South Terminal")
//!     .density(0.4)
//!     .delay(1)
//!     .importance(0.3)
//!     .resources(5));
//!
//! assert_eq!(network.most_critical().unwrap().id, 1);
//! network.record_delay(2, 30).unwrap();
//! assert_eq!(network.most_critical().unwrap().id, 2);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::time::SystemTime;

use rustc_hash::FxHashMap;

use crate::binary::PriorityHeap;
use crate::compare::Comparator;

// Weights of the criticality score, in priority order: demand dominates,
// then delay, then connectivity; assigned resources offset the score.
const DEMAND_FACTOR: f64 = 10.0;
const DELAY_FACTOR: f64 = 5.0;
const CONNECTIVITY_FACTOR: f64 = 3.0;
const RESOURCE_FACTOR: f64 = 2.0;

/// A transit route and the live operating figures its criticality is
/// derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Stable identity; the key of the network's route map.
    pub id: u32,
    pub name: String,
    pub origin: String,
    pub destination: String,
    /// Occupancy ratio in `[0.0, 1.0]`.
    pub passenger_density: f64,
    /// Minutes of delay accumulated over the operating day.
    pub accumulated_delay: u32,
    /// How much the route matters for transfers, in `[0.0, 1.0]`.
    pub connection_importance: f64,
    /// Vehicles currently assigned.
    pub available_resources: u32,
    /// When any of the figures above last changed.
    pub last_updated: SystemTime,
}

impl Route {
    /// Creates a route with all operating figures zeroed; chain the
    /// builder methods to fill them in.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            origin: origin.into(),
            destination: destination.into(),
            passenger_density: 0.0,
            accumulated_delay: 0,
            connection_importance: 0.0,
            available_resources: 0,
            last_updated: SystemTime::now(),
        }
    }

    pub fn density(mut self, density: f64) -> Self {
        self.passenger_density = density;
        self
    }

    pub fn delay(mut self, minutes: u32) -> Self {
        self.accumulated_delay = minutes;
        self
    }

    pub fn importance(mut self, importance: f64) -> Self {
        self.connection_importance = importance;
        self
    }

    pub fn resources(mut self, vehicles: u32) -> Self {
        self.available_resources = vehicles;
        self
    }

    /// Derived priority of the route: higher means more critical.
    ///
    /// Recomputed from the live fields on every call; nothing is cached,
    /// so the score always reflects the current state.
    pub fn criticality(&self) -> f64 {
        self.passenger_density * DEMAND_FACTOR
            + f64::from(self.accumulated_delay) * DELAY_FACTOR
            + self.connection_importance * CONNECTIVITY_FACTOR
            - f64::from(self.available_resources) * RESOURCE_FACTOR
    }
}

/// Orders routes most-critical-first, so the heap root is always the route
/// needing attention soonest. Ties break by id for determinism.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByCriticality;

impl Comparator<Route> for ByCriticality {
    fn compare(&self, a: &Route, b: &Route) -> Ordering {
        b.criticality()
            .total_cmp(&a.criticality())
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Recommended intervention for a route, chosen from its operating figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Crowded and under-resourced: add vehicles to the rotation.
    IncreaseFrequency,
    /// Heavily delayed: run a limited-stop express service.
    ExpressService,
    /// Important transfer route running late: hold connections for it.
    SyncConnections,
    /// Nothing acute: keep watching.
    Monitor,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::IncreaseFrequency => "increase vehicle frequency",
            Action::ExpressService => "run an express service",
            Action::SyncConnections => "prioritize connection sync",
            Action::Monitor => "keep monitoring",
        };
        f.write_str(text)
    }
}

/// Error type for network operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitError {
    /// No route with the given id exists in the network.
    UnknownRoute(u32),
}

impl fmt::Display for TransitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitError::UnknownRoute(id) => write!(f, "no route with id {id}"),
        }
    }
}

impl std::error::Error for TransitError {}

/// Partial update to a route's operating figures.
///
/// Only the fields set via the builder methods are applied; the rest of
/// the route is left untouched. Applying an update refreshes the route's
/// `last_updated` stamp.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouteUpdate {
    density: Option<f64>,
    delay: Option<u32>,
    importance: Option<f64>,
    resources: Option<u32>,
}

impl RouteUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    pub fn delay(mut self, minutes: u32) -> Self {
        self.delay = Some(minutes);
        self
    }

    pub fn importance(mut self, importance: f64) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn resources(mut self, vehicles: u32) -> Self {
        self.resources = Some(vehicles);
        self
    }

    fn apply(&self, route: &mut Route) {
        if let Some(density) = self.density {
            route.passenger_density = density;
        }
        if let Some(minutes) = self.delay {
            route.accumulated_delay = minutes;
        }
        if let Some(importance) = self.importance {
            route.connection_importance = importance;
        }
        if let Some(vehicles) = self.resources {
            route.available_resources = vehicles;
        }
        route.last_updated = SystemTime::now();
    }
}

/// A dispatch network: routes keyed by id, with the most critical route
/// kept at the root of a [`PriorityHeap`].
#[derive(Debug)]
pub struct TransitNetwork {
    routes: FxHashMap<u32, Route>,
    critical: PriorityHeap<Route, ByCriticality>,
}

impl Default for TransitNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self {
            routes: FxHashMap::default(),
            critical: PriorityHeap::with_comparator(ByCriticality),
        }
    }

    /// Number of routes currently tracked.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Looks up a route by id.
    pub fn route(&self, id: u32) -> Option<&Route> {
        self.routes.get(&id)
    }

    /// Adds a route, replacing any existing route with the same id.
    pub fn add_route(&mut self, route: Route) {
        let replaced = self.routes.insert(route.id, route.clone()).is_some();
        if replaced {
            // The stale snapshot is still in the heap; rebuild to evict it.
            self.rebuild();
        } else {
            self.critical.push(route);
        }
    }

    /// Applies a partial update to the route with `id`, then rebuilds the
    /// heap so its ordering reflects the new criticality.
    pub fn update_route(&mut self, id: u32, update: RouteUpdate) -> Result<(), TransitError> {
        let route = self
            .routes
            .get_mut(&id)
            .ok_or(TransitError::UnknownRoute(id))?;
        update.apply(route);
        self.rebuild();
        Ok(())
    }

    /// Records `extra_minutes` of additional delay on a route, as reported
    /// by a traffic incident.
    pub fn record_delay(&mut self, id: u32, extra_minutes: u32) -> Result<(), TransitError> {
        let current = self
            .routes
            .get(&id)
            .ok_or(TransitError::UnknownRoute(id))?
            .accumulated_delay;
        self.update_route(id, RouteUpdate::new().delay(current + extra_minutes))
    }

    /// Borrows the most critical route without removing it.
    pub fn most_critical(&self) -> Option<&Route> {
        self.critical.peek()
    }

    /// Removes and returns the most critical route, dropping it from the
    /// network entirely.
    pub fn dispatch_most_critical(&mut self) -> Option<Route> {
        let route = self.critical.pop()?;
        self.routes.remove(&route.id);
        Some(route)
    }

    /// Top routes by criticality (at most five), each paired with the
    /// recommended intervention.
    pub fn optimization_plan(&self) -> Vec<(Route, Action)> {
        let mut ranked: Vec<&Route> = self.routes.values().collect();
        ranked.sort_by(|a, b| ByCriticality.compare(a, b));
        ranked
            .into_iter()
            .take(5)
            .map(|route| (route.clone(), recommend(route)))
            .collect()
    }

    /// Reinserts every live route into a fresh heap. O(n log n); the price
    /// of priority updates without decrease-key.
    fn rebuild(&mut self) {
        let mut fresh = PriorityHeap::with_comparator(ByCriticality);
        fresh.extend(self.routes.values().cloned());
        self.critical = fresh;
    }
}

fn recommend(route: &Route) -> Action {
    if route.passenger_density > 0.8 && route.available_resources < 5 {
        Action::IncreaseFrequency
    } else if route.accumulated_delay > 10 {
        Action::ExpressService
    } else if route.connection_importance > 0.7 && route.accumulated_delay > 5 {
        Action::SyncConnections
    } else {
        Action::Monitor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_network() -> TransitNetwork {
        let mut network = TransitNetwork::new();
        network.add_route(
            Route::new(1, "Line 1", "North Terminal", "Downtown")
                .density(0.9)
                .delay(8)
                .importance(0.8)
                .resources(3),
        );
        network.add_route(
            Route::new(2, "Line 2", "Downtown", "South Terminal")
                .density(0.7)
                .delay(3)
                .importance(0.9)
                .resources(4),
        );
        network.add_route(
            Route::new(3, "Line 3", "East Terminal", "West Terminal")
                .density(0.5)
                .delay(12)
                .importance(0.6)
                .resources(2),
        );
        network
    }

    #[test]
    fn criticality_weighs_all_factors() {
        let route = Route::new(9, "X", "A", "B")
            .density(0.9)
            .delay(8)
            .importance(0.8)
            .resources(3);
        // 0.9*10 + 8*5 + 0.8*3 - 3*2
        assert!((route.criticality() - 45.4).abs() < 1e-9);
    }

    #[test]
    fn most_critical_tracks_highest_score() {
        let network = sample_network();
        // Line 3: 0.5*10 + 12*5 + 0.6*3 - 2*2 = 62.8, the highest.
        assert_eq!(network.most_critical().unwrap().id, 3);
    }

    #[test]
    fn recorded_delay_promotes_a_route() {
        let mut network = sample_network();
        network.record_delay(2, 30).unwrap();
        assert_eq!(network.most_critical().unwrap().id, 2);
        assert_eq!(network.route(2).unwrap().accumulated_delay, 33);
    }

    #[test]
    fn dispatch_removes_the_route() {
        let mut network = sample_network();
        let dispatched = network.dispatch_most_critical().unwrap();
        assert_eq!(dispatched.id, 3);
        assert_eq!(network.len(), 2);
        assert!(network.route(3).is_none());
        // The next most critical surfaces.
        assert_eq!(network.most_critical().unwrap().id, 1);
    }

    #[test]
    fn updates_on_unknown_routes_fail() {
        let mut network = sample_network();
        assert_eq!(
            network.update_route(99, RouteUpdate::new().density(0.5)),
            Err(TransitError::UnknownRoute(99))
        );
        assert_eq!(
            network.record_delay(99, 5),
            Err(TransitError::UnknownRoute(99))
        );
    }

    #[test]
    fn replacing_a_route_evicts_the_stale_snapshot() {
        let mut network = sample_network();
        network.add_route(
            Route::new(3, "Line 3", "East Terminal", "West Terminal")
                .density(0.1)
                .resources(5),
        );
        assert_eq!(network.len(), 3);
        // Route 3 is no longer critical; the heap must not surface its
        // old snapshot.
        assert_eq!(network.most_critical().unwrap().id, 1);
    }

    #[test]
    fn plan_ranks_and_recommends() {
        let mut network = sample_network();
        network.add_route(
            Route::new(4, "Line 4", "Central Plaza", "Airport")
                .density(0.85)
                .delay(2)
                .importance(0.9)
                .resources(1),
        );

        let plan = network.optimization_plan();
        assert_eq!(plan.len(), 4);
        // Most critical first.
        assert_eq!(plan[0].0.id, 3);
        // Criticalities are non-increasing down the plan.
        for pair in plan.windows(2) {
            assert!(pair[0].0.criticality() >= pair[1].0.criticality());
        }

        // Line 3 is delayed past the express threshold.
        assert_eq!(plan[0].1, Action::ExpressService);
        // Line 4 is crowded and under-resourced.
        let line4 = plan.iter().find(|(r, _)| r.id == 4).unwrap();
        assert_eq!(line4.1, Action::IncreaseFrequency);
    }

    #[test]
    fn plan_caps_at_five_routes() {
        let mut network = TransitNetwork::new();
        for id in 0..8 {
            network.add_route(Route::new(id, format!("Line {id}"), "A", "B").delay(id));
        }
        assert_eq!(network.optimization_plan().len(), 5);
    }
}
