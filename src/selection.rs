use std::fmt;

use tracing::debug;

use crate::{catalog::Location, route::RouteResult};

/// Which part of the selection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected,
    Start,
    Destination,
    Route,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(SelectionEvent, &Selection) + Send>;

/// Holds what the user is looking at and where they want to go.
///
/// The four fields are independent, with one rule: a stored route belongs to
/// the endpoints that produced it, so it is dropped whenever either endpoint
/// changes or is cleared. Computing a new route is the map surface's job.
#[derive(Default)]
pub struct Selection {
    selected: Option<Location>,
    start: Option<Location>,
    destination: Option<Location>,
    route: Option<RouteResult>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("selected", &self.selected)
            .field("start", &self.start)
            .field("destination", &self.destination)
            .field("route", &self.route)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Selection {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn selected(&self) -> Option<&Location> {
        self.selected.as_ref()
    }

    pub fn start(&self) -> Option<&Location> {
        self.start.as_ref()
    }

    pub fn destination(&self) -> Option<&Location> {
        self.destination.as_ref()
    }

    pub fn route(&self) -> Option<&RouteResult> {
        self.route.as_ref()
    }

    /// Both endpoints are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.destination.is_some()
    }

    pub fn set_selected(&mut self, location: Option<Location>) {
        if self.selected != location {
            self.selected = location;
            self.notify(SelectionEvent::Selected);
        }
    }

    pub fn set_start(&mut self, location: Option<Location>) {
        if self.start != location {
            self.start = location;
            let dropped = self.drop_route();
            self.notify(SelectionEvent::Start);
            self.notify_dropped(dropped);
        }
    }

    pub fn set_destination(&mut self, location: Option<Location>) {
        if self.destination != location {
            self.destination = location;
            let dropped = self.drop_route();
            self.notify(SelectionEvent::Destination);
            self.notify_dropped(dropped);
        }
    }

    pub fn set_route(&mut self, route: Option<RouteResult>) {
        if self.route != route {
            self.route = route;
            self.notify(SelectionEvent::Route);
        }
    }

    /// Exchanges start and destination. Swapping twice restores the original.
    pub fn swap(&mut self) {
        if self.start == self.destination {
            return;
        }
        std::mem::swap(&mut self.start, &mut self.destination);
        debug!("Swapped start and destination");
        let dropped = self.drop_route();
        self.notify(SelectionEvent::Start);
        self.notify(SelectionEvent::Destination);
        self.notify_dropped(dropped);
    }

    /// Forgets the route along with both endpoints.
    pub fn clear_route(&mut self) {
        self.set_route(None);
        self.set_start(None);
        self.set_destination(None);
    }

    /// Registers `observer`, called after every effective change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(SelectionEvent, &Selection) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    // Runs before the endpoint event goes out, so no observer ever sees new
    // endpoints next to the old route.
    fn drop_route(&mut self) -> bool {
        let dropped = self.route.take().is_some();
        if dropped {
            debug!("Endpoints changed, dropping stored route");
        }
        dropped
    }

    fn notify_dropped(&mut self, dropped: bool) {
        if dropped {
            self.notify(SelectionEvent::Route);
        }
    }

    fn notify(&mut self, event: SelectionEvent) {
        if self.observers.is_empty() {
            return;
        }
        let mut observers = std::mem::take(&mut self.observers);
        for (_, observer) in observers.iter_mut() {
            observer(event, self);
        }
        // Observers can't reach the selection mutably, so none were added meanwhile.
        self.observers = observers;
    }
}
