//! # Live-update channel
//!
//! One websocket per application lifetime delivers `rating_updated` and
//! `readers_count_updated` frames, each carrying a full replacement
//! [`BookSummary`]. Mounted views subscribe for the events they care about
//! and drop their [`Subscription`] on unmount, so no handler outlives its
//! view. The channel is a best-effort freshness signal, never a source of
//! truth: consumers must tolerate delayed or missing frames.
//!
//! Reconnects are handled here with doubling backoff (capped, reset on a
//! successful open); consumers have no visibility into connection state and
//! cannot close the socket.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use send_wrapper::SendWrapper;
use uuid::Uuid;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use shared::dto::books::BookSummary;
use shared::dto::live::LiveUpdate;

use crate::utils::constants::{
    API_ORIGIN, LIVE_UPDATES_PATH, RECONNECT_INITIAL_MS, RECONNECT_MAX_MS,
};

type Handler = Rc<dyn Fn(&BookSummary)>;

/// Named-event fan-out: event name to ordered handler list.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<HashMap<String, Vec<(Uuid, Handler)>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, event: &str, handler: impl Fn(&BookSummary) + 'static) -> Uuid {
        let id = Uuid::new_v4();
        self.handlers
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push((id, Rc::new(handler)));
        id
    }

    pub fn unsubscribe(&self, event: &str, id: Uuid) {
        if let Some(list) = self.handlers.borrow_mut().get_mut(event) {
            list.retain(|(handler_id, _)| *handler_id != id);
        }
    }

    /// Deliver one event to every current subscriber, in subscription
    /// order. Returns how many handlers ran.
    pub fn dispatch(&self, event: &str, data: &BookSummary) -> usize {
        // Handlers are cloned out first so one may subscribe/unsubscribe
        // while running without holding the borrow.
        let handlers: Vec<Handler> = self
            .handlers
            .borrow()
            .get(event)
            .map(|list| list.iter().map(|(_, h)| Rc::clone(h)).collect())
            .unwrap_or_default();
        for handler in &handlers {
            handler(data);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self, event: &str) -> usize {
        self.handlers
            .borrow()
            .get(event)
            .map(|list| list.len())
            .unwrap_or(0)
    }
}

/// RAII subscription: dropping it unsubscribes unconditionally, which is
/// how views detach on unmount even mid-request.
///
/// The bus lives behind a [`SendWrapper`] so the guard can be handed to
/// `on_cleanup`, which wants `Send + Sync` even though the app is
/// single-threaded.
pub struct Subscription {
    bus: SendWrapper<Rc<EventBus>>,
    event: String,
    id: Uuid,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.bus.unsubscribe(&self.event, self.id);
    }
}

/// Websocket URL for the live-update stream.
pub fn live_updates_url() -> String {
    let origin = API_ORIGIN
        .replace("https://", "wss://")
        .replace("http://", "ws://");
    format!("{origin}{LIVE_UPDATES_PATH}")
}

/// The shared connection. Created once at application start and kept alive
/// for the whole session; the contained socket is replaced on reconnect.
pub struct LiveChannel {
    bus: Rc<EventBus>,
    backoff_ms: Cell<u32>,
    socket: RefCell<Option<WebSocket>>,
}

impl LiveChannel {
    pub fn start(bus: Rc<EventBus>) -> Rc<Self> {
        let channel = Rc::new(Self {
            bus,
            backoff_ms: Cell::new(RECONNECT_INITIAL_MS),
            socket: RefCell::new(None),
        });
        channel.connect();
        channel
    }

    fn connect(self: &Rc<Self>) {
        let url = live_updates_url();
        let ws = match WebSocket::new(&url) {
            Ok(ws) => ws,
            Err(err) => {
                log::error!("Failed to open live-update socket {url}: {err:?}");
                self.schedule_reconnect();
                return;
            }
        };

        let channel = Rc::clone(self);
        let onopen = Closure::<dyn FnMut()>::new(move || {
            log::info!("Live-update channel connected");
            channel.backoff_ms.set(RECONNECT_INITIAL_MS);
        });
        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        onopen.forget();

        let bus = Rc::clone(&self.bus);
        let onmessage = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            let Some(text) = event.data().as_string() else {
                return;
            };
            match serde_json::from_str::<LiveUpdate>(&text) {
                Ok(update) => {
                    bus.dispatch(&update.event, &update.data);
                }
                Err(err) => log::warn!("Ignoring malformed live update: {err}"),
            }
        });
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();

        let channel = Rc::clone(self);
        let onclose = Closure::<dyn FnMut(CloseEvent)>::new(move |_: CloseEvent| {
            log::warn!("Live-update channel closed, reconnecting");
            channel.schedule_reconnect();
        });
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
        onclose.forget();

        *self.socket.borrow_mut() = Some(ws);
    }

    fn schedule_reconnect(self: &Rc<Self>) {
        let delay = self.backoff_ms.get();
        self.backoff_ms.set((delay * 2).min(RECONNECT_MAX_MS));
        let channel = Rc::clone(self);
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            channel.connect();
        });
    }
}

/// Cheap-to-clone handle the application root provides to every view.
/// Wrapped for the thread-safe context store; the app never leaves the
/// main thread.
#[derive(Clone)]
pub struct LiveHandle {
    bus: SendWrapper<Rc<EventBus>>,
    _channel: SendWrapper<Rc<LiveChannel>>,
}

impl LiveHandle {
    /// Open the application-wide connection. Call once, at the root.
    pub fn connect() -> Self {
        let bus = Rc::new(EventBus::new());
        let channel = LiveChannel::start(Rc::clone(&bus));
        Self {
            bus: SendWrapper::new(bus),
            _channel: SendWrapper::new(channel),
        }
    }

    /// Subscribe to one named event until the returned guard is dropped.
    #[must_use = "dropping the subscription immediately would unsubscribe it"]
    pub fn subscribe(
        &self,
        event: &str,
        handler: impl Fn(&BookSummary) + 'static,
    ) -> Subscription {
        let id = self.bus.subscribe(event, handler);
        Subscription {
            bus: SendWrapper::new(Rc::clone(&self.bus)),
            event: event.to_string(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::live::{RATING_UPDATED, READERS_COUNT_UPDATED};

    fn book(id: &str, rating: f64) -> BookSummary {
        BookSummary {
            id: id.to_string(),
            title: "t".to_string(),
            author: "a".to_string(),
            cover_image_url: None,
            average_rating: rating,
            number_of_ratings: None,
            unique_readers_count: None,
            genre: vec![],
            summary: None,
            file_path: None,
            created_at: None,
            is_public: true,
        }
    }

    #[test]
    fn test_dispatch_reaches_every_subscriber_of_that_event() {
        let bus = EventBus::new();
        let seen_a = Rc::new(RefCell::new(Vec::new()));
        let seen_b = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen_a);
        bus.subscribe(RATING_UPDATED, move |b| sink.borrow_mut().push(b.id.clone()));
        let sink = Rc::clone(&seen_b);
        bus.subscribe(RATING_UPDATED, move |b| sink.borrow_mut().push(b.id.clone()));
        let sink = Rc::new(RefCell::new(Vec::new()));
        let other_sink = Rc::clone(&sink);
        bus.subscribe(READERS_COUNT_UPDATED, move |b| {
            other_sink.borrow_mut().push(b.id.clone())
        });

        let ran = bus.dispatch(RATING_UPDATED, &book("x", 4.0));
        assert_eq!(ran, 2);
        assert_eq!(*seen_a.borrow(), vec!["x"]);
        assert_eq!(*seen_b.borrow(), vec!["x"]);
        assert!(sink.borrow().is_empty());
    }

    #[test]
    fn test_dispatch_without_subscribers_is_noop() {
        let bus = EventBus::new();
        assert_eq!(bus.dispatch(RATING_UPDATED, &book("x", 4.0)), 0);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(0u32));

        let sink = Rc::clone(&seen);
        let id = bus.subscribe(RATING_UPDATED, move |_| *sink.borrow_mut() += 1);
        bus.dispatch(RATING_UPDATED, &book("x", 4.0));
        bus.unsubscribe(RATING_UPDATED, id);
        bus.dispatch(RATING_UPDATED, &book("x", 4.0));

        assert_eq!(*seen.borrow(), 1);
        assert_eq!(bus.subscriber_count(RATING_UPDATED), 0);
    }

    #[test]
    fn test_subscription_guard_unsubscribes_on_drop() {
        let bus = Rc::new(EventBus::new());
        let id = bus.subscribe(READERS_COUNT_UPDATED, |_| {});
        let guard = Subscription {
            bus: SendWrapper::new(Rc::clone(&bus)),
            event: READERS_COUNT_UPDATED.to_string(),
            id,
        };
        assert_eq!(bus.subscriber_count(READERS_COUNT_UPDATED), 1);
        drop(guard);
        assert_eq!(bus.subscriber_count(READERS_COUNT_UPDATED), 0);
    }

    #[test]
    fn test_live_update_envelope_parses() {
        let frame = r#"{"event":"rating_updated","data":{"_id":"b1","title":"T","author":"A","averageRating":4.5}}"#;
        let update: LiveUpdate = serde_json::from_str(frame).unwrap();
        assert_eq!(update.event, RATING_UPDATED);
        assert_eq!(update.data.id, "b1");
        assert_eq!(update.data.average_rating, 4.5);
    }

    #[test]
    fn test_live_updates_url() {
        assert!(live_updates_url().starts_with("ws"));
        assert!(live_updates_url().ends_with(LIVE_UPDATES_PATH));
    }
}
