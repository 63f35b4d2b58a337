//! Lifecycle notifications
//!
//! A binding reports the end of its load through exactly one notification:
//! `data-loaded` on success, `http-error` or `error` on failure. Listeners are
//! registered per [`EventKind`] and called synchronously, in registration
//! order, from inside [`EventBus::emit`].

use serde::Serialize;

use crate::error::HttpError;
use crate::error::LoadError;
use crate::payload::RawPayload;

/// The closed set of notification channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DataLoaded,
    HttpError,
    Error,
}

impl EventKind {
    /// Returns the channel's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataLoaded => "data-loaded",
            Self::HttpError => "http-error",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification and its payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Event {
    /// Data was fetched and extracted; carries the extracted, unfiltered data.
    DataLoaded { data: RawPayload },
    /// The server answered with a failure status.
    HttpError {
        status: u16,
        message: String,
        url: String,
    },
    /// Any other load failure.
    Error { message: String },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::DataLoaded { .. } => EventKind::DataLoaded,
            Self::HttpError { .. } => EventKind::HttpError,
            Self::Error { .. } => EventKind::Error,
        }
    }

    /// Returns `true` for `http-error` and `error`.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::DataLoaded { .. })
    }
}

impl From<LoadError> for Event {
    /// Classifies a load failure: HTTP status failures go to `http-error`,
    /// everything else to `error`.
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Http(HttpError::Response {
                status,
                message,
                url,
            }) => Event::HttpError {
                status,
                message,
                url,
            },
            other => Event::Error {
                message: other.to_string(),
            },
        }
    }
}

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&Event) + Send + Sync>;

/// Typed publish/subscribe channel for binding notifications.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(ListenerId, EventKind, Listener)>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for events of `kind`.
    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, kind, Box::new(listener)));
        id
    }

    /// Unregisters a listener. Returns `false` if it was not registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Delivers `event` to every listener of its kind.
    pub fn emit(&self, event: &Event) {
        let kind = event.kind();
        log::debug!("emitting {} to {} listener(s)", kind, self.listener_count(kind));
        for (_, listener_kind, listener) in &self.listeners {
            if *listener_kind == kind {
                listener(event);
            }
        }
    }

    /// Number of listeners registered for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners
            .iter()
            .filter(|(_, listener_kind, _)| *listener_kind == kind)
            .count()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
