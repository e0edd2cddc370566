//! Component notifications and the per-component subscription registry.
//!
//! Every observable change on a component is a [`ComponentEvent`]. Observers
//! hold a crossbeam [`Receiver`] per subscription; the tree keeps the sending
//! half and drops it when the component is destroyed, so a receiver sees the
//! final [`ComponentEvent::Destroy`] followed by disconnection.

use crate::tree::ComponentId;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// A change observed on a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// Bounds were assigned.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// The style was patched.
    StyleChange,
    /// The component became visible.
    Show,
    /// The component was hidden.
    Hide,
    /// The component gained focus.
    Focus,
    /// The component lost focus.
    Blur,
    /// A child was attached.
    ChildAdded(ComponentId),
    /// A child was detached.
    ChildRemoved(ComponentId),
    /// The component was destroyed. Always the last notification.
    Destroy,
    /// A container's title changed.
    TitleChange(Option<String>),
    /// A text widget's content changed.
    ContentChange,
    /// An input's value changed; carries the new value.
    ValueChange(String),
    /// An input's cursor moved; carries the new cursor index.
    CursorMove(usize),
}

/// Payload-free discriminant of [`ComponentEvent`], used for filtering.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Resize,
    StyleChange,
    Show,
    Hide,
    Focus,
    Blur,
    ChildAdded,
    ChildRemoved,
    Destroy,
    TitleChange,
    ContentChange,
    ValueChange,
    CursorMove,
}

impl ComponentEvent {
    /// The kind of this event.
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Resize { .. } => EventKind::Resize,
            Self::StyleChange => EventKind::StyleChange,
            Self::Show => EventKind::Show,
            Self::Hide => EventKind::Hide,
            Self::Focus => EventKind::Focus,
            Self::Blur => EventKind::Blur,
            Self::ChildAdded(_) => EventKind::ChildAdded,
            Self::ChildRemoved(_) => EventKind::ChildRemoved,
            Self::Destroy => EventKind::Destroy,
            Self::TitleChange(_) => EventKind::TitleChange,
            Self::ContentChange => EventKind::ContentChange,
            Self::ValueChange(_) => EventKind::ValueChange,
            Self::CursorMove(_) => EventKind::CursorMove,
        }
    }
}

/// An event together with the component that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The component the event happened on.
    pub source: ComponentId,
    /// What happened.
    pub event: ComponentEvent,
}

#[derive(Debug)]
struct Subscriber {
    sender: Sender<Notification>,
    /// `None` delivers every kind.
    kinds: Option<Vec<EventKind>>,
}

impl Subscriber {
    fn wants(&self, kind: EventKind) -> bool {
        self.kinds.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Subscription registry of one component.
#[derive(Debug, Default)]
pub struct Subscribers {
    entries: Vec<Subscriber>,
}

impl Subscribers {
    /// Register an observer; `kinds` limits delivery when given.
    pub fn subscribe(&mut self, kinds: Option<&[EventKind]>) -> Receiver<Notification> {
        let (sender, receiver) = unbounded();
        self.entries.push(Subscriber {
            sender,
            kinds: kinds.map(<[EventKind]>::to_vec),
        });
        receiver
    }

    /// Deliver an event to every interested observer.
    ///
    /// Observers whose receiver was dropped are removed.
    pub fn emit(&mut self, source: ComponentId, event: &ComponentEvent) {
        let kind = event.kind();
        self.entries.retain(|subscriber| {
            if !subscriber.wants(kind) {
                return true;
            }
            subscriber
                .sender
                .send(Notification {
                    source,
                    event: event.clone(),
                })
                .is_ok()
        });
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}
