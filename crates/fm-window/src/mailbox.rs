//! Window Mailbox
//!
//! Resolver completions and view events are queued here and applied when
//! the window dispatches.

use fm_core::NavigationInfo;
use fm_view::{ViewEvent, ViewEventSink, ViewFrameId};
use smol::channel::{self, Receiver, Sender};

/// One queued message for a window
#[derive(Debug)]
pub enum WindowMessage {
    /// A resolve finished; `serial` names the request it belongs to
    Resolved { serial: u64, info: NavigationInfo },
    /// A view frame signalled
    View { frame: ViewFrameId, event: ViewEvent },
}

pub(crate) struct Mailbox {
    sender: Sender<WindowMessage>,
    receiver: Receiver<WindowMessage>,
}

impl Mailbox {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = channel::unbounded();
        Self { sender, receiver }
    }

    pub(crate) fn sender(&self) -> Sender<WindowMessage> {
        self.sender.clone()
    }

    pub(crate) fn sink(&self) -> MailboxSink {
        MailboxSink {
            sender: self.sender(),
        }
    }

    pub(crate) fn try_recv(&self) -> Option<WindowMessage> {
        self.receiver.try_recv().ok()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

/// View event sink feeding a window mailbox
pub(crate) struct MailboxSink {
    sender: Sender<WindowMessage>,
}

impl ViewEventSink for MailboxSink {
    fn emit(&self, frame: ViewFrameId, event: ViewEvent) {
        if self.sender.try_send(WindowMessage::View { frame, event }).is_err() {
            tracing::trace!("Window gone, dropping event from {}", frame);
        }
    }
}

/// Queue a resolver completion
pub(crate) fn post_resolved(sender: &Sender<WindowMessage>, serial: u64, info: NavigationInfo) {
    if sender.try_send(WindowMessage::Resolved { serial, info }).is_err() {
        tracing::trace!("Window gone, dropping resolve result");
    }
}
