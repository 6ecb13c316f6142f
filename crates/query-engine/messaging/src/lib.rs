//! Inter-node mailbox contract.
//!
//! A mailbox is one destination for messages in the engine's messaging
//! system. The distributed components around the compiler send and receive
//! through this trait; the compiler core itself never touches it.

use std::time::Duration;

use thiserror::Error;

/// Id of an execution site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SiteId(pub u32);

/// Id of a mailbox within a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MailboxId(pub u32);

/// Topic a message is filed under. Receives can be scoped to one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Default,
    Failure,
}

/// Delivery failed: the destination could not be reached or the message
/// could not be serialized.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("destination site {0:?} is unreachable")]
    Unreachable(SiteId),
    #[error("message serialization failed: {0}")]
    Serialization(String),
}

/// A single destination for messages.
///
/// Blocking receives return `None` on timeout or cancellation; non-blocking
/// receives return `None` when nothing is waiting.
pub trait Mailbox {
    type Message;

    /// Send a message to a mailbox at one site.
    fn send(
        &self,
        site: SiteId,
        mailbox: MailboxId,
        message: Self::Message,
    ) -> Result<(), DeliveryError>;

    /// Send a message to the same mailbox id at several sites.
    fn send_to_all(
        &self,
        sites: &[SiteId],
        mailbox: MailboxId,
        message: &Self::Message,
    ) -> Result<(), DeliveryError>;

    /// Number of messages waiting to be delivered to this mailbox.
    fn pending_count(&self) -> usize;

    /// Next message from the default subject, if one is waiting.
    fn receive(&self) -> Option<Self::Message>;

    /// Next message from the default subject, blocking until one arrives,
    /// the timeout elapses, or the wait is cancelled.
    fn receive_blocking(&self, timeout: Option<Duration>) -> Option<Self::Message>;

    /// Next message filed under `subject`, if one is waiting.
    fn receive_subject(&self, subject: Subject) -> Option<Self::Message>;

    /// Next message filed under `subject`, blocking as [`Mailbox::receive_blocking`].
    fn receive_subject_blocking(
        &self,
        subject: Subject,
        timeout: Option<Duration>,
    ) -> Option<Self::Message>;
}
