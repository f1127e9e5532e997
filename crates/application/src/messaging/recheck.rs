//! The re-check channel between user surfaces and a page agent.
//!
//! A user surface asks the page agent to re-evaluate its rules after a
//! write, instead of waiting for the change notification to fan out. The
//! request carries a reply slot; the agent acknowledges after re-applying,
//! which closes the request so no channel is left hanging.

use tokio::sync::{mpsc, oneshot};
use umbra_domain::DomainError;

/// A request for a page agent to re-evaluate its rules.
#[derive(Debug)]
pub struct RecheckRequest {
    reply: oneshot::Sender<RecheckAck>,
}

impl RecheckRequest {
    /// Acknowledge the request after the re-evaluation has been applied.
    pub fn acknowledge(self) {
        // The requester may have given up; a dropped reply slot is fine.
        let _ = self.reply.send(RecheckAck { ok: true });
    }
}

/// Acknowledgment for a processed re-check request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecheckAck {
    pub ok: bool,
}

/// Sending half of the re-check channel. Cheap to clone; one per surface.
#[derive(Debug, Clone)]
pub struct RecheckSender {
    sender: mpsc::UnboundedSender<RecheckRequest>,
}

impl RecheckSender {
    /// Ask the agent to re-evaluate and wait for the acknowledgment.
    pub async fn request(&self) -> Result<RecheckAck, DomainError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(RecheckRequest { reply })
            .map_err(|_| DomainError::AgentUnavailable("mailbox closed".to_string()))?;
        response
            .await
            .map_err(|_| DomainError::AgentUnavailable("request dropped".to_string()))
    }

    pub fn is_open(&self) -> bool {
        !self.sender.is_closed()
    }
}

/// Receiving half, handed to the page agent.
pub type RecheckMailbox = mpsc::UnboundedReceiver<RecheckRequest>;

/// Create a connected re-check channel.
pub fn recheck_channel() -> (RecheckSender, RecheckMailbox) {
    let (sender, mailbox) = mpsc::unbounded_channel();
    (RecheckSender { sender }, mailbox)
}
