//! # BLOCKFALL Event System
//!
//! Gameplay notifications for whoever is listening (HUD, audio, logs).
//!
//! ```text
//! ┌─────────────┐      ┌─────────────┐      ┌─────────────┐
//! │  Game loop  │─────>│   Bounded   │─────>│  Consumers  │
//! │  (edits,    │      │   channel   │      │  (HUD, SFX, │
//! │   physics)  │      │             │      │   logging)  │
//! └─────────────┘      └─────────────┘      └─────────────┘
//! ```
//!
//! Sending never blocks the frame. A full channel drops the event.

use blockfall_core::{BlockType, TileCoord};
use blockfall_economy::Tool;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Events emitted by the frame loop.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// A block was broken with a tool.
    BlockBroken {
        /// Where it was.
        coord: TileCoord,
        /// What it was.
        block: BlockType,
        /// Tool used.
        tool: Tool,
        /// False when the inventory had no room for it.
        collected: bool,
    },

    /// A block was removed without a yield.
    BlockCleared {
        /// Where it was.
        coord: TileCoord,
        /// What it was.
        block: BlockType,
    },

    /// A block was placed.
    BlockPlaced {
        /// Where it is.
        coord: TileCoord,
        /// What it is.
        block: BlockType,
    },

    /// A fall cost a life.
    FallDamage {
        /// Effective fall distance in tiles.
        distance: f32,
        /// Lives left.
        lives_remaining: u32,
    },

    /// The last life was lost.
    PlayerDied {
        /// Frame of death.
        frame: u64,
    },
}

/// Bounded event channel.
pub struct EventBus {
    sender: Sender<GameEvent>,
    receiver: Receiver<GameEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum events in flight before new ones are dropped.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple producers).
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle (clone for multiple consumers).
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }
}

/// Handle for sending events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<GameEvent>,
}

impl EventSender {
    /// Sends an event without blocking.
    ///
    /// Returns `false` if the event was dropped.
    #[inline]
    pub fn send(&self, event: GameEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::warn!(?event, "event channel full, dropping event");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle for receiving events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<GameEvent>,
}

impl EventReceiver {
    /// Takes every pending event without blocking.
    #[must_use]
    pub fn drain(&self) -> Vec<GameEvent> {
        self.receiver.try_iter().collect()
    }

    /// Takes one event, if any.
    #[inline]
    #[must_use]
    pub fn try_recv(&self) -> Option<GameEvent> {
        self.receiver.try_recv().ok()
    }

    /// Returns the number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Checks if there are pending events.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_send_receive() {
        let bus = EventBus::new(8);
        let sender = bus.sender();
        let receiver = bus.receiver();

        assert!(sender.send(GameEvent::BlockPlaced {
            coord: TileCoord::new(1, 2),
            block: BlockType::Wood,
        }));
        assert!(receiver.has_events());

        match receiver.try_recv() {
            Some(GameEvent::BlockPlaced { coord, .. }) => assert_eq!(coord, TileCoord::new(1, 2)),
            other => panic!("wrong event: {other:?}"),
        }
        assert!(receiver.try_recv().is_none());
    }

    #[test]
    fn test_full_channel_drops() {
        let bus = EventBus::new(2);
        let sender = bus.sender();
        for frame in 0..2 {
            assert!(sender.send(GameEvent::PlayerDied { frame }));
        }
        assert!(!sender.send(GameEvent::PlayerDied { frame: 2 }));

        let receiver = bus.receiver();
        assert_eq!(receiver.pending_count(), 2);
        assert_eq!(receiver.drain().len(), 2);
        assert!(!receiver.has_events());
    }
}
