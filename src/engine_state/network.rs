//! # Network Module
//!
//! Multiplayer replication hook. When a session has a client, the dig path reports each
//! removal through [`NetworkClient::set_block`]. Delivery is fire-and-forget; ordering
//! and retries belong to the transport.

use serde::{Deserialize, Serialize};

use crate::core::StResource;

/// Packet mode for a destroyed block.
pub const MODE_DESTROY: u8 = 0;
/// Packet mode for a placed block.
pub const MODE_CREATE: u8 = 1;

/// Outbound half of a multiplayer connection.
pub trait NetworkClient {
    /// Reports a block change at `(x, y, z)`.
    ///
    /// # Arguments
    /// * `new_type` - The block id now at the coordinate; 0 for a removal.
    /// * `selected_item` - The id of the item the player is holding.
    fn set_block(&mut self, x: i32, y: i32, z: i32, new_type: u8, selected_item: u8);
}

/// Classic set-block message as sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetBlockPacket {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub mode: u8,
    pub block: u8,
}

/// A client that buffers packets until the transport drains them.
#[derive(Debug, Default)]
pub struct QueuedClient {
    outbound: Vec<SetBlockPacket>,
}

impl QueuedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[SetBlockPacket] {
        &self.outbound
    }

    /// Hands every buffered packet to the caller.
    pub fn drain_outbound(&mut self) -> Vec<SetBlockPacket> {
        std::mem::take(&mut self.outbound)
    }
}

impl NetworkClient for QueuedClient {
    fn set_block(&mut self, x: i32, y: i32, z: i32, new_type: u8, selected_item: u8) {
        let mode = if new_type == 0 { MODE_DESTROY } else { MODE_CREATE };
        let block = if new_type == 0 { selected_item } else { new_type };

        self.outbound.push(SetBlockPacket {
            x: x as i16,
            y: y as i16,
            z: z as i16,
            mode,
            block,
        });
    }
}

/// Lets the transport keep a handle to the client the world reports into.
impl<C: NetworkClient> NetworkClient for StResource<C> {
    fn set_block(&mut self, x: i32, y: i32, z: i32, new_type: u8, selected_item: u8) {
        self.get_mut().set_block(x, y, z, new_type, selected_item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_is_sent_as_destroy_with_held_item() {
        let mut client = QueuedClient::new();
        client.set_block(3, 4, 5, 0, 5);

        let packets = client.drain_outbound();
        assert_eq!(
            packets,
            vec![SetBlockPacket { x: 3, y: 4, z: 5, mode: MODE_DESTROY, block: 5 }]
        );
        assert!(client.pending().is_empty());
    }

    #[test]
    fn packets_serialize_to_json() {
        let packet = SetBlockPacket { x: 1, y: 2, z: 3, mode: MODE_DESTROY, block: 1 };
        let json = serde_json::to_string(&packet).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2,"z":3,"mode":0,"block":1}"#);
    }
}
