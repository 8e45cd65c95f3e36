//! Plain-text payload carried by a card drag.
//!
//! The dragged project's id crosses the view boundary as plain text under a
//! single format tag; the drop side reads it back with no further
//! negotiation.

use std::str::FromStr;

use uuid::Uuid;

/// The only format tag the payload travels under
pub const DRAG_PAYLOAD_FORMAT: &str = "text/plain";

/// The dragged project's id as it moves between the item view (drag
/// source) and a column view (drop target)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    id: Uuid,
}

impl DragPayload {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Encode for the data channel
    pub fn as_plain_text(&self) -> String {
        self.id.to_string()
    }

    /// Read back from the data channel; anything that is not a project id
    /// decodes to None
    pub fn from_plain_text(text: &str) -> Option<Self> {
        Uuid::from_str(text.trim()).ok().map(Self::new)
    }
}
