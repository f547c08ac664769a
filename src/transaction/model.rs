use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A value transfer waiting in the pending set or committed inside a block.
///
/// Field order is part of the canonical block hash; do not reorder.
/// `amount` is any JSON number; its serialized text is what gets hashed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: Number,
}

impl Transaction {
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: impl Into<Number>,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount: amount.into(),
        }
    }
}
