//! Remote commands
//!
//! The update layer never performs IO; it returns one of these and the main
//! loop asks the backend to run it. Each command is answered later by a
//! `RemoteMessage`.

use accessory_core::{AccessoryId, AccessoryPayload};

/// A remote call requested by the update layer
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fetch the full list
    LoadAccessories,
    /// Create a record from a validated payload
    CreateAccessory(AccessoryPayload),
    /// Update the record with the given id
    UpdateAccessory(AccessoryId, AccessoryPayload),
    /// Delete the record with the given id
    DeleteAccessory(AccessoryId),
}
