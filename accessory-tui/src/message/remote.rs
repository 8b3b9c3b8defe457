//! Backend result messages

use accessory_core::{Accessory, AccessoryId, CoreError};

/// Outcome of a finished backend call, delivered over the backend channel
#[derive(Debug)]
pub enum RemoteMessage {
    /// Initial or refreshed list
    Loaded(Result<Vec<Accessory>, CoreError>),
    /// Create call finished
    Created(Result<Accessory, CoreError>),
    /// Update call finished
    Updated(Result<Accessory, CoreError>),
    /// Delete call finished
    Deleted {
        id: AccessoryId,
        result: Result<(), CoreError>,
    },
}
