//! Accessory Manager Core Library
//!
//! Provides the business logic shared by accessory manager front-ends:
//! - Data model (`Accessory`, `AccessoryDraft`, `AccessoryPayload`)
//! - Draft validation
//! - REST client for the remote `/accessories` resource
//!
//! This library is platform-independent: it knows nothing about how drafts
//! are edited or how the list is rendered.

pub mod client;
pub mod error;
pub mod types;
pub mod validate;

// Re-export common types
pub use client::AccessoryClient;
pub use error::{CoreError, CoreResult};
pub use types::{subtotal, Accessory, AccessoryDraft, AccessoryId, AccessoryPayload};
pub use validate::{validate_draft, ValidationError};
