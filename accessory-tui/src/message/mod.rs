//! Message layer: event messages
//!
//! Bridge between Event and Update: user input and backend results are both
//! expressed as messages, and the update layer translates them into state
//! changes. Updates that need remote work answer with a `Command`, which the
//! main loop hands to the backend.

mod app;
mod command;
mod form;
mod list;
mod modal;
mod remote;

pub use app::AppMessage;
pub use command::Command;
pub use form::FormMessage;
pub use list::ListMessage;
pub use modal::ModalMessage;
pub use remote::RemoteMessage;
