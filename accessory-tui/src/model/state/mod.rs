//! Page data state

mod accessories;
mod form;
mod modal;

pub use accessories::AccessoriesState;
pub use form::{FormField, FormState};
pub use modal::{Modal, ModalState};
