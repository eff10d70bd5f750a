//! Small form and feedback primitives shared by the admin console and the
//! public site.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label, TextArea};

mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod status;
pub use status::StatusBanner;
