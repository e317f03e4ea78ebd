//! Shared UI for the workspace: the generic admin screen, form controls,
//! the public-page building blocks and the session context.

use dioxus::prelude::*;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod backend;
pub use backend::make_backend;

mod session_provider;
pub use session_provider::{use_session, SessionProvider};

mod banner;
pub use banner::Banner;

mod modal;
pub use modal::{ConfirmDeleteDialog, ModalOverlay};

mod forms;
pub use forms::{FileInput, Label, TextArea, TextInput};

mod rich_text;
pub use rich_text::{render_markdown, RichTextArea};

mod resource_admin;
pub use resource_admin::ResourceAdmin;

mod remote_image;
pub use remote_image::RemoteImage;

mod loading;
pub use loading::{ComingSoon, LoadingSkeleton, Spinner};

pub mod format;
