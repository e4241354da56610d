pub mod admin;
pub mod background;
pub mod draw;
pub mod import;
pub mod report;

pub use admin::{handle_admin_command, handle_reset, AdminCommands};
pub use background::{handle_background_command, BackgroundCommands};
pub use draw::handle_draw;
pub use import::{handle_import_command, ImportCommands};
pub use report::{handle_export, handle_remaining, handle_status, handle_winners};
