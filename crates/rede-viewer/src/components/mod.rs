//! UI components for the lab directory viewer.

mod app;
mod filters;
mod header;
mod lab_list;
mod map_panel;
mod toast;

pub use app::*;
pub use filters::*;
pub use header::*;
pub use lab_list::*;
pub use map_panel::*;
pub use toast::*;
