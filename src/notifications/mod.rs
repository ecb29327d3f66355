mod models;
mod toaster;

pub use models::{Toast, ToastKind};
pub use toaster::{Toaster, DEFAULT_TOAST_DURATION_SECS};
