//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing. The
//! web app's `AppService` owns the one `Store<AppState>` and writes to it;
//! views only read.

pub mod app;
pub mod credentials;
pub mod scanner;
pub mod search;
pub mod ui;

pub use app::*;
pub use credentials::*;
pub use scanner::*;
pub use search::*;
pub use ui::*;
