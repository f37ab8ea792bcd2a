mod collection;
mod pager;
mod request_generation;
mod scanner;
mod search_mode;

pub use collection::*;
pub use pager::*;
pub use request_generation::*;
pub use scanner::*;
pub use search_mode::*;
