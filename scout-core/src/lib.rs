pub mod catalog;
pub mod config;
pub mod demo;
pub mod discogs;
pub mod notice;
pub mod search;
pub mod session;
pub mod util;
