//! Barcode scanner overlay store

use dioxus::prelude::*;
use scout_common::Scanner;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ScannerState {
    /// Phase and session bookkeeping
    pub scanner: Scanner,
    /// Page is served over plain HTTP from a non-loopback host
    pub insecure_origin: bool,
}
