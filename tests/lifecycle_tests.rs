// Host-side tests for page lifecycle classification.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod lifecycle {
        include!("../src/core/lifecycle.rs");
    }
}

use crate::core::lifecycle::*;

#[test]
fn persisted_pagehide_keeps_the_app_alive() {
    let exit = PageExit::from_persisted(Some(true));
    assert_eq!(exit, PageExit::BackForwardCache);
    assert!(!exit.releases_resources());
}

#[test]
fn non_persisted_pagehide_tears_down() {
    let exit = PageExit::from_persisted(Some(false));
    assert_eq!(exit, PageExit::Unload);
    assert!(exit.releases_resources());
}

#[test]
fn pagehide_without_transition_info_is_an_unload() {
    assert!(PageExit::from_persisted(None).releases_resources());
}
