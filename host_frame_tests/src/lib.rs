#![allow(dead_code)]

extern crate thiserror;

#[path = "../../src/core/protocol.rs"]
mod protocol;
#[path = "../../src/core/frame_store.rs"]
mod frame_store;
#[path = "../../src/core/dispatcher.rs"]
mod dispatcher;
#[path = "../../src/core/config_validation.rs"]
mod config_validation;
