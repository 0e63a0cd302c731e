//! Rondo: a headless multi-touch note wheel. Twelve pie-slice sectors, one
//! per semitone, pressed and slid between by any number of fingers; sector
//! activations map to note on/off messages on a pluggable sink.
//!
//! The geometry and gesture core lives in the `roundel` crate; this crate
//! adds the musical domain (notes, octaves), configuration, and the daemon
//! plumbing (control socket, config watcher).

pub mod app;
pub mod config;
pub mod events;
pub mod midi;
pub mod notes;
pub mod sys;
