//! The seam to a note-producing peripheral. Real device backends live with
//! the embedding; the daemon ships a log-backed mock.

use crate::notes::midi_note_name;
use derive_more::{AsRef, Deref, Display, From, Into};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct PortName(String);

impl PortName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

/// Outbound note interface. Implementations must tolerate arbitrary
/// interleavings of on/off across notes: the gesture engine emits one
/// on/off pair per contact, and overlapping contacts on the same sector are
/// deliberately not coalesced here.
pub trait MidiOut {
    fn note_on(&mut self, note: u8, velocity: u8);
    fn note_off(&mut self, note: u8);
    fn list_ports(&self) -> Vec<PortName>;
}

/// Log-backed stand-in for a real peripheral.
pub struct MockMidiOut {
    channel: u8,
}

impl MockMidiOut {
    pub fn new(channel: u8) -> Self {
        Self { channel }
    }
}

impl MidiOut for MockMidiOut {
    fn note_on(&mut self, note: u8, velocity: u8) {
        log::info!(
            "note on:  {} (note={note}, vel={velocity}, ch={})",
            midi_note_name(note),
            self.channel
        );
    }

    fn note_off(&mut self, note: u8) {
        log::info!(
            "note off: {} (note={note}, ch={})",
            midi_note_name(note),
            self.channel
        );
    }

    fn list_ports(&self) -> Vec<PortName> {
        vec![
            PortName::new("Mock MIDI Output"),
            PortName::new("Mock MIDI Output 2"),
        ]
    }
}
