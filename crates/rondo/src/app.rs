//! Event-loop core of the daemon: drives the gesture engine and maps its
//! sector events onto the note sink.

use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::midi::MidiOut;
use crate::notes::{NOTES_PER_OCTAVE, Note, Octave};
use roundel::{LayoutError, SectorEvent, TouchTracker};

pub struct App {
    config: Config,
    tracker: TouchTracker,
    octave: Octave,
    midi: Box<dyn MidiOut>,
}

impl App {
    pub fn new(config: Config, midi: Box<dyn MidiOut>) -> Result<Self, LayoutError> {
        let layout = config.build_layout()?;
        Ok(Self {
            octave: Octave::new(config.midi.octave),
            tracker: TouchTracker::new(layout),
            config,
            midi,
        })
    }

    pub fn octave(&self) -> Octave {
        self.octave
    }

    pub fn tracker(&self) -> &TouchTracker {
        &self.tracker
    }

    /// Handle one event to completion. Returns `false` when the app should
    /// stop; everything held is released first, so no note is left ringing.
    pub fn update(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Down(id, point) => {
                let events = self.tracker.on_down(id, point);
                self.emit(events);
            }
            AppEvent::Move(id, point) => {
                let events = self.tracker.on_move(id, point);
                self.emit(events);
            }
            AppEvent::Up(id) => {
                let events = self.tracker.on_up(id);
                self.emit(events);
            }
            AppEvent::OctaveUp => {
                self.silence_held();
                self.octave.up();
                log::info!("octave {}", self.octave);
            }
            AppEvent::OctaveDown => {
                self.silence_held();
                self.octave.down();
                log::info!("octave {}", self.octave);
            }
            AppEvent::ConfigReload => self.reload_config(),
            AppEvent::Quit => {
                self.silence_held();
                return false;
            }
        }
        true
    }

    fn emit(&mut self, events: Vec<SectorEvent>) {
        for event in events {
            match event {
                SectorEvent::Activate(index) => {
                    self.midi
                        .note_on(self.midi_note(index), self.config.midi.velocity.min(127));
                    if self.tracker.layout().sector_count() == NOTES_PER_OCTAVE
                        && let Some(name) = Note::from_index(index)
                    {
                        log::debug!("pressed {name}{}", self.octave);
                    }
                }
                SectorEvent::Deactivate(index) => {
                    self.midi.note_off(self.midi_note(index));
                }
            }
        }
    }

    /// Sector index to output value: `(octave + 1) · N + index`, clamped to
    /// the MIDI range. With the standard 12-sector wheel this is exactly the
    /// MIDI note number (middle C = 60).
    fn midi_note(&self, index: usize) -> u8 {
        let n = self.tracker.layout().sector_count();
        ((self.octave.get() as usize + 1) * n + index).min(127) as u8
    }

    /// Note-offs must go out with the pitch they were struck at, so held
    /// contacts are released before anything changes the index-to-note
    /// mapping (octave shift, layout rebuild).
    fn silence_held(&mut self) {
        let events = self.tracker.release_all();
        self.emit(events);
    }

    fn reload_config(&mut self) {
        let new_config = match config::load_config() {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to reload config: {e}");
                return;
            }
        };
        match new_config.build_layout() {
            Ok(layout) => {
                // release with the old index-to-note mapping still in place
                self.silence_held();
                self.tracker.set_layout(layout);
                self.config = new_config;
                log::info!("Configuration reloaded");
            }
            Err(e) => log::error!("Reloaded config describes no valid wheel: {e}"),
        }
    }
}
