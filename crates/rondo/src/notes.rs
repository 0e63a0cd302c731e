//! The twelve-tone note domain: names, indices, MIDI numbers, octaves.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// Notes per octave, and sectors on a standard wheel.
pub const NOTES_PER_OCTAVE: usize = 12;

pub const MIN_OCTAVE: u8 = 0;
pub const MAX_OCTAVE: u8 = 8;
pub const DEFAULT_OCTAVE: u8 = 4;

/// One of the twelve semitones, in wheel order starting at C (sector 0,
/// 12 o'clock). Accepts sharp names, flat aliases, and bare indices when
/// parsed from configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Note {
    #[strum(to_string = "C", serialize = "0")]
    C,
    #[strum(to_string = "C#", serialize = "Db", serialize = "1")]
    CSharp,
    #[strum(to_string = "D", serialize = "2")]
    D,
    #[strum(to_string = "D#", serialize = "Eb", serialize = "3")]
    DSharp,
    #[strum(to_string = "E", serialize = "4")]
    E,
    #[strum(to_string = "F", serialize = "5")]
    F,
    #[strum(to_string = "F#", serialize = "Gb", serialize = "6")]
    FSharp,
    #[strum(to_string = "G", serialize = "7")]
    G,
    #[strum(to_string = "G#", serialize = "Ab", serialize = "8")]
    GSharp,
    #[strum(to_string = "A", serialize = "9")]
    A,
    #[strum(to_string = "A#", serialize = "Bb", serialize = "10")]
    ASharp,
    #[strum(to_string = "B", serialize = "11")]
    B,
}

impl Note {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx % NOTES_PER_OCTAVE)
    }

    pub fn is_sharp(&self) -> bool {
        matches!(
            self,
            Self::CSharp | Self::DSharp | Self::FSharp | Self::GSharp | Self::ASharp
        )
    }

    /// MIDI note number at `octave`; middle C (C4) is 60.
    pub fn midi(&self, octave: u8) -> u8 {
        (octave + 1) * NOTES_PER_OCTAVE as u8 + self.as_index() as u8
    }
}

/// Human name of a MIDI note number, e.g. 60 is "C4".
pub fn midi_note_name(note: u8) -> String {
    let octave = (note / NOTES_PER_OCTAVE as u8) as i8 - 1;
    let name = Note::from_index(note as usize).unwrap_or(Note::C);
    format!("{name}{octave}")
}

/// Current octave, kept inside the playable window `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Octave(u8);

impl Octave {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(MIN_OCTAVE, MAX_OCTAVE))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn up(&mut self) {
        if self.0 < MAX_OCTAVE {
            self.0 += 1;
        }
    }

    pub fn down(&mut self) {
        if self.0 > MIN_OCTAVE {
            self.0 -= 1;
        }
    }
}

impl Default for Octave {
    fn default() -> Self {
        Self(DEFAULT_OCTAVE)
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_deserialization_accepts_all_spellings() {
        let cases = vec![
            ("\"C\"", Note::C),
            ("\"c\"", Note::C),
            ("\"0\"", Note::C),
            ("\"C#\"", Note::CSharp),
            ("\"c#\"", Note::CSharp),
            ("\"Db\"", Note::CSharp),
            ("\"db\"", Note::CSharp),
            ("\"Bb\"", Note::ASharp),
            ("\"11\"", Note::B),
        ];

        for (json, expected) in cases {
            let deserialized: Note = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected, "for {json}");
        }
    }

    #[test]
    fn note_serializes_to_its_display_name() {
        assert_eq!(serde_json::to_string(&Note::CSharp).unwrap(), "\"C#\"");
        assert_eq!(serde_json::to_string(&Note::A).unwrap(), "\"A\"");
    }

    #[test]
    fn index_round_trip() {
        for (i, note) in Note::iter().enumerate() {
            assert_eq!(note.as_index(), i);
            assert_eq!(Note::from_index(i), Some(note));
        }
        // from_index wraps like the wheel does
        assert_eq!(Note::from_index(12), Some(Note::C));
        assert_eq!(Note::from_index(25), Some(Note::CSharp));
    }

    #[test]
    fn sharps_are_the_black_keys() {
        let sharps: Vec<Note> = Note::iter().filter(Note::is_sharp).collect();
        assert_eq!(
            sharps,
            vec![
                Note::CSharp,
                Note::DSharp,
                Note::FSharp,
                Note::GSharp,
                Note::ASharp
            ]
        );
    }

    #[test]
    fn middle_c_is_sixty() {
        assert_eq!(Note::C.midi(4), 60);
        assert_eq!(Note::B.midi(4), 71);
        assert_eq!(Note::G.midi(4), 67);
        assert_eq!(Note::C.midi(0), 12);
        assert_eq!(Note::B.midi(8), 119);
    }

    #[test]
    fn midi_names_read_like_a_tuner() {
        assert_eq!(midi_note_name(60), "C4");
        assert_eq!(midi_note_name(61), "C#4");
        assert_eq!(midi_note_name(69), "A4");
        assert_eq!(midi_note_name(0), "C-1");
    }

    #[test]
    fn octave_clamps_at_both_ends() {
        assert_eq!(Octave::new(40).get(), MAX_OCTAVE);

        let mut o = Octave::new(MAX_OCTAVE);
        o.up();
        assert_eq!(o.get(), MAX_OCTAVE);

        let mut o = Octave::new(MIN_OCTAVE);
        o.down();
        assert_eq!(o.get(), MIN_OCTAVE);

        let mut o = Octave::default();
        o.up();
        assert_eq!(o.get(), DEFAULT_OCTAVE + 1);
        o.down();
        o.down();
        assert_eq!(o.get(), DEFAULT_OCTAVE - 1);
    }
}
