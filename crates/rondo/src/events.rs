use roundel::{ContactId, Point};

#[derive(Debug, Clone)]
pub enum AppEvent {
    Down(ContactId, Point),
    Move(ContactId, Point),
    Up(ContactId),
    OctaveUp,
    OctaveDown,
    ConfigReload,
    Quit,
}
