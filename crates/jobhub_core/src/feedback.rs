/// Playback state of the shared click cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CueState {
    #[default]
    Idle,
    Playing,
}

impl CueState {
    /// A click always (re)starts the cue from zero; nothing is queued.
    pub(crate) fn on_click(&mut self) {
        *self = CueState::Playing;
    }

    pub(crate) fn on_finished(&mut self) -> bool {
        let was_playing = *self == CueState::Playing;
        *self = CueState::Idle;
        was_playing
    }
}
