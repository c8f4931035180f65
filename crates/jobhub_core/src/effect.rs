#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the one GET for this mount.
    FetchListings { mount: crate::MountId },
    /// Restart the shared click cue from position zero.
    RestartCue,
    /// Follow a posting link with the host's link handler.
    OpenLink { url: String },
}
