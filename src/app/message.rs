//! Application messages

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Control ============
    /// The control's pressed state changed (press-down, release or cancel)
    PressChanged(bool),
    /// A press was released over the control
    Tapped,

    // ============ Animation ============
    /// Frame tick while animations are running
    AnimationTick,
}
