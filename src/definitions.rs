/// The definitions

/// The definitions for the cpu schedule
pub mod cpu {
    use std::time::Duration;

    /// The amount of hertz the emulation shall run at.
    pub const HERTZ: u64 = 600;
    /// The time between two cpu steps
    pub const INTERVAL: Duration = Duration::from_micros(1_000_000 / HERTZ);
}

/// The display definitions
pub mod display {
    use std::time::Duration;

    /// The amount of times the screen may be redrawn per second
    pub const HERTZ: u64 = 30;
    /// The time between two display refreshes
    pub const INTERVAL: Duration = Duration::from_micros(1_000_000 / HERTZ);
}

/// The definitions for gestures without a release signal
pub mod gesture {
    use std::time::Duration;

    /// How long a tap keeps its key pressed before it is released
    /// by the driver itself.
    pub const RELEASE_DELAY: Duration = Duration::from_millis(100);
}

/// The definitions needed for correct keyboard definitions.
pub mod keyboard {
    /// all the different keyboard entries
    pub const SIZE: usize = 16;
}
