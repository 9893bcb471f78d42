//! The closed vocabularies used to get from a physical gesture to a key
//! of the emulated keypad.
use std::{convert::TryFrom, fmt};

use crate::{definitions::keyboard, error::InputError};

/// A raw input channel of the device.
///
/// The watch exposes exactly these four, every program mapping has to fit
/// into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhysicalInput {
    Tap,
    LongPress,
    CrownUp,
    CrownDown,
}

impl PhysicalInput {
    /// All the available channels
    pub const ALL: [PhysicalInput; 4] = [
        PhysicalInput::Tap,
        PhysicalInput::LongPress,
        PhysicalInput::CrownUp,
        PhysicalInput::CrownDown,
    ];
}

/// What the user meant, independent of the channel that carried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SemanticAction {
    Primary,
    Secondary,
    Up,
    Down,
    Left,
    Right,
}

impl SemanticAction {
    pub const ALL: [SemanticAction; 6] = [
        SemanticAction::Primary,
        SemanticAction::Secondary,
        SemanticAction::Up,
        SemanticAction::Down,
        SemanticAction::Left,
        SemanticAction::Right,
    ];
}

/// The sense of rotation of the crown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrownDirection {
    Positive,
    Negative,
}

impl CrownDirection {
    /// Will return the direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            CrownDirection::Positive => CrownDirection::Negative,
            CrownDirection::Negative => CrownDirection::Positive,
        }
    }

    /// The physical channel that reports a rotation in this direction.
    pub fn input(self) -> PhysicalInput {
        match self {
            CrownDirection::Positive => PhysicalInput::CrownUp,
            CrownDirection::Negative => PhysicalInput::CrownDown,
        }
    }
}

/// Input is done with a hex keyboard that has 16 keys ranging `0-F`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VirtualKey {
    Key0 = 0x0,
    Key1 = 0x1,
    Key2 = 0x2,
    Key3 = 0x3,
    Key4 = 0x4,
    Key5 = 0x5,
    Key6 = 0x6,
    Key7 = 0x7,
    Key8 = 0x8,
    Key9 = 0x9,
    KeyA = 0xA,
    KeyB = 0xB,
    KeyC = 0xC,
    KeyD = 0xD,
    KeyE = 0xE,
    KeyF = 0xF,
}

impl VirtualKey {
    /// The whole keypad ordered by key code
    pub const ALL: [VirtualKey; keyboard::SIZE] = [
        VirtualKey::Key0,
        VirtualKey::Key1,
        VirtualKey::Key2,
        VirtualKey::Key3,
        VirtualKey::Key4,
        VirtualKey::Key5,
        VirtualKey::Key6,
        VirtualKey::Key7,
        VirtualKey::Key8,
        VirtualKey::Key9,
        VirtualKey::KeyA,
        VirtualKey::KeyB,
        VirtualKey::KeyC,
        VirtualKey::KeyD,
        VirtualKey::KeyE,
        VirtualKey::KeyF,
    ];

    /// The key code as understood by the emulator core.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The key code usable as an index into a keyboard array.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for VirtualKey {
    type Error = InputError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        VirtualKey::ALL
            .get(code as usize)
            .copied()
            .ok_or(InputError::InvalidKey(code))
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.code())
    }
}
