use std::{fmt, str::FromStr};

use crate::error::MappingError;

/// Represents a single rom of the catalog, the name is the rom title
/// and is unique over the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Program {
    Chip8Picture,
    FifteenPuzzle,
    Airplane,
    AstroDodge,
    Blinky,
    Breakout,
    ConnectFour,
    Filter,
    Landing,
    LunarLander,
    Maze,
    Missile,
    Pong,
    Rocket,
    SpaceInvaders,
    Tetris,
    TicTacToe,
    WipeOff,
}

impl Program {
    /// The catalog in the order it is presented to the user.
    pub const ALL: [Program; 18] = [
        Program::Chip8Picture,
        Program::FifteenPuzzle,
        Program::Airplane,
        Program::AstroDodge,
        Program::Blinky,
        Program::Breakout,
        Program::ConnectFour,
        Program::Filter,
        Program::Landing,
        Program::LunarLander,
        Program::Maze,
        Program::Missile,
        Program::Pong,
        Program::Rocket,
        Program::SpaceInvaders,
        Program::Tetris,
        Program::TicTacToe,
        Program::WipeOff,
    ];

    /// Will return the title of the rom.
    pub fn name(self) -> &'static str {
        match self {
            Program::Chip8Picture => "Chip8 Picture",
            Program::FifteenPuzzle => "15 Puzzle [Roger Ivie]",
            Program::Airplane => "Airplane",
            Program::AstroDodge => "Astro Dodge [Revival Studios, 2008]",
            Program::Blinky => "Blinky [Hans Christian Egeberg, 1991]",
            Program::Breakout => "Breakout (Brix hack) [David Winter, 1997]",
            Program::ConnectFour => "Connect 4 [David Winter]",
            Program::Filter => "Filter",
            Program::Landing => "Landing",
            Program::LunarLander => "Lunar Lander (Udo Pernisz, 1979)",
            Program::Maze => "Maze [David Winter, 199x]",
            Program::Missile => "Missile [David Winter]",
            Program::Pong => "Pong (1 player)",
            Program::Rocket => "Rocket [Joseph Weisbecker, 1978]",
            Program::SpaceInvaders => "Space Invaders [David Winter]",
            Program::Tetris => "Tetris [Fran Dachille, 1991]",
            Program::TicTacToe => "Tic-Tac-Toe [David Winter]",
            Program::WipeOff => "Wipe Off [Joseph Weisbecker]",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Program {
    type Err = MappingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Program::ALL
            .iter()
            .copied()
            .find(|program| program.name() == name)
            .ok_or_else(|| MappingError::UnknownProgram(name.to_string()))
    }
}
