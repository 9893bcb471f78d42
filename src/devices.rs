//! The contracts between the driver and everything around it, the emulator
//! core on the one side and the display and sound of the shell on the other.
use std::fmt;

use crate::input::VirtualKey;

/// The framebuffer of the emulator core, a fixed grid of black and white
/// pixels stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Screen {
    /// Will create a new dark screen.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Will create a screen from the given row major pixels, `None` if
    /// the amount of pixels does not fit the size.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<bool>) -> Option<Self> {
        if pixels.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Will return the state of the pixel, `None` if it lies outside.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Will set the pixel, coordinates outside of the screen are ignored.
    pub fn set(&mut self, x: usize, y: usize, to: bool) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = to;
        }
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Will iterate over the screen row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // a zero width screen has no rows to speak of
        self.pixels.chunks(self.width.max(1))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &pixel in row {
                f.write_str(if pixel { "█" } else { " " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg_attr(test, mockall::automock)]
/// The emulator core as seen from the driver. It is not build for
/// concurrent access, all calls have to be serialized by the caller.
pub trait EmulatorCore {
    /// Will advance the emulation by a single step.
    fn cycle(&mut self);

    /// The current framebuffer
    fn screen(&self) -> &Screen;

    /// If the framebuffer changed since the flag was last cleared.
    fn needs_redraw(&self) -> bool;

    fn set_needs_redraw(&mut self, to: bool);

    /// If the core requests a beep.
    fn should_play_sound(&self) -> bool;

    fn set_should_play_sound(&mut self, to: bool);

    fn handle_key_down(&mut self, key: VirtualKey);

    fn handle_key_up(&mut self, key: VirtualKey);
}

#[cfg_attr(test, mockall::automock)]
/// The traits responsible for the display based code
pub trait DisplayCommands {
    /// Will display all from the pixels
    fn display(&mut self, screen: &Screen);
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for the sound cue
pub trait SoundCommands {
    /// Will play a single beep.
    fn play(&mut self);
}

impl<F> DisplayCommands for F
where
    F: FnMut(&Screen),
{
    fn display(&mut self, screen: &Screen) {
        self(screen)
    }
}

impl<F> SoundCommands for F
where
    F: FnMut(),
{
    fn play(&mut self) {
        self()
    }
}
