//! Runs the emulator core in real time.
//!
//! The cpu and the display are driven by two independent schedules, both
//! funnel into the one locked [`Session`] before they touch the core. The
//! same lock is taken by every input entry point.
mod session;

pub use session::*;

use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use parking_lot::Mutex;

use crate::{
    definitions::{cpu, display, gesture},
    devices::{DisplayCommands, EmulatorCore, SoundCommands},
    error::DriverError,
    input::{CrownDirection, PhysicalInput, VirtualKey},
    mapping::Program,
    resolver::KeyMapping,
    timer::{Deferred, TimedWorker, Worker},
};

/// The timing configuration of the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// The time between two cpu steps
    pub cpu_interval: Duration,
    /// The time between two checks if the screen has to be drawn
    pub display_interval: Duration,
    /// How long a momentary gesture holds its key
    pub release_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            cpu_interval: cpu::INTERVAL,
            display_interval: display::INTERVAL,
            release_delay: gesture::RELEASE_DELAY,
        }
    }
}

type SharedSession<C, D, S> = Arc<Mutex<Session<C, D, S>>>;

/// Connects the shell to the emulator core.
pub struct Driver<C, D, S, W = Worker>
where
    C: EmulatorCore + Send + 'static,
    D: DisplayCommands + Send + 'static,
    S: SoundCommands + Send + 'static,
    W: TimedWorker,
{
    session: SharedSession<C, D, S>,
    cpu: W,
    display: W,
    timings: Timings,
}

impl<C, D, S> Driver<C, D, S>
where
    C: EmulatorCore + Send + 'static,
    D: DisplayCommands + Send + 'static,
    S: SoundCommands + Send + 'static,
{
    /// Will create a new driver running at the default rates.
    pub fn new(core: C, display: D, sound: S) -> Self {
        Self::with_timings(core, display, sound, Timings::default())
    }

    pub fn with_timings(core: C, display: D, sound: S, timings: Timings) -> Self {
        Self::from_parts(core, display, sound, timings)
    }
}

impl<C, D, S, W> Driver<C, D, S, W>
where
    C: EmulatorCore + Send + 'static,
    D: DisplayCommands + Send + 'static,
    S: SoundCommands + Send + 'static,
    W: TimedWorker,
{
    /// Will create a new driver using `W` for both schedules.
    pub fn from_parts(core: C, display: D, sound: S, timings: Timings) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new(core, display, sound))),
            cpu: W::new(),
            display: W::new(),
            timings,
        }
    }

    /// Will end the running session and start the given program.
    ///
    /// A program the device can not drive is refused, in that case the
    /// running session stays as it is.
    pub fn start(&mut self, program: Program) -> Result<(), DriverError> {
        let keys = KeyMapping::for_program(program).ok_or_else(|| {
            log::warn!("Refusing to start unsupported program '{}'", program);
            DriverError::UnsupportedProgram(program)
        })?;

        // the workers have to be gone before the lock is taken, as they
        // might wait for it themselves
        self.stop_workers();
        self.session.lock().begin(keys);

        let session = self.session.clone();
        self.cpu
            .start(move || session.lock().cpu_tick(), self.timings.cpu_interval);

        let session = self.session.clone();
        self.display.start(
            move || session.lock().display_tick(),
            self.timings.display_interval,
        );

        Ok(())
    }

    /// Will start the program with the given rom title.
    pub fn start_by_name(&mut self, name: &str) -> Result<(), DriverError> {
        let program = name.parse()?;
        self.start(program)
    }

    /// Will stop both schedules and release every key.
    pub fn stop(&mut self) {
        self.stop_workers();
        self.session.lock().end();
    }

    /// If the schedules are running.
    pub fn is_running(&self) -> bool {
        self.cpu.is_alive() && self.display.is_alive()
    }

    /// The running program.
    pub fn program(&self) -> Option<Program> {
        self.session.lock().program()
    }

    /// Will run a single cpu step.
    pub fn on_cpu_tick(&self) {
        self.session.lock().cpu_tick();
    }

    /// Will draw the screen if needed.
    pub fn on_display_tick(&self) {
        self.session.lock().display_tick();
    }

    pub fn on_discrete_gesture_begin(&self, input: PhysicalInput) {
        self.session.lock().gesture_begin(input);
    }

    pub fn on_discrete_gesture_end(&self, input: PhysicalInput) {
        self.session.lock().gesture_end(input);
    }

    /// A gesture without an end (e.g. a tap), its key will be released
    /// by the driver after the release delay.
    pub fn on_discrete_gesture(&self, input: PhysicalInput) {
        let mut session = self.session.lock();
        if let Some(id) = session.gesture_momentary(input) {
            let timer = Deferred::spawn(
                self.timings.release_delay,
                release_later(Arc::downgrade(&self.session), input, id),
            );
            session.arm(input, id, timer);
        }
    }

    /// The crown moved in the given direction.
    pub fn on_continuous_input_changed(&self, direction: CrownDirection, magnitude: f64) {
        self.session.lock().continuous_changed(direction, magnitude);
    }

    /// The crown moved by the signed delta, positive is up.
    pub fn on_crown_delta(&self, delta: f64) {
        let direction = if delta > 0.0 {
            CrownDirection::Positive
        } else {
            CrownDirection::Negative
        };
        self.on_continuous_input_changed(direction, delta.abs());
    }

    /// The crown stopped reporting.
    pub fn on_continuous_input_idle(&self) {
        self.session.lock().continuous_idle();
    }

    pub fn is_held(&self, key: VirtualKey) -> bool {
        self.session.lock().is_held(key)
    }

    pub fn held_keys(&self) -> Vec<VirtualKey> {
        self.session.lock().held_keys()
    }

    /// Will run the function with exclusive access to the core, e.g. to
    /// load a rom.
    pub fn with_core<F, R>(&self, func: F) -> R
    where
        F: FnOnce(&mut C) -> R,
    {
        func(self.session.lock().core_mut())
    }

    fn stop_workers(&mut self) {
        self.cpu.stop();
        self.display.stop();
    }
}

impl<C, D, S, W> Drop for Driver<C, D, S, W>
where
    C: EmulatorCore + Send + 'static,
    D: DisplayCommands + Send + 'static,
    S: SoundCommands + Send + 'static,
    W: TimedWorker,
{
    fn drop(&mut self) {
        self.stop();
    }
}

/// The callback of a synthetic release, it holds the session weakly so a
/// dropped driver is not kept alive by its timers.
fn release_later<C, D, S>(
    session: Weak<Mutex<Session<C, D, S>>>,
    input: PhysicalInput,
    id: u64,
) -> impl FnOnce() + Send + 'static
where
    C: EmulatorCore + Send + 'static,
    D: DisplayCommands + Send + 'static,
    S: SoundCommands + Send + 'static,
{
    move || {
        if let Some(session) = session.upgrade() {
            session.lock().synthetic_release(input, id);
        }
    }
}
