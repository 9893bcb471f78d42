use hashbrown::{HashMap, HashSet};

use crate::{
    devices::{DisplayCommands, EmulatorCore, SoundCommands},
    input::{CrownDirection, PhysicalInput, VirtualKey},
    mapping::Program,
    resolver::KeyMapping,
    timer::Deferred,
};

/// A release the driver owes to a gesture without a release signal.
#[derive(Debug)]
struct Pending {
    /// Identifies the gesture, a release only counts for the gesture
    /// that armed it.
    id: u64,
    /// Dropping the timer cancels it.
    timer: Option<Deferred>,
}

/// The state of the running program together with everything it talks to.
///
/// Every call into the emulator core goes through here, so wrapping the
/// session into a single lock is all the serialization the core needs.
pub struct Session<C, D, S>
where
    C: EmulatorCore,
    D: DisplayCommands,
    S: SoundCommands,
{
    core: C,
    display: D,
    sound: S,
    /// The composed mapping of the active program, `None` while no
    /// program is running.
    keys: Option<KeyMapping>,
    /// Exactly the keys the core currently sees as pressed.
    held: HashSet<VirtualKey>,
    /// The synthetic releases waiting to fire per channel.
    pending: HashMap<PhysicalInput, Pending>,
    /// Source of the pending ids, never reset so that ids stay unique over
    /// all sessions.
    generation: u64,
}

impl<C, D, S> Session<C, D, S>
where
    C: EmulatorCore,
    D: DisplayCommands,
    S: SoundCommands,
{
    pub fn new(core: C, display: D, sound: S) -> Self {
        Self {
            core,
            display,
            sound,
            keys: None,
            held: HashSet::new(),
            pending: HashMap::new(),
            generation: 0,
        }
    }

    /// Will end the current program and install the mapping of the next.
    pub fn begin(&mut self, keys: KeyMapping) {
        self.end();
        log::info!("Starting session for '{}'", keys.program());
        self.keys = Some(keys);
    }

    /// Will cancel every pending release and release every held key.
    pub fn end(&mut self) {
        if let Some(keys) = self.keys.take() {
            log::info!("Ending session for '{}'", keys.program());
        }
        self.pending.clear();
        self.release_all();
    }

    pub fn program(&self) -> Option<Program> {
        self.keys.map(|keys| keys.program())
    }

    /// Will advance the core by a single step and forward a requested beep.
    pub fn cpu_tick(&mut self) {
        self.core.cycle();

        if self.core.should_play_sound() {
            self.sound.play();
            self.core.set_should_play_sound(false);
        }
    }

    /// Will draw the screen, if it changed since the last draw.
    pub fn display_tick(&mut self) {
        if !self.core.needs_redraw() {
            return;
        }

        self.display.display(self.core.screen());
        self.core.set_needs_redraw(false);
    }

    /// The gesture started, its key stays down until the gesture ends.
    pub fn gesture_begin(&mut self, input: PhysicalInput) {
        self.press_input(input);
    }

    pub fn gesture_end(&mut self, input: PhysicalInput) {
        self.release_input(input);
    }

    /// Will press the key of a gesture that will never report its end.
    /// Returns the id the synthetic release has to present, `None` if the
    /// input is not bound.
    pub fn gesture_momentary(&mut self, input: PhysicalInput) -> Option<u64> {
        let key = self.resolve(input)?;

        // supersedes the release of an earlier gesture
        self.pending.remove(&input);
        self.press(key);

        self.generation += 1;
        let id = self.generation;
        self.pending.insert(input, Pending { id, timer: None });
        Some(id)
    }

    /// Will attach the timer to the pending release with the given id.
    /// If the release is no longer pending, the timer gets cancelled.
    pub fn arm(&mut self, input: PhysicalInput, id: u64, timer: Deferred) {
        match self.pending.get_mut(&input) {
            Some(pending) if pending.id == id => pending.timer = Some(timer),
            _ => timer.cancel(),
        }
    }

    /// Will release the key of a momentary gesture, as long as the gesture
    /// was not superseded since. Returns if a release happened.
    pub fn synthetic_release(&mut self, input: PhysicalInput, id: u64) -> bool {
        match self.pending.get(&input) {
            Some(pending) if pending.id == id => {}
            _ => {
                log::trace!("Dropping cancelled release {} of {:?}", id, input);
                return false;
            }
        }

        self.pending.remove(&input);
        if let Some(key) = self.resolve(input) {
            log::debug!("Synthetic release of {:?}", input);
            self.release(key);
        }
        true
    }

    /// The crown was turned in the direction. The key of the opposite
    /// direction is always released before the new one is pressed, so
    /// both never read as held at the same time.
    pub fn continuous_changed(&mut self, direction: CrownDirection, magnitude: f64) {
        // a resting crown looks exactly like a crown that was never touched
        if magnitude == 0.0 || !magnitude.is_finite() {
            log::trace!("Ignoring crown reading {}", magnitude);
            return;
        }

        self.release_input(direction.opposite().input());
        self.press_input(direction.input());
    }

    /// The crown stopped, nothing may stay pressed.
    pub fn continuous_idle(&mut self) {
        self.release_input(CrownDirection::Positive.input());
        self.release_input(CrownDirection::Negative.input());
    }

    pub fn is_held(&self, key: VirtualKey) -> bool {
        self.held.contains(&key)
    }

    /// Will return the held keys ordered by their key code.
    pub fn held_keys(&self) -> Vec<VirtualKey> {
        let mut keys: Vec<_> = self.held.iter().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn core(&self) -> &C {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut C {
        &mut self.core
    }

    fn resolve(&self, input: PhysicalInput) -> Option<VirtualKey> {
        let key = self.keys.as_ref()?.get(input);
        if key.is_none() {
            log::trace!("{:?} is not bound", input);
        }
        key
    }

    fn press_input(&mut self, input: PhysicalInput) {
        self.pending.remove(&input);
        if let Some(key) = self.resolve(input) {
            self.press(key);
        }
    }

    fn release_input(&mut self, input: PhysicalInput) {
        self.pending.remove(&input);
        if let Some(key) = self.resolve(input) {
            self.release(key);
        }
    }

    fn press(&mut self, key: VirtualKey) {
        if self.held.insert(key) {
            log::debug!("Key {} down", key);
            self.core.handle_key_down(key);
        }
    }

    fn release(&mut self, key: VirtualKey) {
        if self.held.remove(&key) {
            log::debug!("Key {} up", key);
            self.core.handle_key_up(key);
        }
    }

    fn release_all(&mut self) {
        for key in self.held_keys() {
            self.release(key);
        }
    }
}
