//! The per program input tables.
//!
//! Getting from a gesture to a keypad key happens in two stages:
//! the platform table says what the user meant with a given channel
//! (`PhysicalInput -> SemanticAction`), the semantic table says which
//! key the program expects for that intent (`SemanticAction -> VirtualKey`).
//! Supporting another device only requires another platform table,
//! changing the button layout of a program only its semantic table.
//!
//! Controls must fit into tap, long press, crown up and crown down.
//! A program requiring more than these four inputs is not playable on
//! the watch and is left out of the registry on purpose, it is never
//! given a partial mapping.
mod program;
mod registry;

pub use program::*;
pub use registry::*;

use std::hash::Hash;

use hashbrown::HashMap;

use crate::input::{PhysicalInput, SemanticAction, VirtualKey};

/// A partial table from one input vocabulary into another, every source
/// has at most a single target. A missing source means "no binding".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMapping<S, T>
where
    S: Eq + Hash,
{
    entries: HashMap<S, T>,
}

impl<S, T> InputMapping<S, T>
where
    S: Eq + Hash + Copy,
    T: Copy,
{
    /// Will generate a new mapping from the given pairs.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
    {
        let mut map = HashMap::new();
        for (source, target) in entries {
            let previous = map.insert(source, target);
            debug_assert!(previous.is_none(), "A source may only be bound once.");
        }
        Self { entries: map }
    }

    /// A mapping without any binding.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Will return the target bound to the source, if any.
    pub fn get(&self, source: S) -> Option<T> {
        self.entries.get(&source).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All the sources that have a binding, in no particular order.
    pub fn sources(&self) -> impl Iterator<Item = S> + '_ {
        self.entries.keys().copied()
    }
}

/// The full configuration of a single program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramMapping {
    /// What each of the device channels means for the program.
    pub platform: InputMapping<PhysicalInput, SemanticAction>,
    /// Which keypad key the program reads for each intent.
    pub semantic: InputMapping<SemanticAction, VirtualKey>,
}

#[cfg_attr(test, mockall::automock)]
/// The device specific stage, answers what a channel means for a program.
pub trait PlatformMappingService {
    /// If the device can drive the program at all.
    fn is_supported(&self, program: Program) -> bool;

    fn semantic_action(&self, program: Program, input: PhysicalInput) -> Option<SemanticAction>;
}

#[cfg_attr(test, mockall::automock)]
/// The program specific stage, answers which key belongs to an intent.
pub trait SemanticMappingService {
    fn virtual_key(&self, program: Program, action: SemanticAction) -> Option<VirtualKey>;
}

/// Will return all the programs the device is able to drive,
/// in catalog order.
pub fn supported_programs() -> Vec<Program> {
    supported_programs_with(Registry::global())
}

/// Same as [`supported_programs`] for the given platform stage.
pub fn supported_programs_with<P>(platform: &P) -> Vec<Program>
where
    P: PlatformMappingService + ?Sized,
{
    Program::ALL
        .iter()
        .copied()
        .filter(|&program| platform.is_supported(program))
        .collect()
}
