//! Composes both mapping stages into a single lookup from a gesture to a
//! keypad key.
//!
//! A missing binding in either stage, or a program without an entry,
//! resolves to `None`. This is not an error, programs ignore channels
//! they do not need.
use crate::{
    input::{PhysicalInput, VirtualKey},
    mapping::{PlatformMappingService, Program, Registry, SemanticMappingService},
};

/// Will resolve the input for the given program using the global registry.
pub fn resolve(input: PhysicalInput, program: Program) -> Option<VirtualKey> {
    let registry = Registry::global();
    resolve_with(registry, registry, input, program)
}

/// Will resolve the input with the given stages.
pub fn resolve_with<P, S>(
    platform: &P,
    semantic: &S,
    input: PhysicalInput,
    program: Program,
) -> Option<VirtualKey>
where
    P: PlatformMappingService + ?Sized,
    S: SemanticMappingService + ?Sized,
{
    let action = platform.semantic_action(program, input)?;
    semantic.virtual_key(program, action)
}

/// The already composed table of one program, used so that the driver
/// only needs a single lookup per gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapping {
    program: Program,
    keys: [Option<VirtualKey>; 4],
}

impl KeyMapping {
    /// Will build the table of the program from the global registry,
    /// `None` if the program is not supported.
    pub fn for_program(program: Program) -> Option<Self> {
        let registry = Registry::global();
        Self::with(registry, registry, program)
    }

    /// Will build the table of the program from the given stages.
    pub fn with<P, S>(platform: &P, semantic: &S, program: Program) -> Option<Self>
    where
        P: PlatformMappingService + ?Sized,
        S: SemanticMappingService + ?Sized,
    {
        if !platform.is_supported(program) {
            return None;
        }

        let mut keys = [None; 4];
        for (key, &input) in keys.iter_mut().zip(PhysicalInput::ALL.iter()) {
            *key = resolve_with(platform, semantic, input, program);
        }

        Some(Self { program, keys })
    }

    pub fn program(&self) -> Program {
        self.program
    }

    /// The key bound to the input, if any.
    pub fn get(&self, input: PhysicalInput) -> Option<VirtualKey> {
        self.keys[slot(input)]
    }
}

fn slot(input: PhysicalInput) -> usize {
    match input {
        PhysicalInput::Tap => 0,
        PhysicalInput::LongPress => 1,
        PhysicalInput::CrownUp => 2,
        PhysicalInput::CrownDown => 3,
    }
}
