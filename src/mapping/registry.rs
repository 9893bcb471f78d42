use hashbrown::HashMap;
use once_cell::sync::Lazy;

use super::{InputMapping, PlatformMappingService, Program, ProgramMapping, SemanticMappingService};
use crate::input::{
    PhysicalInput::{self, CrownDown, CrownUp, LongPress, Tap},
    SemanticAction::{self, Down, Left, Primary, Right, Secondary, Up},
    VirtualKey::{self, *},
};

/// The process wide registry, build on first usage and never changed after.
static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Holds the mapping of every program the watch can drive.
#[derive(Debug)]
pub struct Registry {
    programs: HashMap<Program, ProgramMapping>,
}

impl Registry {
    /// Will return the shared registry.
    pub fn global() -> &'static Registry {
        &REGISTRY
    }

    fn new() -> Self {
        let programs = TABLE
            .iter()
            .map(|(program, platform, semantic)| {
                let mapping = ProgramMapping {
                    platform: InputMapping::new(platform.iter().copied()),
                    semantic: InputMapping::new(semantic.iter().copied()),
                };
                (*program, mapping)
            })
            .collect();

        Self { programs }
    }

    /// Will return both stages of the given program.
    pub fn mapping(&self, program: Program) -> Option<&ProgramMapping> {
        self.programs.get(&program)
    }

    /// The physical to semantic table of the program.
    pub fn platform_mapping(
        &self,
        program: Program,
    ) -> Option<&InputMapping<PhysicalInput, SemanticAction>> {
        self.mapping(program).map(|mapping| &mapping.platform)
    }

    /// The semantic to keypad table of the program.
    pub fn semantic_mapping(
        &self,
        program: Program,
    ) -> Option<&InputMapping<SemanticAction, VirtualKey>> {
        self.mapping(program).map(|mapping| &mapping.semantic)
    }
}

impl PlatformMappingService for Registry {
    fn is_supported(&self, program: Program) -> bool {
        self.platform_mapping(program).is_some()
    }

    fn semantic_action(&self, program: Program, input: PhysicalInput) -> Option<SemanticAction> {
        self.platform_mapping(program)?.get(input)
    }
}

impl SemanticMappingService for Registry {
    fn virtual_key(&self, program: Program, action: SemanticAction) -> Option<VirtualKey> {
        self.semantic_mapping(program)?.get(action)
    }
}

type PlatformEntries = &'static [(PhysicalInput, SemanticAction)];
type SemanticEntries = &'static [(SemanticAction, VirtualKey)];

/// One dimension of movement on the crown.
const HORIZONTAL: PlatformEntries = &[(CrownDown, Left), (CrownUp, Right)];
/// One dimension of movement on the crown with a single action.
const HORIZONTAL_ACTION: PlatformEntries = &[(Tap, Primary), (CrownDown, Left), (CrownUp, Right)];
/// A single action.
const ACTION: PlatformEntries = &[(Tap, Primary)];
const NONE: PlatformEntries = &[];

/// The used keys per program, programs missing here are not supported.
const TABLE: &[(Program, PlatformEntries, SemanticEntries)] = &[
    (Program::Chip8Picture, NONE, &[]),
    (Program::Airplane, ACTION, &[(Primary, Key8)]),
    (
        Program::AstroDodge,
        HORIZONTAL_ACTION,
        &[(Primary, Key5), (Left, Key4), (Right, Key6)],
    ),
    (Program::Breakout, HORIZONTAL, &[(Left, Key4), (Right, Key6)]),
    (Program::Filter, HORIZONTAL, &[(Left, Key4), (Right, Key6)]),
    (Program::Landing, ACTION, &[(Primary, Key8)]),
    (
        Program::LunarLander,
        HORIZONTAL_ACTION,
        &[(Primary, Key2), (Left, Key4), (Right, Key6)],
    ),
    (Program::Maze, NONE, &[]),
    (Program::Missile, ACTION, &[(Primary, Key8)]),
    (
        Program::Pong,
        &[(CrownDown, Down), (CrownUp, Up)],
        &[(Down, Key4), (Up, Key1)],
    ),
    (Program::Rocket, ACTION, &[(Primary, KeyF)]),
    (
        Program::SpaceInvaders,
        HORIZONTAL_ACTION,
        &[(Primary, Key5), (Left, Key4), (Right, Key6)],
    ),
    (
        Program::Tetris,
        &[
            (LongPress, Secondary),
            (Tap, Primary),
            (CrownDown, Left),
            (CrownUp, Right),
        ],
        &[(Secondary, Key7), (Primary, Key4), (Left, Key5), (Right, Key6)],
    ),
    (Program::WipeOff, HORIZONTAL, &[(Left, Key4), (Right, Key6)]),
];
