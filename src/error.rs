use thiserror::Error;

use crate::mapping::Program;

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum InputError {
    #[error("There is no keypad key with the code {0:#04X}.")]
    InvalidKey(u8),
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum MappingError {
    #[error("There is no program called '{0}'.")]
    UnknownProgram(String),
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum DriverError {
    #[error("The program '{0}' can not be driven with the available inputs.")]
    UnsupportedProgram(Program),
    #[error("Invalid program selection '{0}'.")]
    Mapping(#[from] MappingError),
}
