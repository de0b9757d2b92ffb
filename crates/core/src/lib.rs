//! Domain types, error taxonomy and validation rules shared by every
//! SkillConnect crate. Nothing in here performs I/O.

pub mod choice;
pub mod error;
pub mod fields;
pub mod geo;
pub mod habilidad;
pub mod persona;
pub mod storage;
pub mod types;
