//! Row models and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row. JSON
//!   keys keep the column naming the profile editor already consumes
//!   (`nombre_Persona`, `tipoEstado_Habilidad`, ...).
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod categoria;
pub mod direccion;
pub mod favorito;
pub mod geolocalizacion;
pub mod habilidad;
pub mod historial;
pub mod pending_delete;
pub mod persona;
pub mod usuario;
