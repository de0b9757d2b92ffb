//! Persona enumerations, image slots and the shared field validator.

use crate::choice::{define_choice_enum, parse_optional};
use crate::error::CoreError;

define_choice_enum! {
    /// Gender as stored in `personas.genero_persona`.
    Genero ("gender") {
        Masculino => "Masculino",
        Femenino => "Femenino",
        Otro => "Otro",
    }
}

define_choice_enum! {
    /// Marital status as stored in `personas.estado_civil_persona`.
    EstadoCivil ("marital status") {
        Soltero => "Soltero",
        Casado => "Casado",
        Divorciado => "Divorciado",
        Viudo => "Viudo",
    }
}

define_choice_enum! {
    /// Identification document type.
    TipoIdentificacion ("identification type") {
        Dni => "DNI",
        Pasaporte => "Pasaporte",
    }
}

/// Enumerated persona fields after validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersonaChoices {
    pub genero: Option<Genero>,
    pub estado_civil: Option<EstadoCivil>,
    pub tipo_identificacion: Option<TipoIdentificacion>,
}

impl PersonaChoices {
    /// Validate the enumerated fields of a create or update payload.
    ///
    /// Absent fields stay absent; a present value outside its allow-list is a
    /// validation error no matter what the other fields contain.
    pub fn parse(
        genero: Option<&str>,
        estado_civil: Option<&str>,
        tipo_identificacion: Option<&str>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            genero: parse_optional(genero, Genero::from_name)?,
            estado_civil: parse_optional(estado_civil, EstadoCivil::from_name)?,
            tipo_identificacion: parse_optional(tipo_identificacion, TipoIdentificacion::from_name)?,
        })
    }
}

/// One of the four image references held by a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    /// Avatar (`imagenUrl`).
    Perfil,
    Galeria1,
    Galeria2,
    Galeria3,
}

impl ImageSlot {
    pub const ALL: [ImageSlot; 4] = [
        ImageSlot::Perfil,
        ImageSlot::Galeria1,
        ImageSlot::Galeria2,
        ImageSlot::Galeria3,
    ];

    /// Path segment used by the image endpoints.
    pub fn name(self) -> &'static str {
        match self {
            ImageSlot::Perfil => "perfil",
            ImageSlot::Galeria1 => "galeria1",
            ImageSlot::Galeria2 => "galeria2",
            ImageSlot::Galeria3 => "galeria3",
        }
    }

    /// Database column backing this slot.
    pub fn column(self) -> &'static str {
        match self {
            ImageSlot::Perfil => "imagen_url_persona",
            ImageSlot::Galeria1 => "imagen1_url_persona",
            ImageSlot::Galeria2 => "imagen2_url_persona",
            ImageSlot::Galeria3 => "imagen3_url_persona",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.name() == name)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown image slot '{name}'. Must be one of: perfil, galeria1, galeria2, galeria3"
                ))
            })
    }
}
