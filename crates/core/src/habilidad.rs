//! Skill direction tag.

use crate::choice::define_choice_enum;

define_choice_enum! {
    /// Whether a persona offers or needs a skill.
    TipoEstado ("skill direction") {
        Ofrece => "Ofrece",
        Necesita => "Necesita",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_two_directions_exist() {
        assert_eq!(TipoEstado::from_name("Ofrece").unwrap(), TipoEstado::Ofrece);
        assert_eq!(TipoEstado::from_name("Necesita").unwrap(), TipoEstado::Necesita);
        assert!(TipoEstado::from_name("Vende").is_err());
        assert!(TipoEstado::from_name("").is_err());
    }

    #[test]
    fn serializes_as_wire_text() {
        let json = serde_json::to_string(&TipoEstado::Necesita).unwrap();
        assert_eq!(json, "\"Necesita\"");
    }
}
