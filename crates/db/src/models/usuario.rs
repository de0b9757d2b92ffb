//! Login account model and DTOs.

use serde::Serialize;
use skillconnect_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `usuarios` table.
///
/// `contrasena_hash` is skipped during serialization and never leaves the server.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Usuario {
    pub id_usuario: DbId,
    pub correo: String,
    #[serde(skip_serializing)]
    pub contrasena_hash: String,
    pub activo: bool,
    pub id_perfil: DbId,
    pub created_at: Timestamp,
}

/// Ids produced by a registration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RegisteredUsuario {
    pub id_usuario: DbId,
    pub id_perfil: DbId,
}
