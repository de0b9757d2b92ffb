//! One zero-sized repository per table.
//!
//! Every method takes the pool explicitly; callers own connection lifetime.

pub mod categoria_repo;
pub mod direccion_repo;
pub mod favorito_repo;
pub mod geolocalizacion_repo;
pub mod habilidad_repo;
pub mod historial_repo;
pub mod pending_delete_repo;
pub mod persona_repo;
pub mod usuario_repo;

pub use categoria_repo::CategoriaRepo;
pub use direccion_repo::DireccionRepo;
pub use favorito_repo::FavoritoRepo;
pub use geolocalizacion_repo::GeolocalizacionRepo;
pub use habilidad_repo::HabilidadRepo;
pub use historial_repo::HistorialRepo;
pub use pending_delete_repo::PendingDeleteRepo;
pub use persona_repo::PersonaRepo;
pub use usuario_repo::UsuarioRepo;
