pub mod auth;
pub mod categorias;
pub mod direcciones;
pub mod favoritos;
pub mod geolocalizacion;
pub mod habilidades;
pub mod historial;
pub mod personas;
pub mod profile;
pub mod upload;
