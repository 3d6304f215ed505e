//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes (un thread por conexión)
//! 3. Lee y parsea requests HTTP
//! 4. Despacha al trigger asíncrono o al router de endpoints estáticos

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
