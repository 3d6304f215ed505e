//! # INI Calculator Service
//! src/lib.rs
//!
//! Microservicio HTTP que dispara el cálculo asíncrono simulado del índice
//! INI (0-100) a partir de biomarcadores, y reporta el resultado a un
//! servicio principal mediante un callback saliente.
//!
//! ## Arquitectura
//!
//! El servicio está dividido en módulos especializados:
//! - `http`: Parsing y manejo del protocolo HTTP/1.0
//! - `config`: Configuración por CLI y variables de entorno
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `router`: Enrutamiento de peticiones GET estáticas a handlers
//! - `api`: Handlers de los endpoints (calculate, health, test)
//! - `ini`: Dominio del índice: tabla de referencia, generador y estimador
//! - `jobs`: Ejecución fire-and-forget del cálculo en background
//! - `callback`: Notificación del resultado al servicio principal
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use ini_calculator::server::Server;
//! use ini_calculator::config::Config;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod http;
pub mod config;
pub mod server;
pub mod router;
pub mod api;
pub mod ini;
pub mod jobs;
pub mod callback;
