//! # INI Calculator - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servicio de cálculo asíncrono del índice INI.

use ini_calculator::config::Config;
use ini_calculator::server::Server;

fn main() {
    println!("=================================");
    println!("  INI Calculator Service");
    println!("  Async biomarker index trigger");
    println!("=================================\n");

    // Crear configuración (CLI args + variables de entorno)
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // Crear el servidor
    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
