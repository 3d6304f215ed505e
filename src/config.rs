//! # Configuración del Servicio
//! src/config.rs
//!
//! Este módulo define la configuración del servicio con soporte completo
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./ini_calculator --port 8082 \
//!   --main-service-url http://localhost:8081 \
//!   --delay-min-ms 5000 \
//!   --delay-max-ms 10000
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8082 MAIN_SERVICE_URL=http://main:8081 ./ini_calculator
//! ```

use clap::Parser;

/// Configuración del servicio de cálculo INI
#[derive(Debug, Clone, Parser)]
#[command(name = "ini_calculator")]
#[command(about = "Servicio HTTP asíncrono para el cálculo simulado del índice INI")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servicio
    #[arg(short, long, default_value = "8082", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    // === Callback al servicio principal ===

    /// URL base del servicio principal que recibe el resultado
    #[arg(long = "main-service-url", default_value = "http://localhost:8081", env = "MAIN_SERVICE_URL")]
    pub main_service_url: String,

    /// Secret compartido: valida el trigger entrante y firma el callback
    #[arg(long = "secret-key", default_value = "nutriscan_async_key_2024", env = "MAIN_SERVICE_SECRET")]
    pub secret_key: String,

    /// Timeout del POST de callback en milisegundos
    #[arg(long = "callback-timeout-ms", default_value = "10000", env = "CALLBACK_TIMEOUT_MS")]
    pub callback_timeout_ms: u64,

    // === Simulación del cálculo ===

    /// Delay artificial mínimo del cálculo en milisegundos
    #[arg(long = "delay-min-ms", default_value = "5000", env = "INI_DELAY_MIN_MS")]
    pub delay_min_ms: u64,

    /// Delay artificial máximo del cálculo en milisegundos
    #[arg(long = "delay-max-ms", default_value = "10000", env = "INI_DELAY_MAX_MS")]
    pub delay_max_ms: u64,

    /// Probabilidad de fallo simulado del cálculo (0.0 - 1.0)
    #[arg(long = "failure-rate", default_value = "0.1", env = "INI_FAILURE_RATE")]
    pub failure_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8082,
            host: "127.0.0.1".to_string(),
            main_service_url: "http://localhost:8081".to_string(),
            secret_key: "nutriscan_async_key_2024".to_string(),
            callback_timeout_ms: 10_000,
            delay_min_ms: 5_000,
            delay_max_ms: 10_000,
            failure_rate: 0.1,
        }
    }
}

impl Config {
    /// Crea la configuración parseando CLI args y variables de entorno
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use ini_calculator::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8082");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Ventana de delay estimado que se anuncia en la respuesta 202
    ///
    /// # Ejemplo
    /// ```rust
    /// use ini_calculator::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.estimated_delay(), "5-10 seconds");
    /// ```
    pub fn estimated_delay(&self) -> String {
        format!(
            "{}-{} seconds",
            self.delay_min_ms / 1000,
            self.delay_max_ms / 1000
        )
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.secret_key.is_empty() {
            return Err("Secret key must not be empty".to_string());
        }

        if self.main_service_url.is_empty() {
            return Err("Main service URL must not be empty".to_string());
        }

        if self.delay_min_ms > self.delay_max_ms {
            return Err("Delay min must be <= delay max".to_string());
        }

        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err("Failure rate must be between 0.0 and 1.0".to_string());
        }

        if self.callback_timeout_ms == 0 {
            return Err("Callback timeout must be > 0".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("⚙️  Configuración:");
        println!("   Address:          {}", self.address());
        println!("   Main service:     {}", self.main_service_url);
        println!("   Callback timeout: {} ms", self.callback_timeout_ms);
        println!("   Delay window:     {}-{} ms", self.delay_min_ms, self.delay_max_ms);
        println!("   Failure rate:     {:.0}%", self.failure_rate * 100.0);
        println!();
    }
}
