//! # Notificación del Resultado al Servicio Principal
//!
//! Implementa el callback saliente: un único POST con el resultado del
//! cálculo al endpoint del servicio principal, con timeout acotado.
//! Cualquier fallo (transporte o status != 200) se loggea y se descarta:
//! no hay retry, backoff ni dead-letter. El caller original ya recibió su
//! 202, así que el fallo del callback le es invisible.

use std::time::Duration;

use serde::Serialize;

use crate::config::Config;
use crate::jobs::types::ResearchId;

/// Path fijo del endpoint receptor en el servicio principal
pub const UPDATE_RESULT_PATH: &str = "/api/async/update-ini-result";

/// Payload del callback hacia el servicio principal
#[derive(Debug, Clone, Serialize)]
pub struct CallbackPayload {
    pub research_id: ResearchId,
    pub ini_result: f64,
    pub secret_key: String,
}

/// Errores del callback saliente
///
/// Siempre se loggean y se descartan; nunca se propagan al job thread.
#[derive(Debug)]
pub enum CallbackError {
    /// Error de transporte (DNS, conexión, timeout, etc.)
    Transport(String),

    /// El servicio principal respondió con status != 200
    UnexpectedStatus(u16, String),
}

impl std::fmt::Display for CallbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallbackError::Transport(reason) => {
                write!(f, "Error sending result to main service: {}", reason)
            }
            CallbackError::UnexpectedStatus(status, body) => {
                write!(f, "Failed to send result: {} - {}", status, body)
            }
        }
    }
}

impl std::error::Error for CallbackError {}

/// Cliente del callback hacia el servicio principal
pub struct CallbackNotifier {
    /// URL completa del endpoint receptor
    url: String,

    /// Secret compartido incluido en el payload
    secret_key: String,

    /// Cliente HTTP con timeout acotado, reutilizado entre jobs
    client: reqwest::blocking::Client,
}

impl CallbackNotifier {
    /// Crea el notificador a partir de la configuración
    pub fn new(config: &Config) -> Result<Self, CallbackError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.callback_timeout_ms))
            .build()
            .map_err(|e| CallbackError::Transport(e.to_string()))?;

        Ok(Self {
            url: format!("{}{}", config.main_service_url, UPDATE_RESULT_PATH),
            secret_key: config.secret_key.clone(),
            client,
        })
    }

    /// URL destino del callback
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Envía el resultado exitoso al servicio principal
    ///
    /// Un solo intento: status 200 es éxito, cualquier otra cosa es error.
    pub fn send(&self, research_id: &ResearchId, ini_result: f64) -> Result<(), CallbackError> {
        let payload = CallbackPayload {
            research_id: research_id.clone(),
            ini_result,
            secret_key: self.secret_key.clone(),
        };

        println!("📤 Sending result to: {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .map_err(|e| CallbackError::Transport(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 200 {
            println!(
                "📤 Successfully sent INI result to main service for research {}",
                research_id
            );
            Ok(())
        } else {
            let body = response.text().unwrap_or_default();
            Err(CallbackError::UnexpectedStatus(status.as_u16(), body))
        }
    }
}
