//! # Ejecutor Fire-and-Forget del Cálculo
//! src/jobs/runner.rs
//!
//! Ejecuta el cálculo del índice INI en un thread detached por trigger:
//! no hay pool, ni cola, ni límite de jobs en vuelo, y no se retiene
//! ningún handle. El caller no puede consultar estado, cancelar ni
//! esperar: los estados terminales solo se observan por el callback.
//! El shutdown del proceso puede abandonar jobs en vuelo sin completar
//! su callback (contrato de no-durabilidad).

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::callback::CallbackNotifier;
use crate::config::Config;
use crate::ini::{calculate_ini_index, generate_simulated_readings, round2};
use crate::jobs::types::{CalculationJob, CalculationRequest, CalculationResult};

/// Ejecutor de jobs de cálculo en background
pub struct JobRunner {
    /// Configuración del servicio (delay, failure rate, secret)
    config: Config,

    /// Notificador del callback, compartido entre job threads
    notifier: Arc<CallbackNotifier>,
}

impl JobRunner {
    /// Crea el runner con su notificador de callback
    pub fn new(config: Config) -> Result<Self, crate::callback::CallbackError> {
        let notifier = Arc::new(CallbackNotifier::new(&config)?);
        Ok(Self { config, notifier })
    }

    /// Configuración con la que corre el servicio
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Dispara el cálculo en un thread detached y retorna de inmediato
    ///
    /// El handle del thread se descarta a propósito: el contrato es
    /// fire-and-forget.
    pub fn trigger(&self, request: CalculationRequest) {
        let config = self.config.clone();
        let notifier = Arc::clone(&self.notifier);

        thread::spawn(move || {
            let mut rng = StdRng::from_entropy();
            let mut job = CalculationJob::new(request);
            Self::execute(&mut job, &config, &notifier, &mut rng);
        });
    }

    /// Ejecuta un job completo: delay, datos simulados, índice, roll de
    /// fallo y callback
    ///
    /// Entry point síncrono con rng inyectado para que los tests corran
    /// con delays de milisegundos y semilla fija.
    pub fn execute<R: Rng>(
        job: &mut CalculationJob,
        config: &Config,
        notifier: &CallbackNotifier,
        rng: &mut R,
    ) -> CalculationResult {
        println!("🚀 Starting INI calculation for research {}...", job.request.research_id);
        job.mark_running();

        // Delay artificial que simula la latencia del cálculo real
        let delay_ms = rng.gen_range(config.delay_min_ms..=config.delay_max_ms);
        thread::sleep(Duration::from_millis(delay_ms));
        let delay_seconds = round2(delay_ms as f64 / 1000.0);

        let readings = generate_simulated_readings(&job.request.biomarker_ids, rng);
        let ini_result = calculate_ini_index(&readings, rng);

        // Roll de fallo independiente del índice calculado
        let success = rng.gen::<f64>() > config.failure_rate;

        let result = if success {
            job.mark_succeeded();
            CalculationResult::succeeded(ini_result, delay_seconds)
        } else {
            job.mark_failed();
            CalculationResult::failed(delay_seconds)
        };

        println!(
            "✅ INI calculation completed for research {}: success={}, delay={}s",
            job.request.research_id, result.success, result.delay_seconds
        );

        // El callback solo se envía en éxito; su fallo se loggea y se
        // descarta sin afectar al job thread
        if let Some(ini_result) = result.ini_result {
            if let Err(e) = notifier.send(&job.request.research_id, ini_result) {
                eprintln!("❌ {}", e);
            }
        } else {
            println!(
                "⚠️  Calculation failed for research {}, not sending result",
                job.request.research_id
            );
        }

        result
    }
}
