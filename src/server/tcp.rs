//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread; el cálculo INI corre aparte, en el thread detached que spawnea
//! el `JobRunner`.

use crate::api;
use crate::config::Config;
use crate::http::{Request, Response, StatusCode};
use crate::jobs::JobRunner;
use crate::router::Router;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Servidor HTTP/1.0 concurrente del servicio INI
pub struct Server {
    config: Config,
    router: Arc<Router>,
    runner: Arc<JobRunner>,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let mut router = Router::new();

        // Endpoints estáticos
        router.register("/health/", api::health_handler);
        router.register("/test/", api::test_handler);

        // El trigger se despacha explícitamente en handle_connection
        // porque necesita el JobRunner

        let runner = JobRunner::new(config.clone())
            .expect("Failed to initialize callback client");

        Self {
            config,
            router: Arc::new(router),
            runner: Arc::new(runner),
            listener: None,
        }
    }

    /// Hace bind del listener y retorna la dirección local
    ///
    /// Separado de `run` para que los tests puedan usar el puerto 0
    /// (efímero) y conocer el puerto real asignado.
    pub fn bind(&mut self) -> std::io::Result<SocketAddr> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)?;
        let local_addr = listener.local_addr()?;
        self.listener = Some(listener);
        Ok(local_addr)
    }

    pub fn run(&mut self) -> std::io::Result<()> {
        if self.listener.is_none() {
            self.bind()?;
        }
        let listener = self.listener.as_ref().unwrap();

        println!("[+] Servicio escuchando en {}", listener.local_addr()?);
        println!("[*] Modo concurrente: un thread por conexion\n");

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let runner = Arc::clone(&self.runner);

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, router, runner) {
                            eprintln!("   ❌ Error en thread: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Procesa una conexión completa: lee, parsea, despacha y responde
    ///
    /// Pública para que los tests de integración puedan ejercer el ciclo
    /// request/response con listeners efímeros.
    pub fn handle_connection(
        mut stream: TcpStream,
        router: Arc<Router>,
        runner: Arc<JobRunner>,
    ) -> std::io::Result<()> {
        let start = Instant::now();

        // Generar Request ID único
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        start.elapsed().as_nanos().hash(&mut hasher);
        thread::current().id().hash(&mut hasher);
        let request_id = format!("{:016x}", hasher.finish());

        let mut buffer = [0u8; 8192];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            return Ok(());
        }

        let response = match Request::parse(&buffer[..bytes_read]) {
            Ok(request) => {
                let path = request.path();
                println!("   ✅ {} {} [req_id: {}]", request.method().as_str(), path, &request_id[..8]);

                if path == "/calculate-ini/" || path == "/calculate-ini" {
                    api::calculate_handler(&request, &runner)
                } else {
                    router.route(&request)
                }
            }
            Err(e) => {
                println!("   ❌ Parse error: {}", e);
                Response::error(StatusCode::BadRequest, &format!("Invalid: {}", e))
            }
        };

        // Header de observabilidad
        let mut response = response;
        response.add_header("X-Request-Id", &request_id);

        let response_bytes = response.to_bytes();
        stream.write_all(&response_bytes)?;
        stream.flush()?;

        let latency = start.elapsed();
        println!("   ✅ {} ({:.2}ms)\n", response.status(), latency.as_secs_f64() * 1000.0);

        Ok(())
    }
}
