//! Tests de integración end-to-end del servicio INI
//! tests/integration_test.rs
//!
//! Levantan el servidor completo en un puerto efímero y un "servicio
//! principal" falso que captura el callback saliente. Los delays se
//! configuran en milisegundos para no dormir 5-10 segundos reales.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use ini_calculator::config::Config;
use ini_calculator::server::Server;

const SECRET: &str = "nutriscan_async_key_2024";

/// Config de test: puerto efímero, delays cortos
fn test_config(main_service_url: &str, failure_rate: f64) -> Config {
    Config {
        port: 0,
        delay_min_ms: 30,
        delay_max_ms: 80,
        failure_rate,
        main_service_url: main_service_url.to_string(),
        callback_timeout_ms: 1_000,
        ..Config::default()
    }
}

/// Levanta el servicio completo y retorna su dirección
fn start_service(config: Config) -> SocketAddr {
    let mut server = Server::new(config);
    let addr = server.bind().expect("bind service");
    thread::spawn(move || {
        let _ = server.run();
    });
    addr
}

/// Servicio principal falso: acepta conexiones, responde 200 y reporta
/// cada request recibido por el canal
fn start_mock_main_service() -> (SocketAddr, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock");
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let request = read_http_request(&mut stream);
            let _ = stream.write_all(
                b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
            let _ = stream.flush();
            if tx.send(request).is_err() {
                break;
            }
        }
    });

    (addr, rx)
}

/// Lee un request HTTP completo (headers + body según Content-Length)
fn read_http_request(stream: &mut TcpStream) -> String {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    loop {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                data.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&data).to_string();
                if let Some(pos) = text.find("\r\n\r\n") {
                    let content_length = text[..pos]
                        .lines()
                        .find_map(|line| {
                            line.to_ascii_lowercase()
                                .strip_prefix("content-length:")
                                .and_then(|v| v.trim().parse::<usize>().ok())
                        })
                        .unwrap_or(0);
                    if data.len() >= pos + 4 + content_length {
                        break;
                    }
                }
            }
            Err(_) => break,
        }
    }

    String::from_utf8_lossy(&data).to_string()
}

/// Helper: envía un request crudo al servicio y retorna la response
fn send_request(addr: SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).expect("connect service");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();

    stream.write_all(raw.as_bytes()).unwrap();
    stream.flush().unwrap();
    stream.shutdown(std::net::Shutdown::Write).unwrap();

    let mut response = String::new();
    let _ = stream.read_to_string(&mut response);
    response
}

fn post_calculate(addr: SocketAddr, body: &str) -> String {
    let raw = format!(
        "POST /calculate-ini/ HTTP/1.0\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );
    send_request(addr, &raw)
}

#[test]
fn test_trigger_returns_202_and_sends_exactly_one_callback() {
    let (mock_addr, callbacks) = start_mock_main_service();
    let service_addr = start_service(test_config(
        &format!("http://{}", mock_addr),
        0.0, // éxito garantizado: debe haber callback
    ));

    let body = format!(
        r#"{{"research_id": 42, "biomarker_ids": [1, 2, 3], "secret_key": "{}"}}"#,
        SECRET
    );

    let start = Instant::now();
    let response = post_calculate(service_addr, &body);

    // El 202 llega sin esperar el delay del cálculo
    assert!(start.elapsed() < Duration::from_secs(2), "trigger blocked on the delay");
    assert!(response.contains("202 Accepted"), "got: {}", response);
    assert!(response.contains("processing"));

    // Exactamente un intento de callback, con el research_id correlacionado
    let callback = callbacks
        .recv_timeout(Duration::from_secs(5))
        .expect("no callback received");

    assert!(callback.contains("POST /api/async/update-ini-result"), "got: {}", callback);
    assert!(callback.contains("\"research_id\":42"), "got: {}", callback);
    assert!(callback.contains("\"ini_result\":"));
    assert!(callback.contains(SECRET));

    // Sin retry: no llega un segundo intento
    assert!(
        callbacks.recv_timeout(Duration::from_millis(500)).is_err(),
        "unexpected second callback attempt"
    );
}

#[test]
fn test_failed_calculation_sends_no_callback() {
    let (mock_addr, callbacks) = start_mock_main_service();
    let service_addr = start_service(test_config(
        &format!("http://{}", mock_addr),
        1.0, // fallo garantizado: no debe haber callback
    ));

    let body = format!(
        r#"{{"research_id": 7, "biomarker_ids": [1], "secret_key": "{}"}}"#,
        SECRET
    );
    let response = post_calculate(service_addr, &body);
    assert!(response.contains("202 Accepted"));

    // El fallo solo se observa por la ausencia del callback
    assert!(
        callbacks.recv_timeout(Duration::from_millis(800)).is_err(),
        "failed calculation must not send a callback"
    );
}

#[test]
fn test_callback_failure_is_invisible_to_the_service() {
    // Main service inalcanzable: el callback falla, el servicio sigue vivo
    let service_addr = start_service(test_config("http://127.0.0.1:9", 0.0));

    let body = format!(
        r#"{{"research_id": 9, "biomarker_ids": [1, 2], "secret_key": "{}"}}"#,
        SECRET
    );
    let response = post_calculate(service_addr, &body);
    assert!(response.contains("202 Accepted"));

    // Dar tiempo a que el job termine e intente el callback
    thread::sleep(Duration::from_millis(400));

    let health = send_request(service_addr, "GET /health/ HTTP/1.0\r\n\r\n");
    assert!(health.contains("200 OK"), "service died after callback failure");
    assert!(health.contains("healthy"));
}

#[test]
fn test_validation_over_the_full_server() {
    let service_addr = start_service(test_config("http://127.0.0.1:9", 1.0));

    // research_id ausente
    let response = post_calculate(
        service_addr,
        &format!(r#"{{"biomarker_ids": [1], "secret_key": "{}"}}"#, SECRET),
    );
    assert!(response.contains("400 Bad Request"));
    assert!(response.contains("research_id is required"));

    // biomarker_ids vacío
    let response = post_calculate(
        service_addr,
        &format!(r#"{{"research_id": 1, "biomarker_ids": [], "secret_key": "{}"}}"#, SECRET),
    );
    assert!(response.contains("400 Bad Request"));
    assert!(response.contains("biomarker_ids is required"));

    // Secret inválido
    let response = post_calculate(
        service_addr,
        r#"{"research_id": 1, "biomarker_ids": [1], "secret_key": "wrong"}"#,
    );
    assert!(response.contains("401 Unauthorized"));

    // JSON malformado
    let response = post_calculate(service_addr, "{broken");
    assert!(response.contains("400 Bad Request"));
    assert!(response.contains("Invalid JSON"));
}

#[test]
fn test_static_endpoints() {
    let service_addr = start_service(test_config("http://127.0.0.1:9", 1.0));

    let health = send_request(service_addr, "GET /health/ HTTP/1.0\r\n\r\n");
    assert!(health.contains("200 OK"));
    assert!(health.contains("healthy"));
    assert!(health.contains("INI Calculator Service"));

    let test = send_request(service_addr, "GET /test/ HTTP/1.0\r\n\r\n");
    assert!(test.contains("200 OK"));
    assert!(test.contains("calculate_ini"));

    let missing = send_request(service_addr, "GET /nope HTTP/1.0\r\n\r\n");
    assert!(missing.contains("404 Not Found"));
}
