//! # Parsing de Requests HTTP/1.0
//! src/http/request.rs
//!
//! Este módulo implementa un parser HTTP/1.0 desde cero.
//!
//! ## Formato de un Request HTTP/1.0
//!
//! ```text
//! POST /calculate-ini/ HTTP/1.0\r\n
//! Host: localhost:8082\r\n
//! Content-Type: application/json\r\n
//! \r\n
//! {"research_id": 42, ...}
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path HTTP/1.0`
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: JSON del trigger (solo en POST)

use std::collections::HashMap;

/// Métodos HTTP soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Endpoints estáticos (health, test)
    GET,

    /// POST - Trigger del cálculo asíncrono
    POST,
}

impl Method {
    /// Parsea un método HTTP desde un string
    ///
    /// # Errores
    ///
    /// Retorna error si el método no es soportado
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

/// Representa un request HTTP/1.0 parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET, POST)
    method: Method,

    /// Path de la petición (ej: "/calculate-ini/")
    path: String,

    /// Headers HTTP (ej: {"Content-Type": "application/json"})
    headers: HashMap<String, String>,

    /// Versión HTTP (debe ser "HTTP/1.0" o "HTTP/1.1")
    version: String,

    /// Body del request para métodos POST
    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request incompleto o truncado
    IncompleteRequest,

    /// Formato inválido de la request line
    InvalidRequestLine,

    /// Método HTTP no soportado
    UnsupportedMethod(String),

    /// Versión HTTP incorrecta (debe ser HTTP/1.0 o HTTP/1.1)
    InvalidHttpVersion(String),

    /// Header malformado
    InvalidHeader(String),

    /// Request vacío
    EmptyRequest,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncompleteRequest => write!(f, "Incomplete HTTP request"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::UnsupportedMethod(m) => write!(f, "Unsupported HTTP method: {}", m),
            ParseError::InvalidHttpVersion(v) => write!(f, "Invalid HTTP version: {}", v),
            ParseError::InvalidHeader(h) => write!(f, "Invalid header: {}", h),
            ParseError::EmptyRequest => write!(f, "Empty request"),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea un request HTTP/1.0 desde bytes
    ///
    /// # Argumentos
    ///
    /// * `buffer` - Buffer conteniendo el request HTTP completo
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request parseado exitosamente
    /// * `Err(ParseError)` - Error durante el parsing
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use ini_calculator::http::Request;
    ///
    /// let raw = b"GET /health/ HTTP/1.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/health/");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Convertir a string (validando que sea UTF-8 válido)
        let request_str = std::str::from_utf8(buffer)
            .map_err(|_| ParseError::InvalidRequestLine)?;

        if request_str.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // Separar por \r\n para obtener líneas
        let lines: Vec<&str> = request_str.split("\r\n").collect();

        if lines.is_empty() {
            return Err(ParseError::IncompleteRequest);
        }

        // 1. Parsear la request line (primera línea)
        let (method, path, version) = Self::parse_request_line(lines[0])?;

        // 2. Parsear headers (resto de líneas hasta encontrar línea vacía)
        let headers = Self::parse_headers(&lines[1..])?;

        // 3. Parsear body (solo POST)
        let body = Self::parse_body(&lines, method);

        Ok(Request {
            method,
            path,
            headers,
            version,
            body,
        })
    }

    /// Parsea la request line (primera línea del request)
    ///
    /// Formato: `POST /path HTTP/1.0`
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        // Debe tener exactamente 3 partes: METHOD PATH VERSION
        if parts.len() != 3 {
            return Err(ParseError::InvalidRequestLine);
        }

        // Parsear método
        let method = Method::from_str(parts[0])?;

        // El servicio no usa query parameters: si vienen, se descartan del path
        let path = match parts[1].find('?') {
            Some(pos) => parts[1][..pos].to_string(),
            None => parts[1].to_string(),
        };

        // Validar versión HTTP
        let version = parts[2].to_string();
        if version != "HTTP/1.0" && version != "HTTP/1.1" {
            return Err(ParseError::InvalidHttpVersion(version));
        }

        Ok((method, path, version))
    }

    /// Parsea los headers HTTP
    ///
    /// Cada header tiene formato: "Name: Value"
    fn parse_headers(lines: &[&str]) -> Result<HashMap<String, String>, ParseError> {
        let mut headers = HashMap::new();

        for line in lines {
            // La línea vacía marca el fin de los headers
            if line.trim().is_empty() {
                break;
            }

            // Buscar el separador ':'
            if let Some(colon_pos) = line.find(':') {
                let name = line[..colon_pos].trim().to_string();
                let value = line[colon_pos + 1..].trim().to_string();
                headers.insert(name, value);
            } else {
                // Header sin ':' es inválido
                return Err(ParseError::InvalidHeader(line.to_string()));
            }
        }

        Ok(headers)
    }

    /// Parsea el cuerpo del request
    fn parse_body(lines: &[&str], method: Method) -> Vec<u8> {
        if method != Method::POST {
            return Vec::new();
        }

        let mut body_start = 0;
        for (i, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                body_start = i + 1;
                break;
            }
        }

        if body_start < lines.len() {
            let body_str = lines[body_start..].join("\r\n");
            body_str.as_bytes().to_vec()
        } else {
            Vec::new()
        }
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Obtiene el body del request como String
    pub fn body_string(&self) -> Option<String> {
        String::from_utf8(self.body.clone()).ok()
    }
}
