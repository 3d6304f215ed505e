//! # Códigos de Estado HTTP
//!
//! Este módulo define los códigos de estado HTTP/1.0 que usa el servicio:
//!
//! - **2xx**: Éxito (200 OK, 202 Accepted para el trigger asíncrono)
//! - **4xx**: Error del cliente (400, 401, 404, 405)
//! - **5xx**: Error del servidor (500)

/// Representa los códigos de estado HTTP que soporta el servicio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 202 Accepted - El cálculo fue aceptado y corre en background
    Accepted = 202,

    /// 400 Bad Request - JSON malformado o campos requeridos ausentes
    BadRequest = 400,

    /// 401 Unauthorized - Secret key inválido
    Unauthorized = 401,

    /// 404 Not Found - Ruta no encontrada
    NotFound = 404,

    /// 405 Method Not Allowed - Método incorrecto para la ruta
    MethodNotAllowed = 405,

    /// 500 Internal Server Error - Error interno del servidor
    InternalServerError = 500,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use ini_calculator::http::StatusCode;
    /// assert_eq!(StatusCode::Accepted.as_u16(), 202);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use ini_calculator::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::Unauthorized.reason_phrase(), "Unauthorized");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Accepted => "Accepted",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// Verifica si el código indica éxito (2xx)
    ///
    /// # Ejemplo
    /// ```
    /// use ini_calculator::http::StatusCode;
    /// assert!(StatusCode::Accepted.is_success());
    /// assert!(!StatusCode::BadRequest.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok | StatusCode::Accepted)
    }

    /// Verifica si el código indica error del cliente (4xx)
    pub fn is_client_error(&self) -> bool {
        let code = self.as_u16();
        (400..500).contains(&code)
    }

    /// Verifica si el código indica error del servidor (5xx)
    pub fn is_server_error(&self) -> bool {
        let code = self.as_u16();
        (500..600).contains(&code)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formatea el código de estado para mostrarlo
    ///
    /// Formato: "202 Accepted"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::Ok.as_u16(), 200);
        assert_eq!(StatusCode::Accepted.as_u16(), 202);
        assert_eq!(StatusCode::BadRequest.as_u16(), 400);
        assert_eq!(StatusCode::Unauthorized.as_u16(), 401);
        assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    }

    #[test]
    fn test_reason_phrases() {
        assert_eq!(StatusCode::Accepted.reason_phrase(), "Accepted");
        assert_eq!(StatusCode::Unauthorized.reason_phrase(), "Unauthorized");
        assert_eq!(StatusCode::MethodNotAllowed.reason_phrase(), "Method Not Allowed");
    }

    #[test]
    fn test_is_success() {
        assert!(StatusCode::Ok.is_success());
        assert!(StatusCode::Accepted.is_success());
        assert!(!StatusCode::Unauthorized.is_success());
    }

    #[test]
    fn test_is_client_error() {
        assert!(StatusCode::BadRequest.is_client_error());
        assert!(StatusCode::Unauthorized.is_client_error());
        assert!(!StatusCode::Accepted.is_client_error());
        assert!(!StatusCode::InternalServerError.is_client_error());
    }

    #[test]
    fn test_is_server_error() {
        assert!(StatusCode::InternalServerError.is_server_error());
        assert!(!StatusCode::BadRequest.is_server_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::Accepted.to_string(), "202 Accepted");
        assert_eq!(StatusCode::Unauthorized.to_string(), "401 Unauthorized");
    }
}
