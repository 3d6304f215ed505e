//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que mapea paths HTTP a handlers
//! estáticos (health, test).
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! El router examina el path del request y lo dirige al handler apropiado.
//! Si no hay handler para ese path, retorna 404 Not Found. La ruta del
//! trigger no pasa por aquí: necesita estado (JobRunner) y se despacha
//! explícitamente en el servidor.

use crate::http::{Request, Response, StatusCode};

/// Tipo de función handler
///
/// Un handler recibe un Request y retorna una Response
pub type Handler = fn(&Request) -> Response;

/// Router que mapea paths a handlers
pub struct Router {
    /// Mapa de path → handler
    routes: Vec<(String, Handler)>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
        }
    }

    /// Registra una ruta con su handler
    ///
    /// El path se registra con y sin slash final, al estilo de los
    /// esquemas de URL del servicio principal.
    ///
    /// # Ejemplo
    /// ```
    /// use ini_calculator::router::Router;
    /// use ini_calculator::http::{Request, Response};
    ///
    /// fn hello_handler(_req: &Request) -> Response {
    ///     Response::json(r#"{"message": "Hello"}"#)
    /// }
    ///
    /// let mut router = Router::new();
    /// router.register("/hello/", hello_handler);
    /// ```
    pub fn register(&mut self, path: &str, handler: Handler) {
        self.routes.push((path.to_string(), handler));

        // Alias sin slash final (o con él, según cómo se registró)
        let alias = if let Some(stripped) = path.strip_suffix('/') {
            stripped.to_string()
        } else {
            format!("{}/", path)
        };
        if !alias.is_empty() {
            self.routes.push((alias, handler));
        }
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// Si no encuentra un handler para el path, retorna 404 Not Found.
    pub fn route(&self, request: &Request) -> Response {
        let path = request.path();

        // Buscar handler para este path
        for (route_path, handler) in &self.routes {
            if route_path == path {
                let mut response = handler(request);
                // Agregar headers comunes a todas las respuestas
                self.add_common_headers(&mut response);
                return response;
            }
        }

        // No hay handler registrado para este path
        let mut response = Response::error(StatusCode::NotFound, "Route not found");
        self.add_common_headers(&mut response);
        response
    }

    /// Agrega headers comunes a todas las respuestas
    fn add_common_headers(&self, response: &mut Response) {
        response.add_header("Server", concat!("ini_calculator/", env!("CARGO_PKG_VERSION")));
        response.add_header("Connection", "close");
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
