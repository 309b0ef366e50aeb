use crate::config::InfoVariant;
use crate::handlers::{details, health};
use actix_web::http::Method;
use actix_web::{guard, web};

/// Path of the liveness probe.
pub const HEALTHZ_PATH: &str = "/api/v1/healthz";

/// Handler a [`Route`] dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    Details,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub endpoint: Endpoint,
}

/// # API Route Table
///
/// Explicit mapping of method + exact path to handler, built once at startup
/// and handed to the router. Anything not listed falls through to actix's
/// default **404 Not Found**.
///
/// ## Routes
///
/// ```text
/// GET /api/v1/healthz                 - Liveness probe
/// GET /api/v1/details | /api/v1/info  - Host details (per variant)
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable {
    variant: InfoVariant,
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(variant: InfoVariant) -> Self {
        let routes = vec![
            Route {
                method: Method::GET,
                path: variant.path(),
                endpoint: Endpoint::Details,
            },
            Route {
                method: Method::GET,
                path: HEALTHZ_PATH,
                endpoint: Endpoint::Health,
            },
        ];

        Self { variant, routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Registers every route on the actix service config. `GET` routes also
    /// answer `HEAD`.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.variant));

        for route in &self.routes {
            let mut methods = guard::Any(guard::Method(route.method.clone()));
            if route.method == Method::GET {
                methods = methods.or(guard::Head());
            }
            let handler = web::route().guard(methods);
            let handler = match route.endpoint {
                Endpoint::Health => handler.to(health::healthz),
                Endpoint::Details => handler.to(details::details),
            };
            cfg.service(web::resource(route.path).route(handler));
        }
    }
}
