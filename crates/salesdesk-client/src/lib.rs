//! # salesdesk-client
//!
//! Everything between the entitlement logic and the backend REST API.
//!
//! ## Modules
//! - `session`: session object, pluggable storage, auth-token claims
//! - `transport`: `HttpTransport` seam and the `reqwest` implementation
//! - `api`: `ApiClient` with bearer auth, 401 redirect, error-detail extraction
//! - `settings`: `GET/PATCH /settings/features`
//! - `control_center`: load, edit and save team feature overrides
//! - `dashboard`: concurrent widget loading with per-widget fallbacks
//! - `guard`: client-side role checks for routes
//! - `notice`: toast queue

pub mod api;
pub mod control_center;
pub mod dashboard;
pub mod guard;
pub mod notice;
pub mod session;
pub mod settings;
pub mod transport;

pub use api::ApiClient;
pub use control_center::ControlCenter;
pub use dashboard::{ceo_widgets, DashboardData, DashboardLoader, Widget, WidgetDefault};
pub use guard::{guard_route, RouteAccess, RouteDecision};
pub use notice::{Notice, NoticeLevel, Notices};
pub use session::{FileStore, MemoryStore, Session, SessionStore, TokenClaims};
pub use settings::SettingsApi;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
