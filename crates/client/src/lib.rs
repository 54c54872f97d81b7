//! Client core of the logistics dashboard: the authenticated session,
//! the API client, one remote slice per entity and the role-based
//! navigation table.

pub mod api;
pub mod auth;
pub mod body;
pub mod config;
pub mod nav;
pub mod resource;
pub mod session;
pub mod slice;
pub mod storage;
pub mod store;

pub use api::{ApiClient, ApiRequest};
pub use auth::Auth;
pub use body::{FormBuilder, FormValue, RequestBody};
pub use config::{load_config, parse_config};
pub use nav::{active_href, can_access, is_active, sections_for, sections_for_role, NavEntry, NavIcon};
pub use resource::{Endpoints, Resource};
pub use session::{AuthState, SessionStore};
pub use slice::{FetchStatus, RemoteSlice, SliceState};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::Store;
