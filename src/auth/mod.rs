pub mod claims;
pub mod guard;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod session;

pub use claims::SessionClaims;
pub use guard::{require_admin, require_login, require_owner_or_admin, CurrentUser};
pub use jwt::JwtService;
pub use middleware::{AdminUser, AuthenticatedUser, SessionMiddleware};
pub use password::{hash_password, verify_password};
pub use session::{IssuedSession, SessionManager, SESSION_COOKIE};
