//! Authentication: password policy, token issuance, and the request gate.

pub mod middleware;
pub mod password;
pub mod service;
pub mod token;

pub use service::{AuthService, LoginRequest, LoginResponse, RegisterRequest};
pub use token::{Claims, Identity, TokenIssuer};
