pub mod issuer;
pub mod validation;

pub use issuer::TokenIssuer;
pub use validation::{Claims, TokenValidator};
