//! Request validation applied before any store call.

mod validation;
pub use validation::RequestValidator;
