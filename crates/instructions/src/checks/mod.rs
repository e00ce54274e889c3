//! Built-in checks
//!
//! Ready-to-use predicates registered by [`CheckRegistry::new`](crate::foundation::CheckRegistry::new).
//!
//! # Categories
//!
//! - **Presence**: `absent`, `empty`
//! - **Types**: `isString`, `isNumber`, `isInteger`, `isFinite`, `isBoolean`,
//!   `isArray`, `isObject`
//! - **Comparison**: `equals`, `oneOf`, `min`, `max`
//! - **Text and size**: `minLength`, `maxLength`, `matches`
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_instructions::validate;
//! use serde_json::json;
//!
//! // An integer, or a string that is not empty
//! let instructions = json!(["isInteger", { "isString": true, "notEmpty": true }]);
//! assert!(validate(&json!("x"), instructions).is_ok());
//! ```

// Presence checks
pub mod presence;

// Type checks
pub mod types;

// Comparison checks
pub mod compare;

// Text and size checks
pub mod text;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use presence::{Absent, Empty};

pub use types::{IsArray, IsBoolean, IsFinite, IsInteger, IsNumber, IsObject, IsString};

pub use compare::{Equals, Max, Min, OneOf};

pub use text::{Matches, MaxLength, MinLength};
