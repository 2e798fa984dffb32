//! Password strength classification for real-time strength meters
//!
//! This library classifies a password into a coarse strength category
//! (`Empty`, `TooShort`, `Weak`, `Strong`) and produces a message naming the
//! first unmet requirement. Classification is a pure function, cheap enough
//! to run on every keystroke.
//!
//! Callers can override the advisory messages, or replace the built-in rules
//! with three ordered regular-expression rules of their own.
//!
//! # Features
//!
//! - `async` (default): Enables [`classify_tx`] for channel-based UI loops
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: (De)serialization of options, tables and results
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{classify, Category, ClassifyOptions};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefg1!".to_string().into());
//! let result = classify(&password, &ClassifyOptions::default());
//!
//! assert_eq!(result.category, Category::Strong);
//! assert!(result.message.is_empty());
//! ```
//!
//! Custom rules:
//!
//! ```rust
//! use pwd_meter::{classify, Category, ClassifyOptions, CustomRules, Rule};
//! use secrecy::SecretString;
//!
//! let rules = CustomRules::new(
//!     Rule::new(r"^.{8,}$", "Use at least 8 characters")?,
//!     Rule::new(r"[0-9]", "Add a number")?,
//!     Rule::new(r"[A-Z]", "Add a capital letter")?,
//! );
//! let options = ClassifyOptions::new().with_custom_rules(rules);
//!
//! let password = SecretString::new("short".to_string().into());
//! let result = classify(&password, &options);
//! assert_eq!(result.category, Category::TooShort);
//! assert_eq!(result.message, "Use at least 8 characters");
//! # Ok::<(), pwd_meter::RuleError>(())
//! ```

// Internal modules
mod category;
mod classifier;
mod messages;
mod options;
mod rules;

pub mod meter;
pub mod stages;

// Public API
pub use category::{Category, Classification};
pub use classifier::{categorize, classify, explain};
pub use messages::{MessageKey, MessageTable, REPEATING_CHARS_MESSAGE};
pub use meter::{ColorTable, Meter};
pub use options::ClassifyOptions;
pub use rules::{CustomRules, CustomStage, MISSING_MESSAGE, Rule, RuleChain, RuleError};
pub use stages::Stage;

#[cfg(feature = "async")]
pub use classifier::classify_tx;
