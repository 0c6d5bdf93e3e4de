//! ICD-10 Code Assistant UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions and response interpretation
//! - view_model.rs: CodeAssistantVm with RwSignals
//! - view.rs: Main component CodeAssistant

mod model;
mod view;
mod view_model;

pub use view::CodeAssistant;
pub use view_model::CodeAssistantVm;
