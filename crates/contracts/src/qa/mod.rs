//! Contracts for the document question-answering backend
//!
//! Structure:
//! - request.rs: bodies the frontend sends
//! - response.rs: bodies the backend returns

pub mod request;
pub mod response;
