//! HTTP protocol layer module
//!
//! Response builders shared by every handler, decoupled from the handlers themselves.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_500_response, build_error_response, build_json_response,
    build_redirect_response, build_text_response,
};
