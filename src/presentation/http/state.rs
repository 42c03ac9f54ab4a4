// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::extractors::AdminToken;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// `None` disables the admin routes entirely.
    pub admin_token: Option<AdminToken>,
}
