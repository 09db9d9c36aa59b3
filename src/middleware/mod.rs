/*
 * Responsibility
 * - Middleware modules: authentication interceptor and transport concerns
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
