#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // backend default BIND_ADDR
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // same origin, the backend serves the bundle
}

pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}
