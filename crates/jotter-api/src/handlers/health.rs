//! Liveness probe.

/// Always answers `200 OK` with the plain-text body `OK`.
///
/// Does not touch the database.
pub async fn health_check() -> &'static str {
    "OK"
}
