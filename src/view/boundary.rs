use crate::utils::error::Result;

/// Supervising decorator around a view's render call: a fault inside the
/// subtree is logged and replaced by the static fallback instead of
/// propagating.
pub fn supervised<F>(label: &str, fallback: &str, render: F) -> String
where
    F: FnOnce() -> Result<String>,
{
    match render() {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("Render failure in {}: {}", label, e);
            fallback.to_string()
        }
    }
}

/// Fallback text shown when a supervised subtree fails.
pub const FALLBACK_NOTICE: &str =
    "Something went wrong.\nWe're sorry for the inconvenience. Please try again later.";
