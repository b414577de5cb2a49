// src/catalog/images.rs

use url::Url;

pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/003366/ffffff?text=No+Image";

/// Turns the API's image reference into something an `<img src>` can load.
///
/// - starts with `http`: already absolute, used as-is
/// - otherwise: resolved under `media_base` (`{api}/media/`)
/// - missing or blank, or resolving outside `media_base` (`../`, `data:`): the
///   placeholder
pub fn resolve_image(image: Option<&str>, media_base: &Url) -> String {
    let image = match image.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return PLACEHOLDER_IMAGE.to_string(),
    };

    if image.starts_with("http") {
        return image.to_string();
    }

    match media_base.join(image.trim_start_matches('/')) {
        Ok(url) if url.as_str().starts_with(media_base.as_str()) => url.to_string(),
        Ok(url) => {
            tracing::warn!(image, resolved = %url, "image path escapes media root, using placeholder");
            PLACEHOLDER_IMAGE.to_string()
        }
        Err(e) => {
            tracing::warn!(image, error = %e, "unresolvable image path, using placeholder");
            PLACEHOLDER_IMAGE.to_string()
        }
    }
}
