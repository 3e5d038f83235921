//! Saving an image the user is looking at.
//!
//! In the browser the bytes are fetched, wrapped in a `Blob`, exposed through a
//! temporary object URL and handed to a synthetic `<a download>` click. Native
//! builds have no such dance: the bytes are fetched with reqwest and written
//! into the download directory.

use chrono::{DateTime, Utc};
use percent_encoding::percent_decode_str;

use crate::config::UiConfig;

const FALLBACK_EXTENSION: &str = "jpg";

/// Picks a filename for a downloaded image.
///
/// The last path segment of the URL is used when it carries an extension.
/// `data:` URLs take their extension from the MIME subtype. Anything else gets
/// a timestamped name.
pub fn download_filename(url: &str, now: DateTime<Utc>) -> String {
    let stamped = |ext: &str| format!("image-{}.{ext}", now.timestamp_millis());

    if let Some(rest) = url.strip_prefix("data:") {
        let mime = rest.split([';', ',']).next().unwrap_or_default();
        let ext = match mime.strip_prefix("image/") {
            Some("jpeg") => "jpg",
            Some("svg+xml") => "svg",
            Some(sub) if !sub.is_empty() && sub.chars().all(|c| c.is_ascii_alphanumeric()) => sub,
            _ => FALLBACK_EXTENSION,
        };
        return stamped(ext);
    }

    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();
    let segment = percent_decode_str(segment).decode_utf8_lossy();
    let name: String = segment
        .chars()
        .map(|c| if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();

    let has_extension = matches!(
        name.rsplit_once('.'),
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty()
    );
    if has_extension { name } else { stamped(FALLBACK_EXTENSION) }
}

/// Downloads `url` through the browser's own download handling.
#[cfg(target_arch = "wasm32")]
pub async fn save_image(url: &str, _config: &UiConfig) -> anyhow::Result<()> {
    use anyhow::{anyhow, bail};
    use dioxus::logger::tracing::info;
    use gloo_net::http::Request;

    let resp = Request::get(url).send().await.map_err(|e| anyhow!("{e:?}"))?;
    if !resp.ok() {
        bail!("fetching {url} failed with HTTP {}", resp.status());
    }
    let bytes = resp.binary().await.map_err(|e| anyhow!("{e:?}"))?;

    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::of1(&array);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(|e| anyhow!("{e:?}"))?;
    let object_url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| anyhow!("{e:?}"))?;

    let filename = download_filename(url, Utc::now());
    let clicked = click_anchor(&object_url, &filename);
    // Revoke even when the click failed so the blob is released.
    let revoked = web_sys::Url::revoke_object_url(&object_url).map_err(|e| anyhow!("{e:?}"));
    clicked?;
    revoked?;
    info!("downloaded {url} as {filename}");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn click_anchor(href: &str, filename: &str) -> anyhow::Result<()> {
    use anyhow::anyhow;
    use js_sys::wasm_bindgen::JsCast;
    use web_sys::HtmlAnchorElement;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("no document available"))?;
    let body = document.body().ok_or_else(|| anyhow!("document has no body"))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow!("{e:?}"))?
        .dyn_into()
        .map_err(|e| anyhow!("{e:?}"))?;
    anchor.set_href(href);
    anchor.set_download(filename);
    body.append_child(&anchor).map_err(|e| anyhow!("{e:?}"))?;
    anchor.click();
    body.remove_child(&anchor).map_err(|e| anyhow!("{e:?}"))?;
    Ok(())
}

/// Downloads `url` into the configured directory, or the user's download
/// directory when none is configured.
#[cfg(not(target_arch = "wasm32"))]
pub async fn save_image(url: &str, config: &UiConfig) -> anyhow::Result<()> {
    let dir = config.download_dir.clone().unwrap_or_else(default_download_dir);
    save_image_to(url, dir).await
}

#[cfg(not(target_arch = "wasm32"))]
fn default_download_dir() -> std::path::PathBuf {
    use directories_next::UserDirs;

    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::path::PathBuf::from("."))
}

#[cfg(not(target_arch = "wasm32"))]
async fn save_image_to(url: &str, dir: std::path::PathBuf) -> anyhow::Result<()> {
    use dioxus::logger::tracing::info;

    let bytes = reqwest::get(url).await?.error_for_status()?.bytes().await?;
    let path = dir.join(download_filename(url, Utc::now()));
    tokio::fs::write(&path, &bytes).await?;
    info!("downloaded {url} to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_760_000_000_123).unwrap()
    }

    #[test]
    fn uses_last_path_segment() {
        assert_eq!(download_filename("https://cdn.example.com/u/42/cat.png", now()), "cat.png");
        assert_eq!(download_filename("a.jpg", now()), "a.jpg");
    }

    #[test]
    fn strips_query_and_fragment() {
        assert_eq!(
            download_filename("https://x.test/img/photo.webp?w=800&h=600#top", now()),
            "photo.webp"
        );
    }

    #[test]
    fn decodes_and_sanitises() {
        assert_eq!(
            download_filename("https://x.test/my%20holiday%2Fpic.jpeg", now()),
            "my_holiday_pic.jpeg"
        );
    }

    #[test]
    fn extensionless_urls_get_a_stamped_name() {
        assert_eq!(
            download_filename("https://x.test/api/attachments/9f3a", now()),
            "image-1760000000123.jpg"
        );
        assert_eq!(download_filename("https://x.test/", now()), "image-1760000000123.jpg");
        assert_eq!(download_filename("https://x.test/.hidden", now()), "image-1760000000123.jpg");
    }

    #[test]
    fn data_urls_use_the_mime_subtype() {
        assert_eq!(
            download_filename("data:image/png;base64,iVBORw0KGgo=", now()),
            "image-1760000000123.png"
        );
        assert_eq!(download_filename("data:image/jpeg;base64,/9j/", now()), "image-1760000000123.jpg");
        assert_eq!(download_filename("data:image/svg+xml,<svg/>", now()), "image-1760000000123.svg");
        assert_eq!(download_filename("data:,hello", now()), "image-1760000000123.jpg");
    }

    #[tokio::test]
    async fn unreachable_host_is_an_error() {
        let dir = std::env::temp_dir();
        let res = save_image_to("http://127.0.0.1:9/nothing.png", dir).await;
        assert!(res.is_err());
    }
}
