//! Random image panel
//!
//! Images come from the fixed picsum.photos endpoint at a fixed size;
//! a random cache-busting parameter makes every request a fresh image.
//! The service only builds URLs and tracks the slot lifecycle — the
//! shell performs the actual fetch and reports the outcome back.

use rand::Rng;

use app_state::{ImageSlot, StateHandle};

/// Requested image width in pixels.
pub const IMAGE_WIDTH: u32 = 1200;

/// Requested image height in pixels.
pub const IMAGE_HEIGHT: u32 = 700;

/// Exclusive upper bound of the cache-busting parameter.
pub const CACHE_BUST_RANGE: u32 = 1_000_000;

/// Build a random-image URL with a fresh cache buster.
pub fn random_image_url() -> String {
    let bust = rand::rng().random_range(0..CACHE_BUST_RANGE);
    format!(
        "https://picsum.photos/{}/{}?random={}",
        IMAGE_WIDTH, IMAGE_HEIGHT, bust
    )
}

/// Drives the image panel slot.
#[derive(Clone)]
pub struct RandomImageService {
    state: StateHandle,
}

impl RandomImageService {
    /// Create a service over the shared view state.
    pub fn new(state: StateHandle) -> Self {
        Self { state }
    }

    /// Request a fresh random image.
    ///
    /// Puts the slot into `Loading` and returns the URL the shell
    /// should fetch.
    pub fn request(&self) -> String {
        let url = random_image_url();
        self.state.update(|state| {
            state.image = ImageSlot::Loading { url: url.clone() };
        });
        url
    }

    /// The shell reports that `url` finished loading.
    ///
    /// Outcomes for anything but the pending request are ignored, so a
    /// slow response cannot clobber a newer request.
    pub fn image_loaded(&self, url: &str) {
        self.state.update(|state| {
            let pending = matches!(&state.image, ImageSlot::Loading { url: pending } if pending == url);
            if pending {
                state.image = ImageSlot::Loaded {
                    url: url.to_string(),
                };
            } else {
                tracing::debug!(%url, "ignoring load outcome for a stale image request");
            }
        });
    }

    /// The shell reports that fetching `url` failed. The slot shows the
    /// placeholder instead; there is no retry.
    pub fn image_failed(&self, url: &str) {
        self.state.update(|state| {
            let pending = matches!(&state.image, ImageSlot::Loading { url: pending } if pending == url);
            if pending {
                state.image = ImageSlot::Failed;
            } else {
                tracing::debug!(%url, "ignoring failure outcome for a stale image request");
            }
        });
    }

    /// Show or hide the image panel. The slot itself is untouched.
    pub fn set_panel_visible(&self, visible: bool) {
        self.state.update(|state| {
            state.images_panel_visible = visible;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_image_url_shape() {
        let url = random_image_url();
        assert!(url.starts_with("https://picsum.photos/1200/700?random="));

        let bust: u32 = url
            .rsplit('=')
            .next()
            .unwrap()
            .parse()
            .expect("cache buster is numeric");
        assert!(bust < CACHE_BUST_RANGE);
    }

    #[test]
    fn test_request_marks_slot_loading() {
        let state = StateHandle::new();
        let service = RandomImageService::new(state.clone());

        let url = service.request();
        assert_eq!(state.snapshot().image, ImageSlot::Loading { url: url.clone() });
    }

    #[test]
    fn test_load_outcome_resolves_slot() {
        let state = StateHandle::new();
        let service = RandomImageService::new(state.clone());

        let url = service.request();
        service.image_loaded(&url);
        assert_eq!(state.snapshot().image, ImageSlot::Loaded { url });
    }

    #[test]
    fn test_failure_shows_placeholder() {
        let state = StateHandle::new();
        let service = RandomImageService::new(state.clone());

        let url = service.request();
        service.image_failed(&url);
        assert_eq!(state.snapshot().image, ImageSlot::Failed);
    }

    #[test]
    fn test_stale_outcome_is_ignored() {
        let state = StateHandle::new();
        let service = RandomImageService::new(state.clone());

        let first = service.request();
        let second = service.request();

        // The first request resolves after it was superseded.
        service.image_loaded(&first);
        assert_eq!(
            state.snapshot().image,
            ImageSlot::Loading { url: second.clone() }
        );

        service.image_loaded(&second);
        assert_eq!(state.snapshot().image, ImageSlot::Loaded { url: second });
    }

    #[test]
    fn test_panel_visibility_toggle() {
        let state = StateHandle::new();
        let service = RandomImageService::new(state.clone());

        service.set_panel_visible(true);
        assert!(state.snapshot().images_panel_visible);
        service.set_panel_visible(false);
        assert!(!state.snapshot().images_panel_visible);
    }
}
