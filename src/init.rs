//! Initialization that needs to be done before the first decode

use std::sync::Once;

static INIT: Once = Once::new();

/// Registers the extra decoders enabled at compile time. Safe to call any number of times.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "jxl")]
        jxl_oxide::integration::register_image_decoding_hook();
        log::trace!("decoder hooks registered");
    });
}
