//! One-shot browser geolocation access.

use shared::models::GeoError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Position, PositionError, PositionOptions};
use yew::Callback;

const TIMEOUT_MS: u32 = 10_000;

/// Decimal coordinates from a successful position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coords {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Ask the browser for the current position once.
///
/// `on_position` receives the fix; `on_error` receives the mapped failure.
/// A browser without a geolocation API reports [`GeoError::Unsupported`]
/// without registering any callback. Low accuracy is requested and the fix
/// must arrive within ten seconds.
pub fn request_position(on_position: Callback<Coords>, on_error: Callback<GeoError>) {
    let Some(window) = web_sys::window() else {
        on_error.emit(GeoError::Unsupported);
        return;
    };
    let Ok(geolocation) = window.navigator().geolocation() else {
        on_error.emit(GeoError::Unsupported);
        return;
    };

    let success = Closure::once_into_js(move |position: Position| {
        let coords = position.coords();
        on_position.emit(Coords {
            latitude: coords.latitude(),
            longitude: coords.longitude(),
        });
    });

    let error_cb = on_error.clone();
    let failure = Closure::once_into_js(move |error: PositionError| {
        error_cb.emit(GeoError::from_code(error.code()));
    });

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(false);
    options.set_timeout(TIMEOUT_MS);

    if geolocation
        .get_current_position_with_error_callback_and_options(
            success.unchecked_ref::<js_sys::Function>(),
            Some(failure.unchecked_ref::<js_sys::Function>()),
            &options,
        )
        .is_err()
    {
        on_error.emit(GeoError::Unsupported);
    }
}
