
#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // Development URL when running with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://travel-with-pet.vercel.app"
}

pub const SITE_NAME: &str = "TravelWithPets";

/// Marker attribute carried by every full-viewport home section.
pub const SECTION_SELECTOR: &str = "[data-section]";

// Gesture tuning. Empirical values, kept as they were tuned on trackpads and phones.
pub const WHEEL_THRESHOLD: f64 = 50.0;
pub const TOUCH_THRESHOLD: f64 = 30.0;
pub const FOOTER_PROXIMITY: f64 = 100.0;
pub const SETTLE_DELAY_MS: u32 = 700;

pub const HORIZONTAL_WHEEL_MULTIPLIER: f64 = 2.5;
pub const HEADER_SCROLLED_OFFSET: f64 = 50.0;

pub const INTRO_LOADER_MS: u32 = 2800;
pub const ROUTE_LOADER_MS: u32 = 1500;
pub const LOADER_EXIT_MS: u32 = 600;

pub const THEME_STORAGE_KEY: &str = "with-pet-trip-theme";
pub const LOCALE_STORAGE_KEY: &str = "with-pet-trip-locale";
