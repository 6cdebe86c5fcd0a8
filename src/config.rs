#[cfg(debug_assertions)]
pub fn partner_submit_latency_ms() -> u32 {
    300  // Shortened so local iteration doesn't wait out the full delay
}

#[cfg(not(debug_assertions))]
pub fn partner_submit_latency_ms() -> u32 {
    2_000
}

#[cfg(debug_assertions)]
pub fn waitlist_submit_latency_ms() -> u32 {
    300
}

#[cfg(not(debug_assertions))]
pub fn waitlist_submit_latency_ms() -> u32 {
    1_500
}
