//! Static data served when the backend cannot be reached

/// Returned by `get_specializations` when the backend call fails
pub const FALLBACK_SPECIALIZATIONS: [&str; 8] = [
    "Orthopedic Physiotherapy",
    "Sports Physiotherapy",
    "Neurological Physiotherapy",
    "Pediatric Physiotherapy",
    "Geriatric Physiotherapy",
    "Cardiopulmonary Physiotherapy",
    "Women's Health Physiotherapy",
    "Manual Therapy",
];

pub(crate) fn fallback_specializations() -> Vec<String> {
    FALLBACK_SPECIALIZATIONS
        .iter()
        .map(|name| name.to_string())
        .collect()
}
