// Word tier 3: long words (7-9 letters).
pub const TIER3_NAME: &str = "long";

pub static TIER3_WORDS: [&str; 20] = [
    "computer", "forfatter", "udvikler", "arkitekt", "eleverne", "bibliotek",
    "kolleger", "familie", "økonomi", "hospital", "kantinen", "univers", "sygehus",
    "software", "hardware", "skuespil", "teateret", "spillede", "bagerens", "øvelser",
];
