// Word tier 2: medium words (5-7 letters), weekdays included.
pub const TIER2_NAME: &str = "medium";

pub static TIER2_WORDS: [&str; 25] = [
    "skole", "stjerne", "blomst", "fisker", "husene", "cykler", "telefon", "sommer",
    "vinter", "morgen", "aften", "venner", "haver", "skoven", "hunden", "kaffe",
    "frugt", "bageri", "søndag", "mandag", "tirsdag", "onsdag", "torsdag", "fredag",
    "lørdag",
];
