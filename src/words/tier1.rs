// Word tier 1: short words (2-4 letters).
pub const TIER1_NAME: &str = "short";

pub static TIER1_WORDS: [&str; 30] = [
    "kat", "hus", "bil", "bog", "mad", "sol", "sne", "mus", "fod", "hav",
    "hund", "lys", "far", "mor", "vej", "sag", "ros", "ris", "vand", "vind",
    "fugl", "bord", "træ", "kage", "bøn", "ost", "by", "dag", "vin", "var",
];
