// Word tier 4: very long words (11+ letters). Last tier; the game stays here.
pub const TIER4_NAME: &str = "very long";

pub static TIER4_WORDS: [&str; 15] = [
    "destination", "administration", "international", "koncentration", "personlighed",
    "ansvarsområder", "helbredelse", "temperaturer", "sprogundervisning", "referencebog",
    "kommunikation", "kulturinstitution", "uddannelsesniveau", "miljøforandringer",
    "teknologiudvikling",
];
