//! Word list for keywords and messages

use rand::Rng;

const WORDS: &[&str] = &[
    "amber", "ancient", "arctic", "autumn", "azure", "bold", "brave", "bright", "calm", "cedar",
    "clever", "cobalt", "coral", "crimson", "crystal", "dawn", "delta", "dusk", "eager", "echo",
    "ember", "falcon", "fern", "fjord", "frost", "gentle", "glacier", "golden", "granite",
    "harbor", "hazel", "heron", "hidden", "indigo", "iris", "ivory", "jade", "juniper", "keen",
    "lagoon", "lantern", "lilac", "lively", "lunar", "maple", "marble", "meadow", "mellow",
    "misty", "nimble", "noble", "north", "oak", "ocean", "olive", "onyx", "orbit", "otter",
    "pebble", "pine", "polar", "pond", "quartz", "quiet", "raven", "reef", "river", "rustic",
    "sable", "sage", "scarlet", "silent", "silver", "slate", "solar", "spruce", "stone", "swift",
    "thistle", "tidal", "topaz", "tundra", "umber", "valley", "velvet", "violet", "willow",
    "winter", "wren", "zephyr",
];

/// One random word.
pub fn word(rng: &mut impl Rng) -> &'static str {
    WORDS[rng.gen_range(0..WORDS.len())]
}

/// `count` random words.
pub fn words(rng: &mut impl Rng, count: usize) -> Vec<String> {
    (0..count).map(|_| word(rng).to_owned()).collect()
}

/// Hyphenated slug of two to four words, e.g. `misty-otter-of-dawn`.
pub fn slug(rng: &mut impl Rng) -> String {
    let mut parts = vec![word(rng), word(rng)];
    match rng.gen_range(0..3) {
        0 => {}
        1 => parts.push(word(rng)),
        _ => {
            parts.push("of");
            parts.push(word(rng));
        }
    }
    parts.join("-")
}
