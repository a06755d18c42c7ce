//! Synthetic movie data.

use std::collections::HashSet;

use chrono::Local;
use rand::Rng;
use rand::seq::IndexedRandom;

use cinedex_entity::movie::NewMovie;

/// Genres assigned to generated movies.
pub const GENRES: [&str; 7] = [
    "Animation",
    "Adventure",
    "Comedy",
    "Action",
    "Drama",
    "Family",
    "Fantasy",
];

/// Seed used when the catalog has no names to derive from.
const FALLBACK_BASE: &str = "Untitled";

/// Next name in a sequel chain.
///
/// A name that does not end in a digit gets `" 2"` appended; otherwise the
/// final digit is replaced by its successor (`"Saw 9"` becomes `"Saw 10"`).
pub fn successor_name(name: &str) -> String {
    match name.chars().last().and_then(|c| c.to_digit(10)) {
        Some(digit) => format!("{}{}", &name[..name.len() - 1], digit + 1),
        None => format!("{name} 2"),
    }
}

/// Picks a random base from `names` and walks its successor chain until it
/// reaches a name not in `taken`.
pub fn unused_sequel_name(names: &[String], taken: &HashSet<String>) -> String {
    let base = names
        .choose(&mut rand::rng())
        .map(String::as_str)
        .unwrap_or(FALLBACK_BASE);

    let mut candidate = successor_name(base);
    while taken.contains(&candidate) {
        candidate = successor_name(&candidate);
    }
    candidate
}

/// Builds a generated movie with random attributes.
pub fn synthetic_movie(name: String) -> NewMovie {
    let mut rng = rand::rng();
    let genre = GENRES.choose(&mut rng).copied().unwrap_or(GENRES[0]);
    let description = format!(
        "Generated Description for movie {name} at {}",
        Local::now().format("%d/%m/%Y %H:%M:%S")
    );

    NewMovie {
        year: rng.random_range(1950..=2022),
        duration: format!("{}h {}m", rng.random_range(1..=3), rng.random_range(0..=59)),
        genre: genre.to_string(),
        description,
        nr_characters: 0,
        editor_id: None,
        name,
    }
}
