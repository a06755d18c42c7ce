//! Synthetic character data.

use chrono::Local;
use rand::seq::IndexedRandom;

use cinedex_entity::character::NewCharacter;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty", "Mark", "Sandra",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Clark",
];

/// A random "First Last" person name.
pub fn person_name() -> String {
    let mut rng = rand::rng();
    let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Doe");
    format!("{first} {last}")
}

/// Builds a generated character attached to a random movie from
/// `movie_names`. Returns `None` when there is no movie to attach to.
pub fn synthetic_character(movie_names: &[String]) -> Option<NewCharacter> {
    let movie_name = movie_names.choose(&mut rand::rng())?.clone();
    let name = person_name();
    let description = format!(
        "Generated Description for character {name} at {}",
        Local::now().format("%d/%m/%Y %H:%M:%S")
    );

    Some(NewCharacter {
        name,
        movie_name,
        description,
        editor_id: None,
    })
}
