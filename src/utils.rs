use std::fmt::Display;

/// Items in display form separated by single spaces.
pub fn join_cards<T: Display>(cards: &[T]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn points_label(points: u32) -> &'static str {
    if points == 1 {
        "point"
    } else {
        "points"
    }
}
