use crate::tree::item::{Color, Item};

/// Count the items per outcome class, returned as `(red, blue)`.
pub fn class_counts(items: &[Item]) -> (usize, usize) {
    let red = items
        .iter()
        .filter(|item| item.color() == Color::Red)
        .count();
    (red, items.len() - red)
}

/// Binary Gini impurity over the color class, in `[0, 0.5]`.
///
/// Impurity is always measured against color no matter which attribute a
/// node was split on: color is the hidden class the player is isolating.
/// The empty set is defined as pure and returns 0.
pub fn gini(items: &[Item]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }

    let (red, _) = class_counts(items);
    let p_red = red as f64 / items.len() as f64;
    1.0 - (p_red * p_red + (1.0 - p_red) * (1.0 - p_red))
}
