/// Fixed pool of display colors assigned to lines in emission order.
pub const PALETTE: [&str; 13] = [
    "red",
    "blue",
    "green",
    "orange",
    "gray",
    "purple",
    "cyan",
    "brown",
    "chocolate4",
    "crimson",
    "goldenrod",
    "indigo",
    "navyblue",
];

/// Returns the color for the line at the given emission index, cycling
/// through the palette.
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_thirteen_entries() {
        assert_eq!(PALETTE.len(), 13);
    }

    #[test]
    fn colors_cycle_after_the_pool_is_exhausted() {
        assert_eq!(color_for(0), "red");
        assert_eq!(color_for(12), "navyblue");
        assert_eq!(color_for(13), "red");
        assert_eq!(color_for(27), color_for(1));
    }
}
