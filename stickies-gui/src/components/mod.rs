use iced::Color;

pub mod color_picker;
pub mod note_grid;
pub mod search_bar;

/// Background for notes whose colour token isn't a hex colour.
const FALLBACK_BACKGROUND: Color = Color::from_rgb8(0xee, 0xee, 0xee);

/// Convert a note colour into something iced can paint.
fn to_iced_color(color: &stickies_lib::Color) -> Color {
    color
        .rgb()
        .map_or(FALLBACK_BACKGROUND, |(r, g, b)| Color::from_rgb8(r, g, b))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_to_iced_color() {
        assert_eq!(
            to_iced_color(&stickies_lib::Color::new("#ff0000")),
            Color::from_rgb8(255, 0, 0)
        );
        assert_eq!(
            to_iced_color(&stickies_lib::Color::new("rebeccapurple")),
            FALLBACK_BACKGROUND
        );
    }
}
