use colored::Colorize;
use stickies_lib::{Color, Swatch, view::Card};

pub fn print_card(card: &Card) {
    println!("{}", format_card(card));
}

pub fn print_swatch(swatch: Swatch) {
    let sample = match Color::from(swatch).rgb() {
        Some((r, g, b)) => "      ".on_truecolor(r, g, b).to_string(),
        None => String::new(),
    };
    println!("{sample} {swatch:<8} {}", swatch.token());
}

/// A header line showing star, id and date on the note's colour, then the content indented.
pub fn format_card(card: &Card) -> String {
    let header = format!(" {} {} ", card.star_glyph(), card.id);
    let header = match card.background.rgb() {
        Some((r, g, b)) => header.black().on_truecolor(r, g, b).to_string(),
        None => header.bold().to_string(),
    };

    let mut out = format!("{header} {}", card.date.dimmed());
    for line in card.content.lines() {
        out.push_str("\n    ");
        out.push_str(line);
    }

    out
}

#[cfg(test)]
mod test {
    use stickies_lib::NoteId;

    use super::*;

    #[test]
    fn test_format_card() {
        colored::control::set_override(false);

        let card = Card {
            id: NoteId::from(1760779800000),
            background: Color::new("#fff475"),
            content: "Buy milk\nand eggs".into(),
            starred: true,
            date: "October 18, 2025".into(),
        };

        assert_eq!(
            format_card(&card),
            " ★ 1760779800000  October 18, 2025\n    Buy milk\n    and eggs"
        );
    }

    #[test]
    fn test_format_card_without_content() {
        colored::control::set_override(false);

        let card = Card {
            id: NoteId::from(7),
            background: Color::new("papayawhip"),
            content: String::new(),
            starred: false,
            date: "May 1, 2025".into(),
        };

        assert_eq!(format_card(&card), " ☆ 7  May 1, 2025");
    }
}
