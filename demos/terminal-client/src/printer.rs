use std::fmt::Write as _;

use tilewire::prelude::*;

/// Draws the table to stdout, one full redraw per snapshot.
pub struct TerminalPresenter {
    json: bool,
}

impl TerminalPresenter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl Presenter for TerminalPresenter {
    fn log(&mut self, line: &str) {
        println!("» {line}");
    }

    fn render(&mut self, view: &TableView) {
        if self.json {
            match serde_json::to_string_pretty(view) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Failed to serialize table to JSON: {e}"),
            }
        } else {
            print!("{}", format_table(view));
        }
    }

    fn show_prompt(&mut self, prompt: &ActionPrompt) {
        println!("{}", format_prompt(prompt));
    }

    fn retract_prompt(&mut self) {
        println!("(claim closed)");
    }
}

fn tiles(tiles: &[Tile]) -> String {
    if tiles.is_empty() {
        return "-".to_string();
    }
    tiles
        .iter()
        .map(Tile::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn seat_line(out: &mut String, seat: &SeatView) {
    let name = seat.nickname.as_deref().unwrap_or("");
    let marker = if seat.has_turn { " ◀" } else { "" };
    let label = match seat.position {
        Position::Bottom => "You",
        Position::Right => "Right",
        Position::Across => "Across",
        Position::Left => "Left",
    };
    let hand = match &seat.hand {
        HandView::Revealed { tiles: faces, .. } => tiles(faces),
        HandView::Concealed { count } => format!("{count} tiles"),
    };
    let _ = writeln!(
        out,
        "  {label:<6} {} {name:<10} hand: {hand:<40} melds: {}{marker}",
        seat.seat,
        tiles(&seat.melds),
    );
}

/// Renders the table as plain text, the local seat last.
pub fn format_table(view: &TableView) -> String {
    let mut out = String::from("──────── table ────────\n");
    for position in [Position::Across, Position::Left, Position::Right] {
        seat_line(&mut out, view.seat(position));
    }
    let _ = writeln!(out, "  sea: {}", tiles(&view.sea));
    seat_line(&mut out, view.me());
    if view.me().hand.is_clickable() {
        out.push_str("  your turn: play <tile>\n");
    }
    out
}

pub fn format_prompt(prompt: &ActionPrompt) -> String {
    let options = prompt
        .options
        .iter()
        .map(ActionKind::as_str)
        .collect::<Vec<_>>()
        .join(" | ");
    match &prompt.tile {
        Some(tile) => format!("claim {tile}? {options}  (act <kind>)"),
        None => format!("claim? {options}  (act <kind>)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(my: u8, turn: u8) -> TableView {
        let snapshot = Snapshot {
            my_index: SeatIndex::new(my).unwrap(),
            turn_index: SeatIndex::new(turn).unwrap(),
            sea: vec![Tile::from("1m"), Tile::from("2m")],
            my_hand: vec![Tile::from("5p")],
            hand_counts: [13, 12, 11, 10],
            all_melds: Default::default(),
            nicknames: None,
        };
        TableView::build(&snapshot, my == turn, None)
    }

    #[test]
    fn test_format_table_shows_sea_and_my_hand() {
        let text = format_table(&view(0, 0));
        assert!(text.contains("sea: 1m 2m"));
        assert!(text.contains("hand: 5p"));
        assert!(text.contains("your turn"));
    }

    #[test]
    fn test_format_table_conceals_opponents() {
        let text = format_table(&view(0, 2));
        assert!(text.contains("12 tiles"));
        assert!(text.contains("11 tiles"));
        assert!(text.contains("10 tiles"));
        assert!(!text.contains("your turn"));
    }

    #[test]
    fn test_format_prompt_lists_options_in_order() {
        let request = ActionRequest::new([ActionKind::from("PONG"), ActionKind::from("KONG")]);
        let prompt = ActionPrompt::from_request(&request);
        assert_eq!(
            format_prompt(&prompt),
            "claim? PONG | KONG | SKIP  (act <kind>)"
        );
    }
}
