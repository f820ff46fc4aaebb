use garage_core::CarTile;

pub struct TableFormatter {
    id_width: usize,
    model_width: usize,
    year_width: usize,
    status_width: usize,
}

impl TableFormatter {
    pub fn new(tiles: &[CarTile]) -> Self {
        let id_width = tiles
            .iter()
            .map(|t| t.id.to_string().len())
            .max()
            .unwrap_or(2)
            .max(2);
        let model_width = tiles
            .iter()
            .map(|t| t.title.chars().count())
            .max()
            .unwrap_or(16)
            .clamp(11, 40); // "Marka/model" header min

        Self {
            id_width,
            model_width,
            year_width: 9,
            status_width: 15,
        }
    }

    pub fn render(&self, tiles: &[CarTile]) -> String {
        let mut lines = vec![self.top_border(), self.header_row(), self.separator()];
        lines.extend(tiles.iter().map(|tile| self.row(tile)));
        lines.push(self.bottom_border());
        lines.join("\n")
    }

    pub fn print_table(&self, tiles: &[CarTile]) {
        println!("{}", self.render(tiles));
    }

    fn row(&self, tile: &CarTile) -> String {
        format!(
            "│ {:>width_id$} │ {} │ {} │ {} │",
            tile.id,
            truncate(&tile.title, self.model_width),
            truncate(&tile.year_line, self.year_width),
            truncate(&tile.operational_line, self.status_width),
            width_id = self.id_width,
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:>width_id$} │ {} │ {} │ {} │",
            "Id",
            truncate("Marka/model", self.model_width),
            truncate("Rok", self.year_width),
            truncate("Na chodzie", self.status_width),
            width_id = self.id_width,
        )
    }

    fn border(&self, left: &str, mid: &str, right: &str) -> String {
        let cells: Vec<String> = [
            self.id_width,
            self.model_width,
            self.year_width,
            self.status_width,
        ]
        .iter()
        .map(|w| "─".repeat(w + 2))
        .collect();
        format!("{left}{}{right}", cells.join(mid))
    }

    fn top_border(&self) -> String {
        self.border("┌", "┬", "┐")
    }

    fn separator(&self) -> String {
        self.border("├", "┼", "┤")
    }

    fn bottom_border(&self) -> String {
        self.border("└", "┴", "┘")
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Counts characters, not bytes, so Polish diacritics pad correctly.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
