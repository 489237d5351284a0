//! Terminal preview of the drawable.

use super::model::Model;
use super::types::Opacity;
use crate::geometry::Rect;
use lipgloss_extras::lipgloss::{Color as LGColor, Style};

impl Model {
    /// Paints the drawable into a `width` x `height` block of terminal cells.
    ///
    /// Each cell is one unit of the bounds `(0, 0, width, height)`. A cell is
    /// filled when its center lies inside the fill rectangle; filled cells get
    /// the (filtered) fill color as background, the rest are blank. A fully
    /// transparent drawable renders blank cells only.
    pub fn view(&self) -> String {
        if self.width == 0 || self.height == 0 {
            return String::new();
        }

        let bounds = Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        let cmd = self.render(bounds);
        let visible = self.opacity() != Opacity::Transparent;
        let fill = Style::new().background(LGColor::from(cmd.filtered_color()));

        let rows: Vec<String> = (0..self.height)
            .map(|row| {
                let y = f64::from(row) + 0.5;
                let mut line = String::new();
                let mut col = 0;
                while col < self.width {
                    let filled = visible && cmd.rect.contains(f64::from(col) + 0.5, y);
                    let start = col;
                    while col < self.width
                        && (visible && cmd.rect.contains(f64::from(col) + 0.5, y)) == filled
                    {
                        col += 1;
                    }
                    let run = " ".repeat(usize::from(col - start));
                    if filled {
                        line.push_str(&fill.render(&run));
                    } else {
                        line.push_str(&run);
                    }
                }
                line
            })
            .collect();

        rows.join("\n")
    }
}
