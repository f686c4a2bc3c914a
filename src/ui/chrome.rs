use crate::ui::ansi::{FG_LIGHT_GRAY, STYLE_BOLD, STYLE_ITALIC, STYLE_RESET};
use crate::ui::width_util::WidthUtil;

/// Screen-level helpers (startup banner).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil,
        }
    }

    /// Compute the lines for the banner box and print it.
    pub fn print_banner(&self) {
        const INNER_WIDTH: usize = 50;
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}G R A D E B O O K{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Student grades at a glance{STYLE_RESET}");
        println!("╭{}╮", "─".repeat(INNER_WIDTH));
        println!("│{}│", " ".repeat(INNER_WIDTH));
        println!("│{}│", self.center_in_box(&title, INNER_WIDTH));
        println!("│{}│", self.center_in_box(&subtitle, INNER_WIDTH));
        println!("│{}│", " ".repeat(INNER_WIDTH));
        println!("╰{}╯", "─".repeat(INNER_WIDTH));
    }

    fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
