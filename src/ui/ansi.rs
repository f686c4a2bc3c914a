// Shared ANSI/VT100 control sequences used across the UI.

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Bold text.
pub const STYLE_BOLD: &str = crate::csi!("1m");
/// Italic text.
pub const STYLE_ITALIC: &str = crate::csi!("3m");
/// Light gray foreground.
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");

// Chart palette (256-color foregrounds).

/// Sky blue, used for grade bars.
pub const FG_SKY_BLUE: &str = crate::csi!("38;5;117m");
/// Royal blue, used for the pass share.
pub const FG_ROYAL_BLUE: &str = crate::csi!("38;5;27m");
/// Purple, used for the fail share and histogram bars.
pub const FG_PURPLE: &str = crate::csi!("38;5;93m");
