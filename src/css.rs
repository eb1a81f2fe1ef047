//! CSS Layout Choices
//!
//! Keyword enums and numeric settings driving the Flexbox and Grid demos.
//! Only valid CSS values can be stored, so inline styles built from them
//! are always well formed.

/// A closed set of CSS keywords selectable in a demo control
pub trait CssKeyword: Copy + PartialEq + 'static {
    /// All options in display order
    const ALL: &'static [Self];

    fn as_css(self) -> &'static str;

    /// Parse a control value; unknown keywords yield `None`
    fn from_css(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kw| kw.as_css() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

impl CssKeyword for FlexDirection {
    const ALL: &'static [Self] = &[FlexDirection::Row, FlexDirection::Column];

    fn as_css(self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
        }
    }
}

impl FlexDirection {
    pub fn label(self) -> &'static str {
        match self {
            FlexDirection::Row => "Row",
            FlexDirection::Column => "Column",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl CssKeyword for JustifyContent {
    const ALL: &'static [Self] = &[
        JustifyContent::FlexStart,
        JustifyContent::Center,
        JustifyContent::FlexEnd,
        JustifyContent::SpaceBetween,
        JustifyContent::SpaceAround,
        JustifyContent::SpaceEvenly,
    ];

    fn as_css(self) -> &'static str {
        match self {
            JustifyContent::FlexStart => "flex-start",
            JustifyContent::Center => "center",
            JustifyContent::FlexEnd => "flex-end",
            JustifyContent::SpaceBetween => "space-between",
            JustifyContent::SpaceAround => "space-around",
            JustifyContent::SpaceEvenly => "space-evenly",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
    Baseline,
}

impl CssKeyword for AlignItems {
    const ALL: &'static [Self] = &[
        AlignItems::Stretch,
        AlignItems::FlexStart,
        AlignItems::Center,
        AlignItems::FlexEnd,
        AlignItems::Baseline,
    ];

    fn as_css(self) -> &'static str {
        match self {
            AlignItems::Stretch => "stretch",
            AlignItems::FlexStart => "flex-start",
            AlignItems::Center => "center",
            AlignItems::FlexEnd => "flex-end",
            AlignItems::Baseline => "baseline",
        }
    }
}

/// Column count and gap of the Grid demos, kept inside the slider ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSettings {
    columns: u8,
    gap_px: u8,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { columns: 3, gap_px: 20 }
    }
}

impl GridSettings {
    pub const MIN_COLUMNS: u8 = 1;
    pub const MAX_COLUMNS: u8 = 6;
    pub const MIN_GAP_PX: u8 = 0;
    pub const MAX_GAP_PX: u8 = 50;

    pub fn columns(self) -> u8 {
        self.columns
    }

    pub fn gap_px(self) -> u8 {
        self.gap_px
    }

    pub fn set_columns(&mut self, columns: u8) {
        self.columns = columns.clamp(Self::MIN_COLUMNS, Self::MAX_COLUMNS);
    }

    pub fn set_gap_px(&mut self, gap: u8) {
        self.gap_px = gap.clamp(Self::MIN_GAP_PX, Self::MAX_GAP_PX);
    }

    pub fn template_columns(self) -> String {
        format!("repeat({}, 1fr)", self.columns)
    }
}

/// Parse a range input value; non-numeric input yields `None`
pub fn parse_slider(value: &str) -> Option<u8> {
    value.trim().parse::<u32>().ok().map(|v| v.min(u32::from(u8::MAX)) as u8)
}

/// Shared look of every demo container
const DEMO_BOX: &str = "padding: 20px; background-color: #2a2a2a; border-radius: 8px; margin-top: 15px;";

pub fn flex_container_style(direction: FlexDirection) -> String {
    format!("display: flex; flex-direction: {}; gap: 10px; {DEMO_BOX}", direction.as_css())
}

pub fn justify_container_style(justify: JustifyContent) -> String {
    format!("display: flex; justify-content: {}; min-height: 100px; {DEMO_BOX}", justify.as_css())
}

pub fn align_container_style(align: AlignItems) -> String {
    format!("display: flex; align-items: {}; min-height: 150px; {DEMO_BOX}", align.as_css())
}

pub fn grid_columns_style(settings: GridSettings) -> String {
    format!("display: grid; grid-template-columns: {}; gap: 10px; {DEMO_BOX}", settings.template_columns())
}

pub fn grid_gap_style(settings: GridSettings) -> String {
    format!("display: grid; grid-template-columns: repeat(3, 1fr); gap: {}px; {DEMO_BOX}", settings.gap_px())
}

/// Static demo container with extra declarations
pub fn demo_box(extra: &str) -> String {
    format!("{extra} {DEMO_BOX}")
}

/// Colored demo tile; `color` is one of the theme variables
pub fn tile(color: &str, extra: &str) -> String {
    format!("padding: 20px; background-color: var(--color-{color}); border-radius: 4px; {extra}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(JustifyContent::from_css("space-evenly"), Some(JustifyContent::SpaceEvenly));
        assert_eq!(AlignItems::from_css("baseline"), Some(AlignItems::Baseline));
        assert_eq!(FlexDirection::from_css("column"), Some(FlexDirection::Column));
    }

    #[test]
    fn test_unknown_keyword_rejected() {
        assert_eq!(JustifyContent::from_css("space-evenly; color: red"), None);
        assert_eq!(AlignItems::from_css("Center"), None);
        assert_eq!(FlexDirection::from_css("row-reverse"), None);
    }

    #[test]
    fn test_option_counts() {
        assert_eq!(JustifyContent::ALL.len(), 6);
        assert_eq!(AlignItems::ALL.len(), 5);
        assert_eq!(JustifyContent::default(), JustifyContent::FlexStart);
        assert_eq!(AlignItems::default(), AlignItems::Stretch);
    }

    #[test]
    fn test_grid_settings_clamp() {
        let mut grid = GridSettings::default();
        assert_eq!((grid.columns(), grid.gap_px()), (3, 20));
        grid.set_columns(0);
        assert_eq!(grid.columns(), 1);
        grid.set_columns(9);
        assert_eq!(grid.columns(), 6);
        grid.set_gap_px(200);
        assert_eq!(grid.gap_px(), 50);
        assert_eq!(grid.template_columns(), "repeat(6, 1fr)");
    }

    #[test]
    fn test_parse_slider() {
        assert_eq!(parse_slider("4"), Some(4));
        assert_eq!(parse_slider("1000"), Some(255));
        assert_eq!(parse_slider("-1"), None);
        assert_eq!(parse_slider("abc"), None);
    }

    #[test]
    fn test_container_styles_carry_choice() {
        assert!(flex_container_style(FlexDirection::Column).contains("flex-direction: column;"));
        assert!(justify_container_style(JustifyContent::SpaceAround).contains("justify-content: space-around;"));
        assert!(align_container_style(AlignItems::Center).contains("align-items: center;"));

        let mut grid = GridSettings::default();
        grid.set_gap_px(35);
        assert!(grid_gap_style(grid).contains("gap: 35px;"));
        assert!(grid_columns_style(grid).contains("repeat(3, 1fr)"));
    }
}
