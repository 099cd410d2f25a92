use ratatui::style::Color;

use crate::parser::lexer::TokenCategory;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub operator: Color,
    pub delimiter: Color,
    pub number: Color,
    pub type_name: Color,
    pub identifier: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub tree_label: Color, // Field names in the parse tree
}

impl Theme {
    /// Color used for a token of the given category
    pub fn category(&self, category: TokenCategory) -> Color {
        match category {
            TokenCategory::Keyword => self.keyword,
            TokenCategory::Operator => self.operator,
            TokenCategory::Delimiter => self.delimiter,
            TokenCategory::Literal => self.number,
            TokenCategory::DataType => self.type_name,
            TokenCategory::Identifier => self.identifier,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    operator: Color::Rgb(245, 194, 231),       // Pink for operators
    delimiter: Color::Rgb(147, 153, 178),      // Dim for punctuation
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type names
    identifier: Color::Rgb(205, 214, 244),     // Plain text
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    tree_label: Color::Rgb(249, 226, 175),
};
