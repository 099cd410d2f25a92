//! Lexer (tokenizer) for C-like source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the tree
//! builder. Scanning is driven by a single regular expression; anything the
//! pattern does not match (whitespace, `.`, `"`, `#`, `%`, ...) is silently
//! dropped. The lexer is lossy and never fails: string literals and member
//! access lose their punctuation, which is acceptable for a visualizer.

use regex::{Match, Regex};
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::OnceLock;

/// Scan pattern, alternatives tried in order: word runs, operator-character
/// runs, digit runs, single delimiters. The digit branch never wins because
/// `\w` already covers digits.
const TOKEN_PATTERN: &str = r"\w+|[+\-*/=><!&|]+|\d+|[;{}(),]";

const KEYWORDS: [&str; 6] = ["int", "float", "if", "else", "while", "return"];
const OPERATORS: [&str; 12] = [
    "+", "-", "*", "/", "=", "==", "<", ">", "&&", "||", "++", "--",
];
const DELIMITERS: [&str; 6] = [";", "{", "}", "(", ")", ","];
const DATA_TYPES: [&str; 4] = ["int", "float", "char", "void"];

/// The fixed classification tables, built once per process.
struct Tables {
    keywords: FxHashSet<&'static str>,
    operators: FxHashSet<&'static str>,
    delimiters: FxHashSet<&'static str>,
    data_types: FxHashSet<&'static str>,
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| Tables {
        keywords: KEYWORDS.into_iter().collect(),
        operators: OPERATORS.into_iter().collect(),
        delimiters: DELIMITERS.into_iter().collect(),
        data_types: DATA_TYPES.into_iter().collect(),
    })
}

fn token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

/// Category assigned to a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Keyword,
    Operator,
    Delimiter,
    Literal,
    DataType,
    Identifier,
}

impl TokenCategory {
    /// Human-readable name used in the token listing.
    pub fn name(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "Keyword",
            TokenCategory::Operator => "Operator",
            TokenCategory::Delimiter => "Delimiter",
            TokenCategory::Literal => "Literal",
            TokenCategory::DataType => "Data Type",
            TokenCategory::Identifier => "Identifier",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    lexeme: String,
    category: TokenCategory,
}

impl Token {
    /// Classify `lexeme` and wrap it into a token.
    pub fn new(lexeme: impl Into<String>) -> Self {
        let lexeme = lexeme.into();
        let category = classify(&lexeme);
        Token { lexeme, category }
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn category(&self) -> TokenCategory {
        self.category
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.lexeme, self.category)
    }
}

/// Classify a single lexeme against the fixed tables.
///
/// Keywords are checked before data types, so `int` and `float` are always
/// [`TokenCategory::Keyword`] even though both tables contain them.
pub fn classify(lexeme: &str) -> TokenCategory {
    let tables = tables();

    if tables.keywords.contains(lexeme) {
        TokenCategory::Keyword
    } else if tables.operators.contains(lexeme) {
        TokenCategory::Operator
    } else if tables.delimiters.contains(lexeme) {
        TokenCategory::Delimiter
    } else if !lexeme.is_empty() && lexeme.chars().all(is_digit) {
        TokenCategory::Literal
    } else if tables.data_types.contains(lexeme) {
        TokenCategory::DataType
    } else {
        TokenCategory::Identifier
    }
}

/// Decimal digit in any script. Letter-numbers such as `Ⅻ` are alphabetic
/// and stay identifiers.
fn is_digit(c: char) -> bool {
    c.is_numeric() && !c.is_alphabetic()
}

/// Iterate over the raw, unclassified matches of the scan pattern.
///
/// Each match carries its byte range in `source`, which the source pane uses
/// for highlighting.
pub fn scan(source: &str) -> impl Iterator<Item = Match<'_>> + '_ {
    token_regex().find_iter(source)
}

/// Tokenize the entire input.
pub fn tokenize(source: &str) -> Vec<Token> {
    scan(source).map(|m| Token::new(m.as_str())).collect()
}
