//! Regex fragments for common symbols, ready to use as rule patterns.

// Special characters
pub const ESCAPE_CHAR: &str = r"\\";
pub const WHITESPACE: &str = r"\s+";
pub const NEWLINE: &str = r"\r?\n";
pub const TAB: &str = r"\t";

// Miscellaneous symbols
pub const STAR: &str = r"\*";
pub const SLASH: &str = r"/";
pub const PERCENT_SIGN: &str = "%";
pub const HYPHEN: &str = "-";
pub const DOT: &str = r"\.";
pub const HASH: &str = "#";
pub const AT: &str = "@";
pub const TILDE: &str = "~";
pub const COMMA: &str = ",";
pub const BACKTICK: &str = "`";

// Currency symbols
pub const DOLLAR: &str = r"\$";
pub const EURO: &str = "€";
pub const POUND: &str = "£";

// Arithmetic
pub const DECIMAL_POINT: &str = r"\.";
pub const EQUALS: &str = "=";
pub const MULTIPLY: &str = r"\*";
pub const DIVIDE: &str = r"/";
pub const PLUS: &str = r"\+";
pub const MINUS: &str = "-";
pub const MODULUS: &str = "%";

// Logical operators
pub const OR: &str = r"\|\|";
pub const AND: &str = "&&";
pub const NOT: &str = "!";

// Programming punctuation
pub const VAR: &str = r"\$";
pub const UNDERSCORE: &str = "_";
pub const COLON: &str = ":";
pub const SEMICOLON: &str = ";";
pub const PIPE: &str = r"\|";
pub const AMPERSAND: &str = "&";
pub const CARET: &str = r"\^";
pub const EXCLAMATION_MARK: &str = "!";
pub const QUESTION_MARK: &str = r"\?";
pub const OPEN_PARENTHESIS: &str = r"\(";
pub const CLOSE_PARENTHESIS: &str = r"\)";
pub const OPEN_CURLY: &str = r"\{";
pub const CLOSE_CURLY: &str = r"\}";
pub const OPEN_SQUARE: &str = r"\[";
pub const CLOSE_SQUARE: &str = r"\]";
pub const DOUBLE_QUOTE: &str = "\"";
pub const SINGLE_QUOTE: &str = "'";

pub const STRING: &str = r"\w+";
pub const NUMBER: &str = r"\d+";
