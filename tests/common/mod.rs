pub use lexstream::diagnostic::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type TestResult = std::result::Result<(), String>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub mod test_lexicon {

    use lexstream::lexing::patterns;
    use lexstream::*;

    pub fn compile(lexicon: Lexicon) -> Lexer {
        super::init_logging();
        Lexer::new(lexicon).unwrap()
    }

    pub fn parens() -> Lexer {
        compile(
            Lexicon::new()
                .rule(r"\s+", "WS")
                .rule(r"\(", "LP")
                .rule(r"\)", "RP")
                .rule(r"\w+", "WORD"),
        )
    }

    pub fn words_skipping_whitespace() -> Lexer {
        compile(Lexicon::new().skip(r"\s+").rule(r"\w+", "WORD"))
    }

    pub fn attributes() -> Lexer {
        compile(
            Lexicon::new()
                .rule(patterns::STRING, "T_WORD")
                .rule(patterns::OPEN_PARENTHESIS, "T_OPEN_PARENTHESIS")
                .rule(patterns::CLOSE_PARENTHESIS, "T_CLOSE_PARENTHESIS")
                .rule(patterns::EQUALS, "T_EQUALS")
                .rule(patterns::DOUBLE_QUOTE, "T_DOUBLE_QUOTE"),
        )
    }

    pub fn template() -> Lexer {
        compile(
            Lexicon::new()
                .rule(patterns::WHITESPACE, "T_WHITESPACE")
                .rule(patterns::SLASH, "T_FORWARD_SLASH")
                .rule(";T_NEWLINE;", "T_NEWLINE")
                .rule(patterns::ESCAPE_CHAR, "T_ESCAPE")
                .rule(patterns::DOT, "T_DOT")
                .rule(patterns::HASH, "T_HASH")
                .rule(patterns::COLON, "T_COLON")
                .rule(patterns::SEMICOLON, "T_SEMICOLON")
                .rule(patterns::EQUALS, "T_EQUALS")
                .rule(patterns::DOUBLE_QUOTE, "T_DOUBLE_QUOTE")
                .rule(patterns::SINGLE_QUOTE, "T_SINGLE_QUOTE")
                .rule(patterns::EXCLAMATION_MARK, "T_EXCLAMATION_MARK")
                .rule(patterns::OPEN_PARENTHESIS, "T_OPEN_PARENTHESIS")
                .rule(patterns::CLOSE_PARENTHESIS, "T_CLOSE_PARENTHESIS")
                .rule(patterns::OPEN_CURLY, "T_OPEN_CURLY")
                .rule(patterns::CLOSE_CURLY, "T_CLOSE_CURLY")
                .rule(patterns::STRING, "T_STRING"),
        )
    }

    /// The template text with every line break replaced by a marker token,
    /// so newlines can be matched by an ordinary rule.
    pub fn template_source() -> String {
        let text = "html(lang=\"en_IE\") {
    // child nodes \\ are inside curly brackets!
    head() {
        title(): This is a title;
        link(src=\"./style.css\");
        script(src=\"./main.js\");
    }

    body.app#app() {
        h1.title(): Page title;
    }
}";
        text.replace("\r\n", "\n")
            .split('\n')
            .collect::<Vec<_>>()
            .join(";T_NEWLINE;")
    }
}

#[allow(dead_code)]
pub mod test_token {

    use lexstream::lexing::*;

    pub fn test(kind: &str, value: &str, offset: usize) -> Token {
        Token::new(value, kind, offset)
    }

    pub fn kinds(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.kind.as_str()).collect()
    }
}

#[allow(dead_code)]
pub struct DiagnosticCapture {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

#[allow(dead_code)]
impl DiagnosticCapture {
    pub fn unwrap(&mut self) -> Vec<Diagnostic> {
        let captured = RefCell::new(Vec::new());
        self.diagnostics.swap(&captured);
        captured.into_inner()
    }
}

#[allow(dead_code)]
pub struct TestReporter {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

#[allow(dead_code)]
impl TestReporter {
    pub fn new() -> (TestReporter, DiagnosticCapture) {
        let diagnostics = Rc::new(RefCell::new(Vec::new()));
        (
            TestReporter {
                diagnostics: Rc::clone(&diagnostics),
            },
            DiagnosticCapture { diagnostics },
        )
    }
}

impl Reporter for TestReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

#[allow(dead_code)]
pub fn assert_slices_equal<T, U>(
    kind: &str,
    got: &[T],
    expected: &[T],
    test: U,
    list: &str,
) -> TestResult
where
    T: std::fmt::Display,
    U: Fn(&T, &T) -> bool,
{
    if got.len() != expected.len() {
        let one_line = format!("Expected {} {}, got {}", expected.len(), kind, got.len());
        println!("{}\n{}", &one_line, list);
        return Err(one_line);
    }

    for (lhs, rhs) in got.iter().zip(expected) {
        if !test(lhs, rhs) {
            println!("Expected:\n  {}\nGot:\n  {}", rhs, lhs);
            return Err(String::from("Unexpected item"));
        }
    }

    Ok(())
}
