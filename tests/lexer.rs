use jspy::{
    error::ParseError,
    translator::{
        cursor::Cursor,
        lexer::{Lexer, Token},
    },
};

fn tokens(src: &str) -> Vec<Token> {
    Lexer::new(src).collect::<Result<Vec<_>, _>>()
                   .unwrap_or_else(|e| panic!("Lexing {src:?} failed: {e}"))
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

#[test]
fn function_definition_tokens() {
    assert_eq!(tokens("function add(a, b) { return a + b; }"),
               vec![Token::Function,
                    ident("add"),
                    Token::Punct('('),
                    ident("a"),
                    Token::Punct(','),
                    ident("b"),
                    Token::Punct(')'),
                    Token::Punct('{'),
                    Token::Return,
                    ident("a"),
                    Token::Punct('+'),
                    ident("b"),
                    Token::StatementEnd,
                    Token::Punct('}')]);
}

#[test]
fn keywords_need_whole_words() {
    assert_eq!(tokens("var if else return function"),
               vec![Token::Var, Token::If, Token::Else, Token::Return, Token::Function]);
    assert_eq!(tokens("variable iffy elsewhere returned functions _var"),
               vec![ident("variable"),
                    ident("iffy"),
                    ident("elsewhere"),
                    ident("returned"),
                    ident("functions"),
                    ident("_var")]);
}

#[test]
fn numbers() {
    assert_eq!(tokens("3.25 42 7. 0"),
               vec![Token::Number(3.25),
                    Token::Number(42.0),
                    Token::Number(7.0),
                    Token::Number(0.0)]);
    assert_eq!(tokens("x2"), vec![ident("x2")]);
}

#[test]
fn separators_collapse() {
    assert_eq!(tokens("a\n\n;\r\nb"), vec![ident("a"), Token::StatementEnd, ident("b")]);
    assert_eq!(tokens("a;b"), vec![ident("a"), Token::StatementEnd, ident("b")]);
    assert_eq!(tokens("a\r\nb"), vec![ident("a"), Token::StatementEnd, ident("b")]);
}

#[test]
fn comments_are_skipped() {
    assert_eq!(tokens("// only a comment"), vec![]);
    assert_eq!(tokens("// a comment\nx"), vec![Token::StatementEnd, ident("x")]);
    assert_eq!(tokens("x = 1 // trailing\ny"),
               vec![ident("x"),
                    Token::Punct('='),
                    Token::Number(1.0),
                    Token::StatementEnd,
                    ident("y")]);
}

#[test]
fn single_slash_is_an_operator() {
    assert_eq!(tokens("a / b"), vec![ident("a"), Token::Punct('/'), ident("b")]);
}

#[test]
fn unknown_characters_pass_through() {
    assert_eq!(tokens("a # @ €"),
               vec![ident("a"), Token::Punct('#'), Token::Punct('@'), Token::Punct('€')]);
}

#[test]
fn identifiers_may_use_unicode_letters() {
    assert_eq!(tokens("café = größe2 + _π"),
               vec![ident("café"), Token::Punct('='), ident("größe2"), Token::Punct('+'), ident("_π")]);
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(tokens(" \t a \x0C b\t"), vec![ident("a"), ident("b")]);
}

#[test]
fn malformed_number_is_reported_and_skipped() {
    let results: Vec<_> = Lexer::new("x = 1.2.3 + y").collect();

    assert_eq!(results.len(), 5);
    assert!(matches!(&results[2],
                     Err(ParseError::MalformedNumber { literal, line: 1, .. }) if literal == "1.2.3"));
    assert_eq!(results[3], Ok(Token::Punct('+')));
    assert_eq!(results[4], Ok(ident("y")));
}

#[test]
fn number_too_large_for_f64_is_malformed() {
    let digits = "9".repeat(400);
    let results: Vec<_> = Lexer::new(&format!("x = {digits}\ny")).collect();

    assert!(matches!(&results[2],
                     Err(ParseError::MalformedNumber { literal, line: 1, .. }) if *literal == digits));
    assert_eq!(results[3], Ok(Token::StatementEnd));
    assert_eq!(results[4], Ok(ident("y")));
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("a");

    assert_eq!(lexer.next_token(), Ok(ident("a")));
    assert_eq!(lexer.next_token(), Ok(Token::EndOfInput));
    assert_eq!(lexer.next_token(), Ok(Token::EndOfInput));
}

#[test]
fn tokens_know_their_line() {
    let mut lexer = Lexer::new("a\nb\n\nc");

    assert_eq!(lexer.next_token(), Ok(ident("a")));
    assert_eq!(lexer.line(), 1);
    assert_eq!(lexer.next_token(), Ok(Token::StatementEnd));
    assert_eq!(lexer.line(), 1);
    assert_eq!(lexer.next_token(), Ok(ident("b")));
    assert_eq!(lexer.line(), 2);
    assert_eq!(lexer.next_token(), Ok(Token::StatementEnd));
    assert_eq!(lexer.next_token(), Ok(ident("c")));
    assert_eq!(lexer.line(), 4);
    assert_eq!(lexer.line_text(), "c");
}

#[test]
fn cursor_peek_does_not_advance() {
    let mut cursor = Cursor::new("xy");

    assert_eq!(cursor.peek(), Some('x'));
    assert_eq!(cursor.peek(), Some('x'));
    assert_eq!(cursor.offset(), 0);
    assert_eq!(cursor.consume(), Some('x'));
    assert_eq!(cursor.consume(), Some('y'));
    assert_eq!(cursor.consume(), None);
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.offset(), 2);
}

#[test]
fn cursor_counts_lines() {
    let mut cursor = Cursor::new("one\r\ntwo\nthree\rfour");

    cursor.advance_to(5);
    assert_eq!(cursor.line(), 2);
    assert_eq!(cursor.current_line(), "two");

    cursor.advance_to(10);
    assert_eq!(cursor.line(), 3);
    assert_eq!(cursor.current_line(), "three");

    cursor.advance_to(16);
    assert_eq!(cursor.line(), 4);
    assert_eq!(cursor.current_line(), "four");
}

#[test]
fn cursor_never_moves_back() {
    let mut cursor = Cursor::new("abc");

    cursor.advance_to(2);
    cursor.advance_to(1);
    assert_eq!(cursor.offset(), 2);

    cursor.advance_to(100);
    assert_eq!(cursor.offset(), 3);
}

#[test]
fn cursor_line_on_terminator_belongs_to_the_line_it_ends() {
    let mut cursor = Cursor::new("first\nsecond");

    cursor.advance_to(5);
    assert_eq!(cursor.peek(), Some('\n'));
    assert_eq!(cursor.current_line(), "first");
}
