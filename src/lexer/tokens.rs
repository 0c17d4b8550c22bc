use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("fi", TokenKind::Fi);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("do", TokenKind::Do);
        map.insert("od", TokenKind::Od);
        map.insert("skip", TokenKind::Skip);
        map.insert("repeat", TokenKind::Repeat);
        map.insert("until", TokenKind::Until);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("fun", TokenKind::Fun);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    CharLiteral,
    StringLiteral,
    Identifier,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,

    Plus,
    Dash,
    Slash,
    Percent,
    Star,

    Or,  // !!
    And, // &&

    Equals,        // ==
    NotEquals,     // !=
    LessEquals,    // <=
    GreaterEquals, // >=
    Less,
    Greater,

    Not, // !

    Comma,
    Semicolon,
    Assignment, // :=

    // Reserved
    If,
    Then,
    Elif,
    Else,
    Fi,
    While,
    For,
    Do,
    Od,
    Skip,
    Repeat,
    Until,
    Begin,
    End,
    Fun,
    Return,
    True,
    False,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            TokenKind::EOF => "end of input",
            TokenKind::Number => "number",
            TokenKind::CharLiteral => "char literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::OpenBracket => "`[`",
            TokenKind::CloseBracket => "`]`",
            TokenKind::Plus => "`+`",
            TokenKind::Dash => "`-`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Star => "`*`",
            TokenKind::Or => "`!!`",
            TokenKind::And => "`&&`",
            TokenKind::Equals => "`==`",
            TokenKind::NotEquals => "`!=`",
            TokenKind::LessEquals => "`<=`",
            TokenKind::GreaterEquals => "`>=`",
            TokenKind::Less => "`<`",
            TokenKind::Greater => "`>`",
            TokenKind::Not => "`!`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Assignment => "`:=`",
            TokenKind::If => "`if`",
            TokenKind::Then => "`then`",
            TokenKind::Elif => "`elif`",
            TokenKind::Else => "`else`",
            TokenKind::Fi => "`fi`",
            TokenKind::While => "`while`",
            TokenKind::For => "`for`",
            TokenKind::Do => "`do`",
            TokenKind::Od => "`od`",
            TokenKind::Skip => "`skip`",
            TokenKind::Repeat => "`repeat`",
            TokenKind::Until => "`until`",
            TokenKind::Begin => "`begin`",
            TokenKind::End => "`end`",
            TokenKind::Fun => "`fun`",
            TokenKind::Return => "`return`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
        };

        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// Whether the token carries meaningful text beyond its kind.
    pub fn has_payload(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::Number,
            TokenKind::CharLiteral,
            TokenKind::StringLiteral,
            TokenKind::Identifier,
        ])
    }

    pub fn debug(&self) {
        if self.has_payload() {
            println!("{:?} ({})", self.kind, self.value);
        } else {
            println!("{:?} ()", self.kind);
        }
    }
}
