use crate::cmd::{
    Command,
    COMMAND_CLASSIFIER,
};

/// Tokens understood by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Invalid(char),
    Id(&'a str),
    Numeral(&'a str),
    Def,
    OpenParen,
    CloseParen,
    Command(Command),
}

/// Removes whitespace and line continuation token (if any) from the end
/// of a line, returning whether there was a line continuation token.
///
pub fn strip_whitespace_and_line_cont(line: &mut String) -> bool {
    while let Some(c) = line.chars().next_back() {
        if !c.is_whitespace() {
            break;
        }
        line.pop();
    }
    match line.chars().next_back() {
        Some('&') => {
            line.pop();
            true
        },
        _ => false,
    }
}

/// An iterator over the tokens of a string. Used by Parser.
///
/// Names start with a letter or '_' and may go on with digits, so `B1`
/// and `is0` are names; a word made only of digits is a numeral.
/// Comments start with '#' and extend until the end of line.
///
#[derive(Clone)]
pub struct TokenIter<'a> {
    s: &'a str,
    pos: usize,
    cmd_arg_expected: bool,
}

impl<'a> Iterator for TokenIter<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.consume_whitespace();

        let rest_of_string = self.rest_of_string();
        if rest_of_string.is_empty() {
            return None;
        }
        if self.cmd_arg_expected {
            self.cmd_arg_expected = false;
            self.pos += rest_of_string.len();
            let cmd_arg = rest_of_string.trim();
            if cmd_arg.is_empty() {
                return None;
            }
            return Some(Token::Id(cmd_arg));
        }

        let first_char = rest_of_string.chars().next()?;
        match first_char {
            ':' => {
                self.pos += 1; // skip ':'
                match self.get_command() {
                    Some(Command::Define) => Some(Token::Def),
                    Some(cmd) => Some(Token::Command(cmd)),
                    None => Some(Token::Invalid(first_char)),
                }
            },
            '#' => {
                // comment; skip to the end of line.
                self.pos = self.s.len();
                None
            },
            '=' => {
                self.pos += 1;
                Some(Token::Def)
            },
            '(' => {
                self.pos += 1;
                Some(Token::OpenParen)
            },
            ')' => {
                self.pos += 1;
                Some(Token::CloseParen)
            },
            c if c.is_ascii_digit() => {
                let len = rest_of_string
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .count();
                self.pos += len;
                Some(Token::Numeral(&rest_of_string[..len]))
            },
            _ => Some(self.handle_name_or_invalid()),
        }
    }
}

impl<'a> TokenIter<'a> {
    pub fn new(s: &'a str) -> TokenIter<'a> {
        TokenIter {
            s,
            pos: 0,
            cmd_arg_expected: false,
        }
    }

    fn rest_of_string(&self) -> &'a str {
        &self.s[self.pos..]
    }

    fn consume_whitespace(&mut self) {
        let rest_of_string = self.rest_of_string();
        for c in rest_of_string.chars() {
            if !c.is_whitespace() {
                break
            }
            self.pos += c.len_utf8();
        }
    }

    fn handle_name_or_invalid(&mut self) -> Token<'a> {
        let rest_of_string = self.rest_of_string();
        let (name_len, last_char) = self.get_next_name_and_last_char();

        if name_len == 0 {
            // we must increment position here too, otherwise we'll yield
            // the same invalid token forever.
            self.pos += last_char.len_utf8();
            Token::Invalid(last_char)
        } else {
            self.pos += name_len;
            Token::Id(&rest_of_string[0..name_len])
        }
    }

    fn get_command(&mut self) -> Option<Command> {
        let rest_of_string = self.rest_of_string();
        if let Some('=') = rest_of_string.chars().next() {
            self.pos += 1;
            return Some(Command::Define); // ":="
        }

        let (name_len, _) = self.get_next_name_and_last_char();
        let name = &rest_of_string[0..name_len];
        for class in COMMAND_CLASSIFIER {
            if name == class.short_name || name == class.long_name {
                self.pos += name.len();
                self.cmd_arg_expected = class.arg_expected;
                return Some(class.cmd);
            }
        }
        None
    }

    // a name is a letter or '_' followed by letters, digits, '_' or '\''.
    fn get_next_name_and_last_char(&self) -> (usize, char) {
        let rest_of_string = self.rest_of_string();
        let mut name_len = 0;
        let mut last_char: char = '\0';

        for c in rest_of_string.chars() {
            last_char = c;
            let allowed = if name_len == 0 {
                c.is_alphabetic() || c == '_'
            } else {
                c.is_alphanumeric() || c == '_' || c == '\''
            };
            if !allowed {
                break
            }
            name_len += c.len_utf8();
        }
        (name_len, last_char)
    }
}
