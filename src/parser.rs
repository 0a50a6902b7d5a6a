use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use church_calc::{
    boolean, combinator, decode, numeral, pair, predicate,
    Term,
};
use log::debug;

use crate::cmd::{self, Command};
use crate::error::EvalError;
use crate::lexer::{self, Token, TokenIter};

/// Names that are always in scope. They cannot be redefined.
pub const BUILTIN_NAMES: &[&str] = &[
    "I", "M", "K", "KI", "C", "B", "Th", "V", "B1",
    "T", "F", "not", "and", "or", "beq",
    "zero", "once", "twice", "thrice", "succ", "add", "mult", "pow",
    "pair", "first", "second", "phi", "pred", "sub",
    "is0", "leq", "eq", "gt",
];

fn builtin(name: &str) -> Option<Term> {
    let term = match name {
        "I" => combinator::identity(),
        "M" => combinator::mockingbird(),
        "K" => combinator::kestrel(),
        "KI" => combinator::kite(),
        "C" => combinator::cardinal(),
        "B" => combinator::bluebird(),
        "Th" => combinator::thrush(),
        "V" => combinator::vireo(),
        "B1" => combinator::blackbird(),
        "T" => boolean::tru(),
        "F" => boolean::fls(),
        "not" => boolean::not(),
        "and" => boolean::and(),
        "or" => boolean::or(),
        "beq" => boolean::beq(),
        "zero" => numeral::zero(),
        "once" => numeral::once(),
        "twice" => numeral::twice(),
        "thrice" => numeral::thrice(),
        "succ" => numeral::succ(),
        "add" => numeral::add(),
        "mult" => numeral::multiply(),
        "pow" => numeral::power(),
        "pair" => pair::pair(),
        "first" => pair::first(),
        "second" => pair::second(),
        "phi" => pair::phi(),
        "pred" => pair::predecessor(),
        "sub" => pair::subtract(),
        "is0" => predicate::is_zero(),
        "leq" => predicate::leq(),
        "eq" => predicate::eq(),
        "gt" => predicate::gt(),
        _ => return None,
    };
    Some(term)
}

/// How an evaluated term should be shown.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Reading {
    Any,
    Number,
    Bool,
}

pub enum Outcome {
    Defined(String),
    Evaluated { term: Term, reading: Reading },
    Loaded(String),
    Help,
}

/// Evaluates lines of input against a table of user definitions.
///
/// There is no lambda syntax: a line applies names and numerals to each
/// other, left to right, as in `add 3 (mult 2 2)`.
pub struct Parser {
    symbol_table: HashMap<String, Term>,
    numeral_ceiling: u64,
}

impl Parser {
    pub fn new(numeral_ceiling: u64) -> Parser {
        Parser {
            symbol_table: HashMap::new(),
            numeral_ceiling,
        }
    }

    /// Evaluates the string given in `line`. Returns `None` for lines with
    /// nothing to do (empty or comment only).
    pub fn parse(&mut self, line: &str) -> Result<Option<Outcome>, EvalError> {
        let token_iter = TokenIter::new(line);
        let is_def = check_is_def(token_iter.clone());
        sanity_checks(token_iter.clone(), is_def)?;

        let mut tokens = token_iter;
        match tokens.clone().next() {
            None => Ok(None), // empty line, ignore.
            Some(Token::Command(cmd)) => {
                tokens.next();
                self.run_command(cmd, tokens).map(Some)
            },
            Some(_) if is_def => self.parse_def(tokens).map(Some),
            Some(_) => {
                let term = self.eval_expr(&mut tokens)?;
                Ok(Some(Outcome::Evaluated { term, reading: Reading::Any }))
            },
        }
    }

    /// Evaluates every line of a file, or of stdin if `filename` is None,
    /// printing the results. Stops at the first line that fails.
    pub fn parse_file(&mut self, filename: Option<&Path>) -> Result<(), EvalError> {
        let name = match filename {
            None => "stdin".to_string(),
            Some(path) => path.display().to_string(),
        };
        let contents = read_source(filename).map_err(|source| EvalError::Io {
            path: name.clone(),
            source,
        })?;

        let mut pending = String::new();
        let mut first_line = 1;
        for (i, line) in contents.lines().enumerate() {
            if pending.is_empty() {
                first_line = i + 1;
            }
            let mut line = line.to_string();
            let continues = lexer::strip_whitespace_and_line_cont(&mut line);
            pending.push_str(&line);
            if continues {
                pending.push(' ');
                continue;
            }
            self.parse_and_print(&pending, first_line)?;
            pending.clear();
        }
        if !pending.is_empty() {
            self.parse_and_print(&pending, first_line)?;
        }
        debug!("loaded {}", name);
        Ok(())
    }

    pub fn get_symbol_names_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = BUILTIN_NAMES
            .iter()
            .map(|s| s.to_string())
            .chain(self.symbol_table.keys().cloned())
            .filter(|name| name.starts_with(prefix))
            .collect();
        names.sort();
        names
    }

    fn parse_and_print(&mut self, line: &str, line_number: usize) -> Result<(), EvalError> {
        let outcome = self.parse(line).map_err(|e| EvalError::AtLine {
            line: line_number,
            source: Box::new(e),
        })?;
        if let Some(outcome) = outcome {
            print_outcome(&outcome);
        }
        Ok(())
    }

    fn run_command<'a, I>(&mut self, cmd: Command, mut tokens: I) -> Result<Outcome, EvalError>
        where I: Iterator<Item = Token<'a>>
    {
        match cmd {
            Command::Help => Ok(Outcome::Help),
            Command::Load => match tokens.next() {
                Some(Token::Id(path)) => {
                    self.parse_file(Some(Path::new(path)))?;
                    Ok(Outcome::Loaded(path.to_string()))
                },
                _ => Err(EvalError::MissingArgument("load")),
            },
            Command::Number => {
                let term = self.eval_expr(&mut tokens)?;
                Ok(Outcome::Evaluated { term, reading: Reading::Number })
            },
            Command::Bool => {
                let term = self.eval_expr(&mut tokens)?;
                Ok(Outcome::Evaluated { term, reading: Reading::Bool })
            },
            // the lexer turns ":=" into Token::Def
            Command::Define => Err(EvalError::BadDefinition),
        }
    }

    fn parse_def<'a, I>(&mut self, mut tokens: I) -> Result<Outcome, EvalError>
        where I: Iterator<Item = Token<'a>>
    {
        let name = match (tokens.next(), tokens.next()) {
            (Some(Token::Id(name)), Some(Token::Def)) => name,
            _ => return Err(EvalError::BadDefinition),
        };
        if builtin(name).is_some() {
            return Err(EvalError::BuiltinRedefined(name.to_string()));
        }
        let term = self.eval_expr(&mut tokens)?;
        debug!("defined {}", name);
        self.symbol_table.insert(name.to_string(), term);
        Ok(Outcome::Defined(name.to_string()))
    }

    // Application is left associative and evaluated as soon as each
    // argument is known. Stops at the end of input or at a ')'.
    fn eval_expr<'a, I>(&self, tokens: &mut I) -> Result<Term, EvalError>
        where I: Iterator<Item = Token<'a>>
    {
        let mut result: Option<Term> = None;
        loop {
            let atom = match tokens.next() {
                None | Some(Token::CloseParen) => break,
                Some(Token::OpenParen) => self.eval_expr(tokens)?,
                Some(Token::Id(name)) => self.lookup(name)?,
                Some(Token::Numeral(digits)) => self.numeral(digits)?,
                Some(Token::Invalid(c)) => return Err(EvalError::InvalidToken(c)),
                Some(Token::Def) => return Err(EvalError::BadDefinition),
                Some(Token::Command(_)) => return Err(EvalError::InvalidToken(':')),
            };
            result = Some(match result {
                None => atom,
                Some(f) => f.apply(atom),
            });
        }
        result.ok_or(EvalError::EmptyExpression)
    }

    fn lookup(&self, name: &str) -> Result<Term, EvalError> {
        builtin(name)
            .or_else(|| self.symbol_table.get(name).cloned())
            .ok_or_else(|| EvalError::UnknownName(name.to_string()))
    }

    fn numeral(&self, digits: &str) -> Result<Term, EvalError> {
        let too_large = || EvalError::NumeralTooLarge {
            literal: digits.to_string(),
            ceiling: self.numeral_ceiling,
        };
        let n: u64 = digits.parse().map_err(|_| too_large())?;
        if n > self.numeral_ceiling {
            return Err(too_large());
        }
        Ok(numeral::encode(n))
    }
}

pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Evaluated { term, reading } => println!("{}", describe(term, *reading)),
        Outcome::Help => cmd::print_usage(),
        Outcome::Defined(_) | Outcome::Loaded(_) => {},
    }
}

/// Renders a term the way `reading` asks. With `Reading::Any`, a term that
/// decodes as a numeral is shown as one (zero also reads as F), otherwise
/// as a boolean if it selects like one.
pub fn describe(term: &Term, reading: Reading) -> String {
    match reading {
        Reading::Number => match decode::to_number(term) {
            Some(n) => format!("= {}", n),
            None => "= <not a numeral>".to_string(),
        },
        Reading::Bool => match decode::to_bool(term) {
            Some(b) => format!("= {}", bool_name(b)),
            None => "= <not a boolean>".to_string(),
        },
        Reading::Any => {
            if term.is_value() {
                return "= <value>".to_string();
            }
            match (decode::to_number(term), decode::to_bool(term)) {
                (Some(0), _) => "= 0 | F".to_string(),
                (Some(n), _) => format!("= {}", n),
                (None, Some(b)) => format!("= {}", bool_name(b)),
                (None, None) => "= <function>".to_string(),
            }
        },
    }
}

fn bool_name(b: bool) -> &'static str {
    if b { "T" } else { "F" }
}

fn read_source(filename: Option<&Path>) -> io::Result<String> {
    match filename {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        },
    }
}

fn check_is_def<'a, I>(mut tokens: I) -> bool
    where I: Iterator<Item = Token<'a>>
{
    if let Some(Token::Id(_)) = tokens.next() {
        if let Some(Token::Def) = tokens.next() {
            return true;
        }
    }
    false
}

fn sanity_checks<'a, I>(tokens: I, is_def: bool) -> Result<(), EvalError>
    where I: Iterator<Item = Token<'a>>
{
    let mut paren_count: usize = 0;

    for (i, token) in tokens.enumerate() {
        match token {
            Token::Invalid(c) => return Err(EvalError::InvalidToken(c)),
            Token::OpenParen => paren_count += 1,
            Token::CloseParen => {
                if paren_count == 0 {
                    return Err(EvalError::ExtraCloseParen);
                }
                paren_count -= 1;
            },
            Token::Def => {
                if !is_def || i != 1 {
                    return Err(EvalError::BadDefinition);
                }
            },
            Token::Command(_) => {
                if i != 0 {
                    return Err(EvalError::InvalidToken(':'));
                }
            },
            _ => {},
        }
    }
    if paren_count > 0 {
        return Err(EvalError::UnclosedParen(paren_count));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> Parser {
        Parser::new(numeral::DEFAULT_CEILING)
    }

    fn eval(parser: &mut Parser, line: &str) -> String {
        match parser.parse(line) {
            Ok(Some(Outcome::Evaluated { term, reading })) => describe(&term, reading),
            Ok(_) => panic!("'{}' did not evaluate to anything", line),
            Err(e) => panic!("'{}' failed: {}", line, e),
        }
    }

    fn eval_err(line: &str) -> EvalError {
        match parser().parse(line) {
            Err(e) => e,
            Ok(_) => panic!("'{}' should have failed", line),
        }
    }

    #[test]
    fn empty_line() {
        assert!(parser().parse("").unwrap().is_none());
        assert!(parser().parse("   # just a comment").unwrap().is_none());
    }

    #[test]
    fn every_builtin_resolves() {
        for name in BUILTIN_NAMES {
            assert!(builtin(name).is_some(), "{} is not a builtin", name);
        }
    }

    #[test]
    fn arithmetic() {
        let mut p = parser();
        assert_eq!(eval(&mut p, "add 3 4"), "= 7");
        assert_eq!(eval(&mut p, "mult 2 3"), "= 6");
        assert_eq!(eval(&mut p, "pow 3 2"), "= 9");
        assert_eq!(eval(&mut p, "pred 5"), "= 4");
        assert_eq!(eval(&mut p, "sub 2 5"), "= 0 | F");
        assert_eq!(eval(&mut p, "succ (succ (succ zero))"), "= 3");
    }

    #[test]
    fn booleans() {
        let mut p = parser();
        assert_eq!(eval(&mut p, "and T T"), "= T");
        assert_eq!(eval(&mut p, "or F F"), "= 0 | F");
        assert_eq!(eval(&mut p, ":b or F F"), "= F");
        assert_eq!(eval(&mut p, ":bool B not not T"), "= T");
        assert_eq!(eval(&mut p, ":b leq 2 3"), "= T");
        assert_eq!(eval(&mut p, ":b gt 2 3"), "= F");
        assert_eq!(eval(&mut p, ":b B1 not leq 3 2"), "= T");
    }

    #[test]
    fn explicit_number_reading() {
        let mut p = parser();
        assert_eq!(eval(&mut p, ":n F"), "= 0");
        assert_eq!(eval(&mut p, ":number B (add 1) succ 3"), "= 5");
        assert_eq!(eval(&mut p, ":n K"), "= <not a numeral>");
    }

    #[test]
    fn functions_without_reading() {
        let mut p = parser();
        assert_eq!(eval(&mut p, "K"), "= T");
        assert_eq!(eval(&mut p, "mult"), "= <function>");
        assert_eq!(eval(&mut p, "C"), "= <function>");
    }

    #[test]
    fn definitions() {
        let mut p = parser();
        match p.parse("three = succ twice") {
            Ok(Some(Outcome::Defined(name))) => assert_eq!(name, "three"),
            _ => panic!("expected a definition"),
        }
        p.parse("nand := B1 not and").unwrap();
        assert_eq!(eval(&mut p, "mult three three"), "= 9");
        assert_eq!(eval(&mut p, ":b nand T T"), "= F");
        assert_eq!(eval(&mut p, ":b nand T F"), "= T");
        assert_eq!(p.get_symbol_names_with_prefix("na"), vec!["nand".to_string()]);
    }

    #[test]
    fn symbol_completion_includes_builtins() {
        let names = parser().get_symbol_names_with_prefix("s");
        assert_eq!(names, vec!["second", "sub", "succ"]);
    }

    #[test]
    fn help_command() {
        match parser().parse(":h") {
            Ok(Some(Outcome::Help)) => {},
            _ => panic!("expected help"),
        }
    }

    #[test]
    fn unknown_name() {
        match eval_err("add three 4") {
            EvalError::UnknownName(name) => assert_eq!(name, "three"),
            e => panic!("unexpected error {}", e),
        }
    }

    #[test]
    fn parentheses_errors() {
        assert!(matches!(eval_err("add (succ 2"), EvalError::UnclosedParen(1)));
        assert!(matches!(eval_err("add 2) 3"), EvalError::ExtraCloseParen));
        assert!(matches!(eval_err("add () 3"), EvalError::EmptyExpression));
    }

    #[test]
    fn definition_errors() {
        assert!(matches!(eval_err("x = "), EvalError::EmptyExpression));
        assert!(matches!(eval_err("x y = K"), EvalError::BadDefinition));
        assert!(matches!(eval_err("= K"), EvalError::BadDefinition));
        assert!(matches!(eval_err("K = I"), EvalError::BuiltinRedefined(_)));
    }

    #[test]
    fn invalid_token() {
        assert!(matches!(eval_err("\\x . x"), EvalError::InvalidToken('\\')));
        assert!(matches!(eval_err("add :n 2"), EvalError::InvalidToken(':')));
    }

    #[test]
    fn load_needs_argument() {
        assert!(matches!(eval_err(":load"), EvalError::MissingArgument("load")));
    }

    #[test]
    fn load_missing_file() {
        let err = eval_err(":load /nonexistent/church/file");
        assert!(matches!(err, EvalError::Io { .. }));
    }

    #[test]
    fn load_file_with_definitions() {
        let path = std::env::temp_dir().join(format!("church_calc_test_{}.church", std::process::id()));
        fs::write(&path, "# numbers\nsix = mult 2 &\n  3\nseven = succ six\n").unwrap();
        let mut p = parser();
        let line = format!(":load {}", path.display());
        match p.parse(&line) {
            Ok(Some(Outcome::Loaded(_))) => {},
            Ok(_) => panic!("expected the file to load"),
            Err(e) => panic!("load failed: {}", e),
        }
        fs::remove_file(&path).unwrap();
        assert_eq!(eval(&mut p, "seven"), "= 7");
    }

    #[test]
    fn load_reports_failing_line() {
        let path = std::env::temp_dir().join(format!("church_calc_bad_{}.church", std::process::id()));
        fs::write(&path, "one = succ zero\n\ntwo = succ one one)\n").unwrap();
        let err = parser().parse_file(Some(path.as_path())).unwrap_err();
        fs::remove_file(&path).unwrap();
        match err {
            EvalError::AtLine { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(*source, EvalError::ExtraCloseParen));
            },
            e => panic!("unexpected error {}", e),
        }
    }

    #[test]
    fn numeral_ceiling() {
        let mut p = Parser::new(10);
        assert_eq!(eval(&mut p, "10"), "= 10");
        assert!(matches!(p.parse("11"), Err(EvalError::NumeralTooLarge { ceiling: 10, .. })));
        assert!(matches!(
            p.parse("99999999999999999999999"),
            Err(EvalError::NumeralTooLarge { .. })
        ));
    }
}
