/// Commands understood by the parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Load,
    Define, // :=, pseudo-command
    Number,
    Bool,
}

pub struct CommandClassifier<'a> {
    pub short_name: &'a str,
    pub long_name: &'a str,
    pub cmd: Command,
    pub arg_expected: bool,
    description: &'a str,
}

pub const COMMAND_CLASSIFIER : &[CommandClassifier] = &[
    CommandClassifier {
        short_name: "h",
        long_name: "help",
        cmd: Command::Help,
        arg_expected: false,
        description: "print this message.",
    },
    CommandClassifier {
        short_name: "l",
        long_name: "load",
        cmd: Command::Load,
        arg_expected: true,
        description: "evaluate all lines from a file.",
    },
    CommandClassifier {
        short_name: "n",
        long_name: "number",
        cmd: Command::Number,
        arg_expected: false,
        description: "evaluate an expression and read it as a numeral.",
    },
    CommandClassifier {
        short_name: "b",
        long_name: "bool",
        cmd: Command::Bool,
        arg_expected: false,
        description: "evaluate an expression and read it as a boolean.",
    },
];

pub fn print_usage() {
    println!(
"Church encodings and combinators.
Type an application of names and numerals, e.g. `add 3 4` or `B not not T`,
or bind a name with `name = expr`. Beware: `M M` never returns.

Available commands:"
    );
    for command in COMMAND_CLASSIFIER {
        println!(":{}, :{}\t{}",
                 command.short_name,
                 command.long_name,
                 command.description);
    }
}
