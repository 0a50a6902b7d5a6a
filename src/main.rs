mod cmd;
mod error;
mod lexer;
mod opt;
mod parser;
mod repl;

use parser::Parser;

fn main() {
    env_logger::init();

    let options = opt::parse_cmdline_options();
    let mut parser = Parser::new(options.max_numeral);
    if !opt::load_files(&options, &mut parser) {
        return;
    }
    repl::read_eval_print_loop(parser);
}
