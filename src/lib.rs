#![allow(clippy::needless_return)]

//! Slate is a small dynamically typed scripting language with lexical
//! scoping, first-class functions, closures and single-inheritance
//! classes. The implementation is a tree-walk interpreter with a
//! hand-written recursive descent parser.
//!
//! ## Scanning
//! Scanning turns the source text into a flat list of tokens. The scanner
//! in the [`scanner`](scanner) module makes a single forward pass over the
//! characters, tracking the current line so every token and every
//! diagnostic can point back into the source. Problems at this stage are
//! trivial ones, like an unterminated string or a stray character, and are
//! reported as a [`ScanError`](error::ScanError) without stopping the
//! scan, so one bad character does not hide the next.
//!
//! ## Parsing
//! The parser in the [`parser`](parser) module builds the abstract syntax
//! tree out of the token list. [`Expressions`](expr::Expr) are pieces of
//! code that produce a value; [`statements`](stmt::Stmt) perform an action
//! such as declaring a variable or running a loop. Each grammar rule is a
//! method, and precedence falls out of which method calls which. Syntactic
//! sugar is compiled away here: a `for` loop leaves the parser as a plain
//! while loop wrapped in blocks. On a syntax error the parser reports a
//! [`ParseError`](error::ParseError) and synchronizes at the next
//! statement boundary so it can keep going and report more.
//!
//! ## Resolving
//! Between parsing and execution the [`resolver`](resolver) walks the tree
//! once and computes, for every variable reference, how many scopes away
//! its binding lives. The interpreter later uses those distances instead
//! of searching by name, which is what makes closures capture the binding
//! they saw rather than whatever happens to share its name at call time.
//! The resolver is also where code that is grammatically fine but
//! semantically wrong is rejected: reading a local in its own initializer,
//! declaring the same local twice, `return` outside a function, `this`
//! outside a class, `super` without a superclass, or `break` outside a
//! loop. These surface as [`ResolveError`](error::ResolveError)s.
//!
//! ## Interpreting
//! The [`interpreter`](interpreter) module evaluates the resolved tree
//! directly. Values are [`Object`](object::Object)s: literals, functions,
//! native functions, classes and instances. Scopes are a chain of
//! [`Environment`](environment::Environment)s; calling a function extends
//! the chain from the function's captured closure, which is all a closure
//! is. Errors that can only be caught while the program runs, like adding
//! a string to a number or calling something that is not callable, are
//! reported as [`RuntimeError`](error::RuntimeError)s and abort the
//! program with exit code 70.

use std::fs;
use std::io::Write;
use std::process;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub mod error;
pub mod token;
pub mod literal;
pub mod scanner;
pub mod expr;
pub mod stmt;
pub mod parser;
pub mod ast;
pub mod resolver;
pub mod interpreter;
pub mod environment;
pub mod object;
pub mod function;
pub mod class;

use ast::ASTPrinter;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// The processing mode selected on the command line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    /// Print the token stream.
    Tokenize,
    /// Print a single expression in parenthesized prefix form.
    Parse,
    /// Run the program.
    Interpret,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Command> {
        match name {
            "tokenize" => Some(Command::Tokenize),
            "parse" => Some(Command::Parse),
            "interpret" => Some(Command::Interpret),
            _ => None,
        }
    }
}

/// The pipeline driver. Owns the interpreter (and through it the output
/// writer) so that state survives across prompt lines.
#[allow(non_camel_case_types)]
pub struct slate<'a> {
    interpreter: Interpreter<'a>,
}

impl<'a> slate<'a> {
    /// Creates a new driver writing program output to `out`. Diagnostics
    /// always go to stderr.
    pub fn new(out: &'a mut dyn Write) -> Self {
        slate {
            interpreter: Interpreter::new(out),
        }
    }

    /// Processes a source file, then exits with 65 on a compile-time error
    /// or 70 on a runtime error.
    pub fn run_file(&mut self, command: Command, path: String) {
        let contents = fs::read_to_string(path).expect("source file to be readable");

        self.run(command, &contents);

        if error::did_compile_error() {
            process::exit(65);
        }
        if error::did_runtime_error() {
            process::exit(70);
        }
    }

    /// Reads lines from an interactive prompt until Ctrl-C or Ctrl-D.
    /// Errors are reported but do not end the session, and bare expression
    /// statements echo their value.
    pub fn run_prompt(&mut self, command: Command) {
        let mut editor = DefaultEditor::new().expect("line editor to initialize");

        let history = home::home_dir().map(|dir| dir.join(".slate_history"));
        if let Some(history) = &history {
            let _ = editor.load_history(history);
        }

        self.interpreter.repl = true;

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(&line);

                    self.run(command, &line);
                    error::reset_error();
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(error) => {
                    eprintln!("{error}");
                    break;
                },
            }
        }

        if let Some(history) = &history {
            let _ = editor.save_history(history);
        }
    }

    /// Runs one unit of source through the pipeline. Each stage is skipped
    /// once an earlier one has reported an error.
    fn run(&mut self, command: Command, source: &str) {
        let mut scanner = Scanner::new(source);
        let tokens = scanner.scan_tokens();

        if command == Command::Tokenize {
            // The token stream is printed even when scanning reported
            // errors; the exit code still signals them.
            for token in &tokens {
                writeln!(self.interpreter.out, "{token}").expect("write to output");
            }
            return;
        }

        if error::did_error() {
            return;
        }

        let mut parser = Parser::new(tokens);

        if command == Command::Parse {
            if let Some(expression) = parser.parse_expression() {
                writeln!(self.interpreter.out, "{}", ASTPrinter.print(&expression))
                    .expect("write to output");
            }
            return;
        }

        let statements = parser.parse();

        if error::did_error() {
            return;
        }

        let mut resolver = Resolver::new(&mut self.interpreter);
        resolver.resolve(&statements);

        if error::did_error() {
            return;
        }

        self.interpreter.interpret(&statements);
    }
}
