mod error;

use error::Error;
use osf_compute::{
    fmt::{abbreviate, term_to_string, RenderOptions},
    ordinal::{dom, fund, hydra_sequence, less_than},
};
use osf_parser::parser::{parse_term, term::Term};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}, ops::Range};

/// Renders a term for display under the current options.
fn render(term: &Term, options: RenderOptions) -> String {
    let out = abbreviate(&term_to_string(term, options), options);
    if options.tex {
        format!("${}$", out)
    } else {
        out
    }
}

/// Parses the slice of `input` covered by `range`, shifting any error span so it points into the
/// full line.
fn parse_operand(input: &str, range: Range<usize>) -> Result<Term, Error> {
    parse_term(&input[range.clone()]).map_err(|mut err| {
        err.span.start += range.start;
        err.span.end += range.start;
        Error::from(err)
    })
}

/// Turns one of the option names on or off, returning the text to print in response.
fn set_flag(options: &mut RenderOptions, name: &str, value: bool) -> String {
    let target = match name {
        "omega" => &mut options.omega_lower,
        "Omega" => &mut options.omega_upper,
        "subscript" => &mut options.subscript,
        "brace" => &mut options.always_brace,
        "dropzero" => &mut options.drop_zero_sub,
        "tex" => &mut options.tex,
        _ => return format!(
            "unknown option `{}`; available options are omega, Omega, subscript, brace, dropzero, tex",
            name,
        ),
    };
    *target = value;
    format!("{} {}", name, if value { "on" } else { "off" })
}

/// Evaluates one line of input, returning the text to print.
fn evaluate(input: &str, options: &mut RenderOptions) -> Result<String, Error> {
    if let Some(name) = input.strip_prefix("set ") {
        return Ok(set_flag(options, name.trim(), true));
    }
    if let Some(name) = input.strip_prefix("unset ") {
        return Ok(set_flag(options, name.trim(), false));
    }

    if let Some(rest) = input.strip_prefix("dom") {
        // `dom` is only a command when it stands alone as a word
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            if rest.trim().is_empty() {
                return Err(Error::missing_operand(
                    input.len()..input.len(),
                    "an ordinal to take the degree of",
                ));
            }
            let term = parse_operand(input, input.len() - rest.len()..input.len())?;
            return Ok(render(&dom(&term), *options));
        }
    }

    if let Some(rest) = input.strip_prefix("hydra") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            if rest.trim().is_empty() {
                return Err(Error::missing_operand(
                    input.len()..input.len(),
                    "an ordinal to encode",
                ));
            }
            let term = parse_operand(input, input.len() - rest.len()..input.len())?;
            return Ok(match hydra_sequence(&term) {
                Some(nodes) => nodes
                    .iter()
                    .map(|node| format!("({},{})", node.depth, node.label))
                    .collect::<Vec<_>>()
                    .join(" "),
                None => String::from("no hydra form: every subscript must be a numeral"),
            });
        }
    }

    if let Some(pos) = input.find('<') {
        let rhs_range = pos + 1..input.len();
        if input[rhs_range.clone()].trim().is_empty() {
            return Err(Error::missing_operand(
                rhs_range,
                "an ordinal to compare against",
            ));
        }
        let lhs = parse_operand(input, 0..pos)?;
        let rhs = parse_operand(input, rhs_range)?;
        return Ok(less_than(&lhs, &rhs).to_string());
    }

    if let Some(open) = input.find('[') {
        if !input.ends_with(']') {
            return Err(Error::missing_operand(
                input.len()..input.len(),
                "a closing `]`",
            ));
        }
        let inner = open + 1..input.len() - 1;
        if input[inner.clone()].trim().is_empty() {
            return Err(Error::missing_operand(
                inner,
                "an index for the fundamental sequence",
            ));
        }
        let base = parse_operand(input, 0..open)?;
        let index = parse_operand(input, inner)?;
        let result = fund(&base, &index)
            .map_err(|kind| Error::compute(0..input.len(), kind))?;
        return Ok(render(&result, *options));
    }

    // a bare term parses and echoes back in canonical form
    let term = parse_operand(input, 0..input.len())?;
    Ok(render(&term, *options))
}

/// Evaluates the given line of input, printing the success or failure.
fn read_eval(input: &str, options: &mut RenderOptions) {
    match evaluate(input, options) {
        Ok(out) => println!("{}", out),
        Err(err) => err.report_to_stderr(input),
    }
}

/// Executes the given input, line by line, with a fresh set of options.
fn execute(input: String) {
    let mut options = RenderOptions::default();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        read_eval(line, &mut options);
    }
}

fn main() {
    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run source file
        let mut file = BufReader::new(File::open(filename).unwrap());
        let mut input = String::new();
        file.read_to_string(&mut input).unwrap();

        execute(input);
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).unwrap();

        execute(input);
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new().unwrap();
        let mut options = RenderOptions::default();

        fn process_line(
            rl: &mut DefaultEditor,
            options: &mut RenderOptions,
        ) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            let input = input.trim();
            if input.is_empty() {
                return Ok(());
            }

            rl.add_history_entry(input)?;

            read_eval(input, options);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut options) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fundamental_sequence_command() {
        let mut options = RenderOptions::default();
        assert_eq!(evaluate("w[3]", &mut options).unwrap(), "3");
        assert_eq!(evaluate("亞(0,w)[2]", &mut options).unwrap(), "亞(0,2)");
    }

    #[test]
    fn comparison_command() {
        let mut options = RenderOptions::default();
        assert_eq!(evaluate("w < W", &mut options).unwrap(), "true");
        assert_eq!(evaluate("W < w", &mut options).unwrap(), "false");
    }

    #[test]
    fn degree_command() {
        let mut options = RenderOptions::default();
        assert_eq!(evaluate("dom 3", &mut options).unwrap(), "1");
        assert_eq!(evaluate("dom w+w", &mut options).unwrap(), "亞(0,1)");
    }

    #[test]
    fn bare_terms_echo_canonically() {
        let mut options = RenderOptions::default();
        assert_eq!(evaluate("亞_{0}(0)", &mut options).unwrap(), "1");
        assert_eq!(evaluate("A(1,0)", &mut options).unwrap(), "亞(1,0)");
    }

    #[test]
    fn hydra_command() {
        let mut options = RenderOptions::default();
        assert_eq!(evaluate("hydra 亞_2(亞_0(0))", &mut options).unwrap(), "(0,2) (1,0)");
        assert_eq!(
            evaluate("hydra 亞(w,0)", &mut options).unwrap(),
            "no hydra form: every subscript must be a numeral",
        );
    }

    #[test]
    fn options_persist_between_lines() {
        let mut options = RenderOptions::default();
        assert_eq!(evaluate("set omega", &mut options).unwrap(), "omega on");
        assert_eq!(evaluate("w", &mut options).unwrap(), "ω");
        assert_eq!(evaluate("unset omega", &mut options).unwrap(), "omega off");
        assert_eq!(evaluate("w", &mut options).unwrap(), "亞(0,1)");
    }

    #[test]
    fn missing_operands_are_rejected() {
        let mut options = RenderOptions::default();
        assert!(matches!(
            evaluate("w[]", &mut options),
            Err(Error::MissingOperand(_)),
        ));
        assert!(matches!(
            evaluate("w <", &mut options),
            Err(Error::MissingOperand(_)),
        ));
        assert!(matches!(
            evaluate("dom", &mut options),
            Err(Error::MissingOperand(_)),
        ));
    }
}
