//! Prompt assembly from arguments and piped stdin.

use std::io::{self, IsTerminal, Read};

/// Reads all of stdin when it is a pipe or file, `None` on a terminal.
pub fn read_piped_stdin() -> io::Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut input = String::new();
    stdin.lock().read_to_string(&mut input)?;
    Ok(Some(input))
}

/// Builds the prompt sent to the provider.
///
/// With non-empty piped input the prompt is the piped text, a blank line, and
/// the arguments as instructions. Otherwise the arguments alone form the
/// prompt. Leading and trailing whitespace is trimmed either way.
pub fn build_prompt(piped: Option<&str>, args: &[String]) -> String {
    let instructions = args.join(" ");
    match piped.filter(|p| !p.is_empty()) {
        Some(piped) => format!("{piped}\n\n{instructions}").trim().to_string(),
        None => instructions.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_piped_input_then_instructions() {
        assert_eq!(
            build_prompt(Some("total 0"), &args(&["summarize"])),
            "total 0\n\nsummarize"
        );
    }

    #[test]
    fn test_piped_input_without_instructions_is_trimmed() {
        assert_eq!(build_prompt(Some("line one\n"), &[]), "line one");
    }

    #[test]
    fn test_args_are_joined_with_spaces() {
        assert_eq!(
            build_prompt(None, &args(&["what", "is", "rust?"])),
            "what is rust?"
        );
    }

    #[test]
    fn test_empty_pipe_falls_back_to_args() {
        assert_eq!(build_prompt(Some(""), &args(&["hello"])), "hello");
    }

    #[test]
    fn test_nothing_resolves_to_empty() {
        assert_eq!(build_prompt(None, &[]), "");
        assert_eq!(build_prompt(Some(""), &[]), "");
    }
}
