//! Output formatting for CLI command results.

use serde::Serialize;

/// A command result printable for people or as JSON
pub trait CommandOutput: Serialize {
    /// Plain-text rendering for a terminal
    fn to_human(&self) -> String;

    /// Structured rendering for `--json`
    fn to_json(&self) -> serde_json::Value;
}

/// Render a command result in the requested mode
pub fn render<T: CommandOutput>(result: &T, json_mode: bool) -> String {
    if json_mode {
        serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
    } else {
        result.to_human()
    }
}

/// Print a command result to stdout
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    println!("{}", render(result, json_mode));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Greeting {
        message: &'static str,
    }

    impl CommandOutput for Greeting {
        fn to_human(&self) -> String {
            self.message.to_string()
        }

        fn to_json(&self) -> serde_json::Value {
            serde_json::to_value(self).unwrap_or_default()
        }
    }

    #[test]
    fn test_render_modes() {
        let greeting = Greeting { message: "hello" };
        assert_eq!(render(&greeting, false), "hello");

        let json: serde_json::Value = serde_json::from_str(&render(&greeting, true)).unwrap();
        assert_eq!(json["message"], "hello");
    }
}
