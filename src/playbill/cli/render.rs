//! Turns a [`Transcript`] into terminal text.
//!
//! Notices are printed plain, diagnostics dimmed, separators dimmed. Color is
//! decided by the caller so rendering stays testable.

use colored::Colorize;
use playbill::transcript::{Line, LineKind, Transcript};

pub fn render_transcript(transcript: &Transcript, use_color: bool) -> String {
    let mut output = String::new();
    for line in transcript.lines() {
        output.push_str(&render_line(line, use_color));
        output.push('\n');
    }
    output
}

fn render_line(line: &Line, use_color: bool) -> String {
    if !use_color {
        return line.content.clone();
    }
    match line.kind {
        LineKind::Notice => line.content.normal().to_string(),
        LineKind::Diagnostic => line.content.dimmed().to_string(),
        LineKind::Separator => line.content.dimmed().to_string(),
    }
}

pub fn print_transcript(transcript: &Transcript, use_color: bool) {
    print!("{}", render_transcript(transcript, use_color));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transcript {
        let mut out = Transcript::new();
        out.push(Line::diagnostic("adding Observer: Observer A"));
        out.push(Line::separator("----"));
        out.push(Line::notice("Observer A: Playing Fight Club..."));
        out
    }

    #[test]
    fn test_render_empty_transcript() {
        assert_eq!(render_transcript(&Transcript::new(), false), "");
    }

    #[test]
    fn test_render_plain() {
        let output = render_transcript(&sample(), false);
        assert_eq!(
            output,
            "adding Observer: Observer A\n----\nObserver A: Playing Fight Club...\n"
        );
    }

    #[test]
    fn test_render_with_color_includes_ansi() {
        colored::control::set_override(true);
        let output = render_transcript(&sample(), true);
        colored::control::unset_override();

        assert!(output.contains("\x1b["));
        assert!(output.contains("Observer A: Playing Fight Club..."));
    }
}
