use std::ops::Range;

use crate::span::Span;

/// A record-level diagnostic (error or warning) against a source file.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    pub notes: Vec<String>,
    pub help: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

type Report = ariadne::Report<'static, (String, Range<usize>)>;

impl Diagnostic {
    pub fn error(message: String, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            message,
            span,
            notes: Vec::new(),
            help: None,
        }
    }

    pub fn warning(message: String, span: Span) -> Self {
        Self {
            severity: Severity::Warning,
            message,
            span,
            notes: Vec::new(),
            help: None,
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_help(mut self, help: String) -> Self {
        self.help = Some(help);
        self
    }

    fn build_report(&self, filename: &str, source: &str, color: bool) -> Report {
        use ariadne::{Color, Config, Label, ReportKind};

        let kind = match self.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
        };

        let label_color = match self.severity {
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
        };

        // ariadne 0.4 counts spans in characters, ours are bytes
        let range = char_range(source, self.span);

        let mut report = ariadne::Report::build(kind, filename.to_string(), range.start)
            .with_config(Config::default().with_color(color))
            .with_message(&self.message)
            .with_label(
                Label::new((filename.to_string(), range))
                    .with_message(&self.message)
                    .with_color(label_color),
            );

        for note in &self.notes {
            report = report.with_note(note);
        }

        if let Some(help) = &self.help {
            report = report.with_help(help);
        }

        report.finish()
    }

    /// Render the diagnostic to stderr using ariadne.
    pub fn render(&self, filename: &str, source: &str) {
        let report = self.build_report(filename, source, true);
        if let Err(e) = report.eprint((filename.to_string(), ariadne::Source::from(source))) {
            eprintln!("error: cannot render diagnostic: {}", e);
        }
    }

    /// Render without colour into a string.
    pub fn render_to_string(&self, filename: &str, source: &str) -> String {
        let report = self.build_report(filename, source, false);
        let mut out = Vec::new();
        match report.write(
            (filename.to_string(), ariadne::Source::from(source)),
            &mut out,
        ) {
            Ok(()) => String::from_utf8_lossy(&out).into_owned(),
            Err(_) => self.message.clone(),
        }
    }
}

/// Convert a byte span into a character range, clamped to the source.
fn char_range(source: &str, span: Span) -> Range<usize> {
    let to_chars = |byte: usize| {
        let mut byte = byte.min(source.len());
        while !source.is_char_boundary(byte) {
            byte -= 1;
        }
        source[..byte].chars().count()
    };
    to_chars(span.start as usize)..to_chars(span.end as usize)
}

/// Render a list of diagnostics.
pub fn render_diagnostics(diagnostics: &[Diagnostic], filename: &str, source: &str) {
    for diag in diagnostics {
        diag.render(filename, source);
    }
}
