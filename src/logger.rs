use std::{process::ExitCode, sync::Mutex};

use annotate_snippets::{AnnotationType, Renderer, Snippet};
use log::{Level, Log, Metadata, Record};
use tryutils::Result;

use crate::verbosity::Verbosity;

static NUM_ERRS: Mutex<u32> = Mutex::new(0);
static NUM_WARNINGS: Mutex<u32> = Mutex::new(0);

pub fn init(verbosity: Verbosity) -> Result<()> {
    let level: Level = verbosity.into();
    log::set_boxed_logger(Box::new(Logger { level }))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

pub fn exit_code() -> ExitCode {
    if *NUM_ERRS.lock().expect("failed to lock NUM_ERRS") > 0 {
        ExitCode::from(u8::MAX)
    } else if *NUM_WARNINGS.lock().expect("failed to lock NUM_WARNINGS") > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

struct Logger {
    level: Level,
}

impl Log for Logger {
    #[inline]
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    #[inline]
    fn log(&self, record: &Record<'_>) {
        let metadata = record.metadata();
        if !self.enabled(metadata) {
            return;
        }

        let level = metadata.level();
        if level >= Level::Trace {
            eprintln!("trace: {}", record.args());
        } else {
            let label = record.args().to_string();
            eprintln!("{}", render_title(level, &label));
        }

        match level {
            Level::Error => *NUM_ERRS.lock().expect("failed to lock NUM_ERRS") += 1,
            Level::Warn => *NUM_WARNINGS.lock().expect("failed to lock NUM_WARNINGS") += 1,
            _ => {}
        }
    }

    fn flush(&self) {}
}

fn annotation_type_of(level: Level) -> AnnotationType {
    match level {
        Level::Trace => AnnotationType::Note,
        Level::Error => AnnotationType::Error,
        Level::Info => AnnotationType::Info,
        Level::Warn => AnnotationType::Warning,
        Level::Debug => AnnotationType::Help,
    }
}

fn render_title(level: Level, label: &str) -> String {
    let snippet = Snippet {
        title: Some(annotate_snippets::Annotation {
            id: None,
            label: Some(label),
            annotation_type: annotation_type_of(level),
        }),
        footer: Vec::with_capacity(0),
        slices: Vec::with_capacity(0),
    };
    if !cfg!(test) {
        Renderer::styled()
    } else {
        Renderer::plain()
    }
    .render(snippet)
    .to_string()
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn titles() {
        assert_snapshot!(
            render_title(Level::Warn, "cannot read a.txt: not found"),
            @"warning: cannot read a.txt: not found"
        );
        assert_snapshot!(
            render_title(Level::Error, "cannot parse b.txt: invalid digit found in string"),
            @"error: cannot parse b.txt: invalid digit found in string"
        );
    }
}
