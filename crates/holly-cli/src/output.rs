use serde::Serialize;

use crate::cli::OutputFormat;

/// A command response that can render itself as a plain-text table in
/// addition to the serde-driven JSON formats.
pub trait Render: Serialize {
    /// Human-readable rendering for `--format table`.
    fn table(&self) -> String;
}

/// Render a response to a string in the requested format.
pub fn render<T: Render>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(value.table()),
    }
}

/// Print a response in the requested format.
pub fn output<T: Render>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Serialize)]
    struct Sample {
        count: u32,
    }

    impl Render for Sample {
        fn table(&self) -> String {
            format!("count: {}", self.count)
        }
    }

    #[test]
    fn formats_render_differently() {
        let sample = Sample { count: 3 };
        assert_eq!(render(&sample, OutputFormat::Raw).unwrap(), r#"{"count":3}"#);
        assert_eq!(render(&sample, OutputFormat::Table).unwrap(), "count: 3");
        assert!(render(&sample, OutputFormat::Json).unwrap().contains('\n'));
    }
}
