//! Rendering of conversion warnings for the user.
//!
//! Warnings are written as a bulleted list between two banners. When the YAML
//! goes to stdout right after, a short lead-in introduces it. Nothing is
//! written when there are no warnings.

use std::io::{self, Write};

use crate::translate::Warning;

/// Banner printed before the warning list.
pub const HEADER_BANNER: &str = "--- Conversion Warnings and Suggestions ---";

/// Banner printed after the warning list.
pub const FOOTER_BANNER: &str = "------------------------------------------";

/// Line introducing the YAML output.
pub const OUTPUT_LEAD_IN: &str = "YAML output (review carefully):";

/// Write `warnings` to `out` framed by the banners.
///
/// `yaml_follows` adds the [`OUTPUT_LEAD_IN`] line; pass `false` when the
/// YAML is written to a file.
pub fn write_warnings<W: Write>(
    out: &mut W,
    warnings: &[Warning],
    yaml_follows: bool,
) -> io::Result<()> {
    if warnings.is_empty() {
        return Ok(());
    }

    writeln!(out, "{HEADER_BANNER}")?;
    for warning in warnings {
        writeln!(out, "- {warning}")?;
    }
    writeln!(out, "{FOOTER_BANNER}")?;
    if yaml_follows {
        writeln!(out, "{OUTPUT_LEAD_IN}")?;
        writeln!(out)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(warnings: &[Warning], yaml_follows: bool) -> String {
        let mut buf = Vec::new();
        write_warnings(&mut buf, warnings, yaml_follows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_no_warnings_writes_nothing() {
        assert_eq!(render(&[], true), "");
        assert_eq!(render(&[], false), "");
    }

    #[test]
    fn test_warnings_are_framed() {
        let out = render(&[Warning::new("first"), Warning::new("second")], true);

        assert_eq!(
            out,
            "--- Conversion Warnings and Suggestions ---\n\
             - first\n\
             - second\n\
             ------------------------------------------\n\
             YAML output (review carefully):\n\n"
        );
    }

    #[test]
    fn test_lead_in_skipped_when_yaml_goes_to_file() {
        let out = render(&[Warning::new("only")], false);

        assert_eq!(
            out,
            "--- Conversion Warnings and Suggestions ---\n\
             - only\n\
             ------------------------------------------\n"
        );
        assert!(!out.contains(OUTPUT_LEAD_IN));
    }
}
