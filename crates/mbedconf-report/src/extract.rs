//! Report Extraction
//!
//! State machine over the toolchain's free-form two-section report.
//! The report interleaves prose with configuration lines; anything not
//! recognized is skipped rather than treated as an error.

use mbedconf_core::MacroRecord;
use regex::Regex;

/// Marker line opening the configuration-parameters section
const CONFIG_MARKER: &str = "Configuration parameters";

/// Marker line opening the bare-macros section
const MACROS_MARKER: &str = "Macros";

/// Section of the report currently being scanned.
///
/// Transitions are one-directional: the report format never revisits an
/// earlier section once it has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Neutral,
    Config,
    Macros,
}

/// Extract all macro records from a configuration report, in report order.
///
/// Configuration lines look like
/// `platform.stdio-baud-rate = 9600 (macro name: "MBED_CONF_PLATFORM_STDIO_BAUD_RATE")`;
/// the macros section lists one bare macro name per line. The complete
/// sequence is returned only after the whole report has been scanned.
/// An empty report yields an empty list.
pub fn extract_macros(report: &str) -> Vec<MacroRecord> {
    let config_line = Regex::new(r#"([^=]+)=\s*([^(]+)\(macro name: "([^"]+)"\)"#).unwrap();

    let mut section = Section::Neutral;
    let mut macros = Vec::new();

    for line in report.lines() {
        if line == CONFIG_MARKER {
            if section == Section::Neutral {
                section = Section::Config;
            }
            continue;
        }
        if line == MACROS_MARKER {
            section = Section::Macros;
            continue;
        }

        match section {
            Section::Neutral => {}
            Section::Config => {
                if let Some(caps) = config_line.captures(line) {
                    macros.push(MacroRecord::with_value(&caps[3], caps[2].trim()));
                }
            }
            Section::Macros => {
                let word_initial = line
                    .chars()
                    .next()
                    .map(|c| c.is_alphanumeric() || c == '_')
                    .unwrap_or(false);
                if word_initial {
                    macros.push(MacroRecord::defined(line));
                }
            }
        }
    }

    macros
}
