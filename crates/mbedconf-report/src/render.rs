//! Header Rendering
//!
//! Renders extracted macro records as self-guarding C preprocessor text.

use mbedconf_core::MacroRecord;

/// Provenance comment emitted at the top of every generated header
const PROVENANCE: &str = "// Generated by mbedconf. Do not edit.\n\n";

/// Render macro records into header text, one include-guard block per
/// record, in input order.
///
/// Duplicate keys each get their own guard block; the guards make the
/// first definition in report order win. Pure text transformation, no I/O.
pub fn render_header(macros: &[MacroRecord]) -> String {
    let mut output = String::from(PROVENANCE);

    for record in macros {
        output.push_str(&format!("#ifndef {}\n", record.key));
        match &record.value {
            Some(value) => output.push_str(&format!("#define {} {}\n", record.key, value)),
            None => output.push_str(&format!("#define {}\n", record.key)),
        }
        output.push_str("#endif\n\n");
    }

    output
}
