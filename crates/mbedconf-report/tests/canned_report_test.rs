//! Integration tests with a realistic captured configuration report
//!
//! Drives the acquire → extract → render pipeline with canned toolchain
//! output instead of a real `mbed` process.

use std::path::Path;

use mbedconf_core::{Error, MacroRecord, Result, ToolchainConfig};
use mbedconf_report::acquire::{ConfigDumper, ReportAcquirer, ToolchainOutput};
use mbedconf_report::{ensure_target_marker, extract_macros, render_header};

/// Realistic report text (based on `mbed compile --config` output)
const CONFIG_REPORT: &str = r#"[mbed] Working path "/work/mbed-simulator-hal" (program)
Configuration parameters
------------------------
Name: platform.default-serial-baud-rate
    Defined by: library:platform
    Macro name: MBED_CONF_PLATFORM_DEFAULT_SERIAL_BAUD_RATE
platform.default-serial-baud-rate = 9600 (macro name: "MBED_CONF_PLATFORM_DEFAULT_SERIAL_BAUD_RATE")
platform.stdio-buffered-serial = 0 (macro name: "MBED_CONF_PLATFORM_STDIO_BUFFERED_SERIAL")
events.shared-eventsize = 256 (macro name: "MBED_CONF_EVENTS_SHARED_EVENTSIZE")

Macros
------
_RTE_
NDEBUG
TOOLCHAIN_GCC
"#;

struct CannedDumper {
    code: i32,
    text: &'static str,
}

impl ConfigDumper for CannedDumper {
    fn dump_config(&self, _folder: &Path, _config: &ToolchainConfig) -> Result<ToolchainOutput> {
        Ok(ToolchainOutput {
            code: self.code,
            text: self.text.to_string(),
        })
    }
}

#[test]
fn test_full_pipeline_from_canned_report() {
    let acquirer = ReportAcquirer::new(
        CannedDumper {
            code: 0,
            text: CONFIG_REPORT,
        },
        ToolchainConfig::default(),
    );

    let report = acquirer.acquire(Path::new(".")).unwrap();
    let macros = extract_macros(&report);

    assert_eq!(
        macros,
        vec![
            MacroRecord::with_value("MBED_CONF_PLATFORM_DEFAULT_SERIAL_BAUD_RATE", "9600"),
            MacroRecord::with_value("MBED_CONF_PLATFORM_STDIO_BUFFERED_SERIAL", "0"),
            MacroRecord::with_value("MBED_CONF_EVENTS_SHARED_EVENTSIZE", "256"),
            MacroRecord::defined("_RTE_"),
            MacroRecord::defined("NDEBUG"),
            MacroRecord::defined("TOOLCHAIN_GCC"),
        ]
    );

    let header = render_header(&macros);

    assert!(header.starts_with("// Generated by mbedconf"));
    assert!(header.contains("#ifndef MBED_CONF_PLATFORM_DEFAULT_SERIAL_BAUD_RATE\n"));
    assert!(header.contains("#define MBED_CONF_PLATFORM_DEFAULT_SERIAL_BAUD_RATE 9600\n"));
    assert!(header.contains("#define NDEBUG\n"));
    assert_eq!(header.matches("#endif").count(), 6);
}

#[test]
fn test_failed_invocation_produces_no_header() {
    let acquirer = ReportAcquirer::new(
        CannedDumper {
            code: 1,
            text: "[mbed] ERROR: The mbed tools were not found\n",
        },
        ToolchainConfig::default(),
    );

    let err = acquirer.acquire(Path::new(".")).unwrap_err();
    match err {
        Error::ToolchainInvocation { code, output } => {
            assert_eq!(code, 1);
            assert!(output.contains("mbed tools were not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_marker_then_pipeline() {
    let temp = tempfile::TempDir::new().unwrap();

    ensure_target_marker(temp.path(), "K64F").unwrap();

    let acquirer = ReportAcquirer::new(
        CannedDumper {
            code: 0,
            text: CONFIG_REPORT,
        },
        ToolchainConfig::default(),
    );

    let report = acquirer.acquire(temp.path()).unwrap();
    let macros = extract_macros(&report);
    assert_eq!(macros.len(), 6);

    let marker = std::fs::read_to_string(temp.path().join(".mbed")).unwrap();
    assert_eq!(marker, "ROOT=.\nTARGET=K64F\n");
}
