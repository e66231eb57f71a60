// crates/calendar_permission_keys/src/lib.rs

//! Fixed strings shared by the calendar‑permission patcher and its CLI.

/// Build setting that appears once per XCBuildConfiguration of the app target.
pub const ANCHOR_KEY: &str = "INFOPLIST_KEY_UISupportedInterfaceOrientations_iPhone";

/// Regex for the full anchor statement. Group 1 is the statement verbatim.
pub const ANCHOR_PATTERN: &str =
    r#"(INFOPLIST_KEY_UISupportedInterfaceOrientations_iPhone = "[^"]+";)"#;

pub const CALENDARS_USAGE_KEY: &str = "INFOPLIST_KEY_NSCalendarsUsageDescription";
pub const CALENDARS_USAGE_DESCRIPTION: &str =
    "This app needs access to your calendar to import events for tracking and visualization.";

pub const CALENDARS_FULL_ACCESS_KEY: &str = "INFOPLIST_KEY_NSCalendarsFullAccessUsageDescription";
pub const CALENDARS_FULL_ACCESS_DESCRIPTION: &str =
    "This app needs full access to your calendar to import events for tracking and visualization.";

/// Indentation of a `buildSettings` entry inside an XCBuildConfiguration.
pub const INDENT: &str = "\t\t\t\t";

/// Short Info.plist names of the keys added, for reporting.
pub const ADDED_KEY_NAMES: [&str; 2] = [
    "NSCalendarsUsageDescription",
    "NSCalendarsFullAccessUsageDescription",
];

/// Appended to the project file name to form the backup path.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Project descriptor location, relative to the repository root.
pub const DEFAULT_PROJECT_FILE: &str = "trendy.xcodeproj/project.pbxproj";

/// The two statement lines inserted after each anchor.
/// Lines are joined by `\n`; there is no trailing newline.
pub fn insertion_block() -> String {
    format!(
        "{indent}{} = \"{}\";\n{indent}{} = \"{}\";",
        CALENDARS_USAGE_KEY,
        CALENDARS_USAGE_DESCRIPTION,
        CALENDARS_FULL_ACCESS_KEY,
        CALENDARS_FULL_ACCESS_DESCRIPTION,
        indent = INDENT,
    )
}
