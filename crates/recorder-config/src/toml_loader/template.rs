//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Shortcut Recorder Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# Input source used to derive ASCII key codes.
# Defaults to the system's ASCII-capable layout.
# ascii_input_source = "com.apple.keylayout.US"

[display]
# uppercase_letters = true

[shift_correction]
# How symbolic modifier flags pick up an implicit Shift:
#   "layout"    -- the character sits behind Shift on the current layout
#   "key_codes" -- the symbolic key code is listed in key_codes
#   "none"      -- never
# rule = "layout"
# key_codes = []         # 0-127

[resources]
# directory = "/usr/local/share/shortcut-recorder"

[logging]
# level = "INFO"         # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
