//! Commented default config written on first run.

pub(super) fn default_config_toml() -> &'static str {
    r##"# Livepane Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Playground"
# width = 1280
# height = 800
# toolbar_height = 72    # 24-200
# footer_height = 52     # 0-200
# footer_owner = "Livepane"

[editor]
# initial_mode = "html-css-js"   # or "html-css"
# light_theme = "eclipse"
# dark_theme = "dracula"

[theme]
# initial = "light"      # or "dark"

[theme.light]
# navbar_bg = "#EDF2F7"
# navbar_text = "#000000"
# border = "#E2E8F0"
# panel_border = "#808080"
# handle = "#E2E8F0"
# preview_bg = "#FFFFFF"

[theme.dark]
# navbar_bg = "#1A202C"
# navbar_text = "#FFFFFF"
# border = "#4A5568"
# panel_border = "#808080"
# handle = "#4A5568"
# preview_bg = "#FFFFFF"

[panels]
# default_height = 300   # 20-4000
# handle_height = 10     # 2-64
# min_height = 0         # 0-default_height
# editor_column_min_width = 300
# column_gap = 8

[snippets]
# html = "<h1>Hello World!</h1>"
# css = "h1 { color: blue; }"
# js = 'console.log("JavaScript is running");'

[logging]
# level = "livepane=info"
"##
}
