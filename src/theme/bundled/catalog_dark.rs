//! Catalog Dark - default theme

pub const THEME: &str = r##"# Catalog Dark theme
# Warm neutrals with a brass accent

[meta]
name = "Catalog Dark"
version = 1

[ui]
background = "#28292d"
foreground = "#d4cfc9"
border = "#3a3b40"
border_focused = "#c9a66b"
title = "#c9a66b"
status_bar = "#c9a66b"
selection_bg = "#3d3834"
selection_fg = "#e8e4df"
muted = "#8a8279"
border_type = "rounded"

[status]
success = "#8fad5c"
warning = "#d4a656"
error = "#c75f4a"

[panels]
list = "#6b98b8"
create = "#8fad5c"
edit = "#a88fad"
logs = "#5da9a1"
"##;
