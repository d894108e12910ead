//! Solarized Light - Ethan Schoonover's precision color palette (light variant)

pub const THEME: &str = r##"# Solarized Light theme

[meta]
name = "Solarized Light"
version = 1

[ui]
background = "#fdf6e3"
foreground = "#657b83"
border = "#93a1a1"
border_focused = "#657b83"
title = "#657b83"
status_bar = "#657b83"
selection_bg = "#eee8d5"
selection_fg = "#657b83"
muted = "#93a1a1"

[status]
success = "#859900"
warning = "#b58900"
error = "#dc322f"

[panels]
list = "#268bd2"
create = "#2aa198"
edit = "#d33682"
logs = "#6c71c4"
"##;
