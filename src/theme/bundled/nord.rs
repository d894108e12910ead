//! Nord - Arctic, bluish color palette

pub const THEME: &str = r##"# Nord theme
# Arctic, bluish color palette

[meta]
name = "Nord"
version = 1

[ui]
background = "#2e3440"
foreground = "#d8dee9"
border = "#4c566a"
border_focused = "#ebcb8b"
title = "#88c0d0"
status_bar = "#d8dee9"
selection_bg = "#eceff4"
selection_fg = "#2e3440"

[status]
success = "#a3be8c"
warning = "#ebcb8b"
error = "#bf616a"

[panels]
list = "#88c0d0"
create = "#a3be8c"
edit = "#b48ead"
logs = "#81a1c1"
"##;
