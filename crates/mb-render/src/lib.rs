pub mod boxes;
pub mod hit;
pub mod html;
pub mod icons;
pub mod outline;
pub mod render;

pub use boxes::{BoxStyle, BoxTag, ClickHandler, RenderBox};
pub use hit::{dispatch_click, find_box, path_to_box, selected_count};
pub use html::{outline_to_html, to_html};
pub use icons::{BuiltinIcons, IconRegistry};
pub use outline::{
    LabelMode, OutlineConfig, OutlineEvent, OutlineIcon, OutlineLine, OutlineState, render_outline,
};
pub use render::{
    RenderConfig, RenderContext, render, render_surface, render_surface_with, render_with,
};
