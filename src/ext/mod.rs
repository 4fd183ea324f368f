mod markup_ext;
mod path_display_ext;

pub use markup_ext::MarkupExt;
pub use path_display_ext::PathDisplayExt;
