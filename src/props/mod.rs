//! Optional-field prop records and their shallow merge.
//!
//! [`Props`] is the partial prop set every pipeline stage produces. Each
//! field has a fixed JSON key and, for styling props, the token category
//! its `Text` and numeric values are looked up in.

use serde::{Deserialize, Serialize};
use tesserae_theme::TokenCategory;

mod macros;
use macros::define_props;

mod value;
pub use value::*;

use TokenCategory::*;

define_props! {
    /// A partial set of component props.
    pub struct Props {
        /// Palette name variants build their colors from, e.g. `primary`.
        color_scheme: "colorScheme" => None,
        /// Background color.
        bg: "bg" => Some(Colors),
        /// Foreground/text color.
        color: "color" => Some(Colors),
        border_color: "borderColor" => Some(Colors),
        placeholder_text_color: "placeholderTextColor" => Some(Colors),
        /// Dropdown arrow color of the Android picker.
        android_icon_color: "androidIconColor" => Some(Colors),
        border_width: "borderWidth" => Some(BorderWidths),
        border_radius: "borderRadius" => Some(Radii),
        outline_width: "outlineWidth" => Some(BorderWidths),
        m: "m" => Some(Space),
        mx: "mx" => Some(Space),
        my: "my" => Some(Space),
        p: "p" => Some(Space),
        px: "px" => Some(Space),
        py: "py" => Some(Space),
        w: "w" => Some(Sizes),
        h: "h" => Some(Sizes),
        min_w: "minW" => Some(Sizes),
        max_w: "maxW" => Some(Sizes),
        min_h: "minH" => Some(Sizes),
        /// Square size, used by icons.
        size: "size" => Some(Sizes),
        flex: "flex" => None,
        font_size: "fontSize" => Some(FontSizes),
        font_weight: "fontWeight" => Some(FontWeights),
        line_height: "lineHeight" => Some(LineHeights),
        opacity: "opacity" => Some(Opacity),
        cursor: "cursor" => None,
        /// `dialog` or `dropdown` on Android pickers.
        android_mode: "androidMode" => None,
        android_prompt: "androidPrompt" => None,
    }

    nested {
        /// Style of every entry in a native picker.
        item_style: "itemStyle",
        /// Props of each entry in a custom select sheet.
        item: "_item",
        /// Props of the selected entry in a custom select sheet.
        selected_item: "_selectedItem",
        action_sheet_content: "_actionSheetContent",
        dropdown_icon: "customDropdownIconProps",
        /// Header props a modal hands to its `ModalHeader`.
        header: "_header",
    }
}

/// Border props, split off a select so they land on its input.
pub const BORDER_PROPS: &[&str] = &["borderColor", "borderWidth", "borderRadius"];

/// Margin, layout, flex and background props, which land on a select's wrapper.
pub const LAYOUT_PROPS: &[&str] = &["m", "mx", "my", "w", "h", "minW", "maxW", "minH", "flex", "bg"];
