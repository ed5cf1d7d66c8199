//! Inline SVG icons (Lucide).

use dioxus::prelude::*;
use onboard_core::VisibilityIcon;

/// Eye / eye-off glyph for the password visibility toggle.
#[component]
pub fn EyeIcon(icon: VisibilityIcon) -> Element {
    match icon {
        VisibilityIcon::Eye => rsx! {
            // Lucide eye icon
            svg {
                class: "icon icon-eye",
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z" }
                circle { cx: "12", cy: "12", r: "3" }
            }
        },
        VisibilityIcon::EyeSlash => rsx! {
            // Lucide eye-off icon
            svg {
                class: "icon icon-eye-off",
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M9.88 9.88a3 3 0 1 0 4.24 4.24" }
                path { d: "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68" }
                path { d: "M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61" }
                line { x1: "2", y1: "2", x2: "22", y2: "22" }
            }
        },
    }
}

/// Accessible label for the toggle that shows `icon`.
pub fn visibility_label(icon: VisibilityIcon) -> &'static str {
    match icon {
        VisibilityIcon::Eye => "Show password",
        VisibilityIcon::EyeSlash => "Hide password",
    }
}
