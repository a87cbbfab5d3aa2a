// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message formatting.
//!
//! Every line ctxlog produces has the shape
//!
//! ```text
//! {tag}{indent}{flag}|{message}
//! {tag}{indent}{flag}|{name}:{message}
//! ```
//!
//! where `depth` is the length of the current path when the message is formatted.
//! Decoration is chosen by the level's name, so a custom level spelled like a
//! built-in one is decorated like it.
//!
//! * SUCCESS: tag `C===`, indent `====` per level, flag `===3`.
//! * FAIL: tag and flag `|/X\`, indent `|XXX` followed by `|   ` per level below the first.
//! * DEBUG, WARNING, ERROR: indent `|   ` per level; tags `DBG|`, `WNG!`, `|/!\` and
//!   flags `|-->`, `|/!\`, `|/!\` respectively.
//! * Anything else: indent `|   ` per level, no tag, no flag.
//!
//! ```rust
//! use ctxlog::{Level, format_message};
//!
//! assert_eq!(format_message(&Level::Debug, "hi", 1, None), "DBG||   |-->|hi");
//! assert_eq!(format_message(&Level::Success, "ok", 1, None), "C==========3|ok");
//! ```

use crate::Level;

const BRANCH: &str = "|   ";

fn flag(level: &Level) -> &'static str {
    match level.as_str() {
        "SUCCESS" => "===3",
        "DEBUG" => "|-->",
        "WARNING" | "ERROR" => "|/!\\",
        "FAIL" => "|/X\\",
        _ => "",
    }
}

fn tag(level: &Level) -> &'static str {
    match level.as_str() {
        "SUCCESS" => "C===",
        "DEBUG" => "DBG|",
        "WARNING" => "WNG!",
        "ERROR" => "|/!\\",
        "FAIL" => "|/X\\",
        _ => "",
    }
}

fn indent(level: &Level, depth: usize) -> String {
    match level.as_str() {
        "SUCCESS" => "====".repeat(depth),
        // At the root a FAIL line still carries its marker.
        "FAIL" => format!("|XXX{}", BRANCH.repeat(depth.saturating_sub(1))),
        _ => BRANCH.repeat(depth),
    }
}

/**
Formats `message` at `level` for a cursor `depth` levels below the root.

When `name` is given and non-empty the message is prefixed with `name:`.
*/
pub fn format_message(level: &Level, message: &str, depth: usize, name: Option<&str>) -> String {
    let prefix = format!("{}{}{}|", tag(level), indent(level, depth), flag(level));
    match name {
        Some(name) if !name.is_empty() => format!("{prefix}{name}:{message}"),
        _ => format!("{prefix}{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::format_message;
    use crate::Level;
    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn root_level_lines() {
        assert_eq!(format_message(&Level::Debug, "m", 0, None), "DBG||-->|m");
        assert_eq!(format_message(&Level::Warning, "m", 0, None), "WNG!|/!\\|m");
        assert_eq!(format_message(&Level::Error, "m", 0, None), "|/!\\|/!\\|m");
        assert_eq!(format_message(&Level::Success, "m", 0, None), "C======3|m");
        assert_eq!(format_message(&Level::Fail, "m", 0, None), "|/X\\|XXX|/X\\|m");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn nested_lines() {
        assert_eq!(
            format_message(&Level::Debug, "m", 2, None),
            "DBG||   |   |-->|m"
        );
        assert_eq!(
            format_message(&Level::Fail, "m", 3, None),
            "|/X\\|XXX|   |   |/X\\|m"
        );
        assert_eq!(
            format_message(&Level::Success, "m", 2, None),
            format!("C==={}===3|m", "====".repeat(2))
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn unknown_levels_have_no_decoration() {
        assert_eq!(format_message(&Level::Info, "m", 1, None), "|   |m");
        assert_eq!(
            format_message(&Level::Custom("NOTE".into()), "m", 0, None),
            "|m"
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn builtin_names_decorate_custom_levels() {
        assert_eq!(
            format_message(&Level::Custom("DEBUG".into()), "x", 1, None),
            format_message(&Level::Debug, "x", 1, None)
        );
        assert_eq!(
            format_message(&Level::Custom("FAIL".into()), "x", 0, None),
            "|/X\\|XXX|/X\\|x"
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn named_lines() {
        assert_eq!(
            format_message(&Level::Debug, "m", 1, Some("probe")),
            "DBG||   |-->|probe:m"
        );
        assert_eq!(format_message(&Level::Debug, "m", 0, Some("")), "DBG||-->|m");
    }
}
